use fortune_client::menu::{self, Action};
use fortune_shared::api::{CreateResponse, PickResponse, StatsResponse};
use std::io::Cursor;

#[test]
fn parses_menu_choices() {
    assert_eq!(Action::from_choice("1\n"), Some(Action::Pick));
    assert_eq!(Action::from_choice(" 2 "), Some(Action::Create));
    assert_eq!(Action::from_choice("3"), Some(Action::Stats));
    assert_eq!(Action::from_choice("0"), None);
    assert_eq!(Action::from_choice("4"), None);
    assert_eq!(Action::from_choice("pick"), None);
    assert_eq!(Action::from_choice(""), None);
}

#[test]
fn read_action_reprompts_until_valid() {
    let mut input = Cursor::new("x\n9\n3\n");
    let mut out = Vec::new();

    let action = menu::read_action(&mut input, &mut out).unwrap();

    assert_eq!(action, Some(Action::Stats));
    let printed = String::from_utf8(out).unwrap();
    assert_eq!(printed.matches("Enter 1, 2 or 3.").count(), 2);
    assert_eq!(printed.matches("(1) Open a fortune cookie").count(), 3);
}

#[test]
fn read_action_stops_at_end_of_input() {
    let mut input = Cursor::new("nope\n");
    let mut out = Vec::new();

    assert_eq!(menu::read_action(&mut input, &mut out).unwrap(), None);
}

#[test]
fn prompt_fortune_trims_input() {
    let mut input = Cursor::new("  Good things come.  \nAlice\n");
    let mut out = Vec::new();

    let fortune = menu::prompt_fortune(&mut input, &mut out).unwrap();

    assert_eq!(
        fortune,
        Some(("Good things come.".to_string(), "Alice".to_string()))
    );
}

#[test]
fn prompt_fortune_rejects_empty_content_before_asking_author() {
    let mut input = Cursor::new("\nAlice\n");
    let mut out = Vec::new();

    let fortune = menu::prompt_fortune(&mut input, &mut out).unwrap();

    assert_eq!(fortune, None);
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Content is required"));
    assert!(!printed.contains("Enter the author"));
}

#[test]
fn prompt_fortune_rejects_long_author() {
    let raw = format!("Fine.\n{}\n", "A".repeat(33));
    let mut input = Cursor::new(raw);
    let mut out = Vec::new();

    let fortune = menu::prompt_fortune(&mut input, &mut out).unwrap();

    assert_eq!(fortune, None);
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Author must be at most 32 characters"));
}

#[test]
fn formats_results() {
    let mut out = Vec::new();
    menu::write_pick(
        &mut out,
        &PickResponse {
            content: "Good things come.".into(),
            author: "Alice".into(),
            creator: "bob".into(),
        },
    )
    .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\n\"Good things come.\"\n  - Alice (bob)\n"
    );

    let mut out = Vec::new();
    menu::write_create(
        &mut out,
        "bobby",
        &CreateResponse {
            all_count: 7,
            user_count: 2,
        },
    )
    .unwrap();
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Total fortune cookies: 7"));
    assert!(printed.contains("Fortune cookies made by bobby: 2"));

    let mut out = Vec::new();
    menu::write_stats(
        &mut out,
        "bobby",
        &StatsResponse {
            all_count: 7,
            user_count: 2,
            all_visits: 30,
            today_visits: 4,
        },
    )
    .unwrap();
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("All visits: 30"));
    assert!(printed.contains("Visits today: 4"));
}
