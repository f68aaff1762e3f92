use std::io::{self, BufRead, Write};

use fortune_shared::api::{CreateResponse, PickResponse, StatsResponse};
use fortune_shared::constants::APP_NAME;
use fortune_shared::validation::{validate_author, validate_content};

use crate::api::FortuneClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Pick,
    Create,
    Stats,
}

impl Action {
    /// Parses a menu selection such as `"2\n"`.
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(Action::Pick),
            2 => Some(Action::Create),
            3 => Some(Action::Stats),
            _ => None,
        }
    }
}

pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    write!(
        out,
        "------- {} -------\n\
         (1) Open a fortune cookie\n\
         (2) Make a fortune cookie\n\
         (3) Show statistics\n",
        APP_NAME
    )
}

/// Shows the menu until a valid selection is read. `None` on end of input.
pub fn read_action<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<Action>> {
    loop {
        print_menu(out)?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match Action::from_choice(&line) {
            Some(action) => return Ok(Some(action)),
            None => write!(out, "Enter 1, 2 or 3.\n\n")?,
        }
    }
}

/// Asks for the content and author of a new fortune, checking both against
/// the server's limits. `None` if either is rejected or input ends.
pub fn prompt_fortune<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<(String, String)>> {
    write!(out, "Enter the message: ")?;
    out.flush()?;
    let Some(content) = read_line(input)? else {
        return Ok(None);
    };
    if let Err(e) = validate_content(&content) {
        writeln!(out, "{}", e)?;
        return Ok(None);
    }

    write!(out, "Enter the author: ")?;
    out.flush()?;
    let Some(author) = read_line(input)? else {
        return Ok(None);
    };
    if let Err(e) = validate_author(&author) {
        writeln!(out, "{}", e)?;
        return Ok(None);
    }

    Ok(Some((content, author)))
}

/// Runs one menu round: select an action, perform it, print the result.
pub fn run<R: BufRead, W: Write>(client: &FortuneClient, input: &mut R, out: &mut W) -> io::Result<()> {
    let Some(action) = read_action(input, out)? else {
        return Ok(());
    };

    match action {
        Action::Pick => match client.pick() {
            Ok(fortune) => write_pick(out, &fortune),
            Err(e) => writeln!(out, "Error: {}", e),
        },
        Action::Create => {
            let Some((content, author)) = prompt_fortune(input, out)? else {
                return Ok(());
            };
            match client.create(&content, &author) {
                Ok(counts) => write_create(out, client.username(), &counts),
                Err(e) => writeln!(out, "Error: {}", e),
            }
        }
        Action::Stats => match client.stats() {
            Ok(stats) => write_stats(out, client.username(), &stats),
            Err(e) => writeln!(out, "Error: {}", e),
        },
    }
}

pub fn write_pick<W: Write>(out: &mut W, fortune: &PickResponse) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "\"{}\"\n  - {} ({})",
        fortune.content, fortune.author, fortune.creator
    )
}

pub fn write_create<W: Write>(out: &mut W, username: &str, counts: &CreateResponse) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Fortune cookie created!")?;
    writeln!(out, "Total fortune cookies: {}", counts.all_count)?;
    writeln!(out, "Fortune cookies made by {}: {}", username, counts.user_count)
}

pub fn write_stats<W: Write>(out: &mut W, username: &str, stats: &StatsResponse) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total fortune cookies: {}", stats.all_count)?;
    writeln!(out, "Fortune cookies made by {}: {}", username, stats.user_count)?;
    writeln!(out, "All visits: {}", stats.all_visits)?;
    writeln!(out, "Visits today: {}", stats.today_visits)
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
