//! Units of work behind the HTTP handlers.
//!
//! Each write path owns its transaction: the statements run on the same
//! connection and are committed together, so the counts a caller gets back
//! always include its own write. Returning early with `?` drops the
//! uncommitted transaction, which rolls it back.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use fortune_shared::api::{CreateResponse, StatsResponse};
use sqlx::{AnyConnection, AnyPool};

use crate::models::{Fortune, VisitType};

/// Picks a random fortune and logs a `Pick` visit for `username`.
///
/// Fails with `sqlx::Error::RowNotFound` when no fortunes are stored; in that
/// case no visit is recorded.
pub async fn pick(pool: &AnyPool, username: &str) -> Result<Fortune, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let fortune = sqlx::query_as::<_, Fortune>(
        "SELECT content, author, creator FROM messages ORDER BY random() LIMIT 1",
    )
    .fetch_one(&mut *tx)
    .await?;

    record_visit(&mut tx, username, VisitType::Pick).await?;

    tx.commit().await?;
    Ok(fortune)
}

/// Stores a fortune, counts messages overall and by `username`, and logs a
/// `Create` visit.
pub async fn create(
    pool: &AnyPool,
    content: &str,
    author: &str,
    username: &str,
) -> Result<CreateResponse, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO messages (content, author, creator) VALUES ($1, $2, $3)")
        .bind(content)
        .bind(author)
        .bind(username)
        .execute(&mut *tx)
        .await?;

    let all_count = count_messages(&mut tx).await?;
    let user_count = count_messages_by(&mut tx, username).await?;

    record_visit(&mut tx, username, VisitType::Create).await?;

    tx.commit().await?;
    Ok(CreateResponse {
        all_count,
        user_count,
    })
}

/// Read-only usage counters. `today` is the half-open range of epoch seconds
/// returned by [`day_bounds`].
pub async fn stats(
    pool: &AnyPool,
    username: &str,
    today: (i64, i64),
) -> Result<StatsResponse, sqlx::Error> {
    let mut conn = pool.acquire().await?;

    let all_count = count_messages(&mut conn).await?;
    let user_count = count_messages_by(&mut conn, username).await?;

    let all_visits = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM visits")
        .fetch_one(&mut *conn)
        .await?;

    let (start, end) = today;
    let today_visits = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM visits WHERE created >= $1 AND created < $2",
    )
    .bind(start)
    .bind(end)
    .fetch_one(&mut *conn)
    .await?;

    Ok(StatsResponse {
        all_count,
        user_count,
        all_visits: to_count(all_visits),
        today_visits: to_count(today_visits),
    })
}

/// Start of the day containing `now` and start of the following day, both
/// as epoch seconds in `now`'s time zone.
pub fn day_bounds<Tz: TimeZone>(now: &DateTime<Tz>) -> (i64, i64) {
    let tz = now.timezone();
    let today = now.date_naive();
    let tomorrow = today + Duration::days(1);

    let start_of = |date: chrono::NaiveDate| {
        let midnight = date.and_time(NaiveTime::MIN);
        // A zone can skip midnight on DST changes; fall back to UTC then
        tz.from_local_datetime(&midnight)
            .earliest()
            .map(|dt| dt.timestamp())
            .unwrap_or_else(|| midnight.and_utc().timestamp())
    };

    (start_of(today), start_of(tomorrow))
}

async fn record_visit(
    conn: &mut AnyConnection,
    username: &str,
    visit_type: VisitType,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO visits (username, type, created) VALUES ($1, $2, $3)")
        .bind(username)
        .bind(visit_type.as_str())
        .bind(Utc::now().timestamp())
        .execute(conn)
        .await?;
    Ok(())
}

async fn count_messages(conn: &mut AnyConnection) -> Result<u64, sqlx::Error> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages")
        .fetch_one(conn)
        .await?;
    Ok(to_count(count))
}

async fn count_messages_by(conn: &mut AnyConnection, creator: &str) -> Result<u64, sqlx::Error> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages WHERE creator = $1")
        .bind(creator)
        .fetch_one(conn)
        .await?;
    Ok(to_count(count))
}

fn to_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}
