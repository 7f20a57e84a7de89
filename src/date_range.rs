//! Resolution of `--from` values into the lower bound of the commit window.
//!
//! A value is either one of the relative keywords in [`FROM_KEYWORDS`] or a
//! literal `yyyy-MM-dd` date. Every value resolves to midnight, in the
//! timezone of the reference instant, of the day it designates.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, TimeZone};
use regex::Regex;

use crate::error::{Error, Result};

/// Relative keywords accepted by [`resolve`].
pub const FROM_KEYWORDS: [&str; 5] = ["ytd", "mtd", "wtd", "yesterday", "today"];

/// Default `--from` value.
pub const DEFAULT_FROM: &str = "wtd";

const DATE_LITERAL: &str = r"^\d{4}-\d{2}-\d{2}$";

/// Resolve `token` against the reference instant `now`.
///
/// - `ytd`: January 1st of the reference year
/// - `mtd`: first day of the reference month
/// - `wtd`: Monday of the reference week (a Sunday belongs to the week that
///   started six days earlier)
/// - `today` / `yesterday`: the reference day and the one before it
/// - `yyyy-MM-dd`: that calendar day
///
/// Anything else, including a well-formed but impossible date such as
/// `2019-02-30`, yields [`Error::DateToken`].
pub fn resolve<Tz: TimeZone>(token: &str, now: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let unrecognized = || Error::DateToken {
        token: token.to_string(),
    };

    let today = now.date_naive();
    let day = match token {
        "ytd" => today.with_ordinal(1),
        "mtd" => today.with_day(1),
        "wtd" => {
            let since_monday = today.weekday().num_days_from_monday();
            today.checked_sub_days(Days::new(u64::from(since_monday)))
        }
        "today" => Some(today),
        "yesterday" => today.pred_opt(),
        literal => parse_literal(literal)?,
    }
    .ok_or_else(unrecognized)?;

    start_of_day(&now.timezone(), day).ok_or_else(unrecognized)
}

/// Resolve `token` against the current local time.
pub fn resolve_now(token: &str) -> Result<DateTime<Local>> {
    resolve(token, &Local::now())
}

/// The calendar day written as `yyyy-MM-dd`, if `literal` is one.
fn parse_literal(literal: &str) -> Result<Option<NaiveDate>> {
    let regex = Regex::new(DATE_LITERAL).map_err(Error::Regex)?;
    if !regex.is_match(literal) {
        return Ok(None);
    }
    Ok(NaiveDate::parse_from_str(literal, "%Y-%m-%d").ok())
}

/// First instant of `day` in `tz`.
///
/// When a DST transition skips local midnight, the day starts at 01:00.
fn start_of_day<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> Option<DateTime<Tz>> {
    [0, 1].into_iter().find_map(|hour| {
        let local = day.and_hms_opt(hour, 0, 0)?;
        tz.from_local_datetime(&local).earliest()
    })
}
