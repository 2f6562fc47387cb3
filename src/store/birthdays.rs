//! Upcoming-birthday window query.
//!
//! A birthday is re-anchored to the year of `today` (or the following year if
//! that date already passed) and kept when it falls in the half-open window
//! `[today, today + window_days)`. Matches are grouped by the weekday they
//! land on.

use crate::models::ContactRecord;
use chrono::{Datelike, NaiveDate, Weekday};

/// Default width of the window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Contacts whose birthday lands on one weekday within the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayGroup {
    pub weekday: Weekday,
    /// First date in the window falling on `weekday`
    pub date: NaiveDate,
    pub names: Vec<String>,
}

impl BirthdayGroup {
    /// English name of the weekday, e.g. `"Monday"`.
    pub fn day_name(&self) -> String {
        self.date.format("%A").to_string()
    }
}

/// Result of the window query, ordered by the first date each weekday
/// appears on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    groups: Vec<BirthdayGroup>,
}

impl UpcomingBirthdays {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[BirthdayGroup] {
        &self.groups
    }

    /// Names grouped under `weekday`, if any.
    pub fn get(&self, weekday: Weekday) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|group| group.weekday == weekday)
            .map(|group| group.names.as_slice())
    }

    fn push(&mut self, date: NaiveDate, name: String) {
        let weekday = date.weekday();
        match self.groups.iter_mut().find(|group| group.weekday == weekday) {
            Some(group) => group.names.push(name),
            None => self.groups.push(BirthdayGroup {
                weekday,
                date,
                names: vec![name],
            }),
        }
    }
}

/// Collect the contacts with a birthday in `[today, today + window_days)`.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate, window_days: u32) -> UpcomingBirthdays
where
    I: IntoIterator<Item = &'a ContactRecord>,
{
    let mut matches: Vec<(i64, NaiveDate, String)> = records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let anchored = next_occurrence(birthday.date(), today)?;
            let delta = (anchored - today).num_days();

            (delta < i64::from(window_days)).then(|| (delta, anchored, record.name().to_string()))
        })
        .collect();

    // Stable, so records sharing a date keep store order.
    matches.sort_by_key(|(delta, _, _)| *delta);

    let mut upcoming = UpcomingBirthdays::default();
    for (_, anchored, name) in matches {
        upcoming.push(anchored, name);
    }

    tracing::debug!(
        window_days,
        %today,
        groups = upcoming.groups.len(),
        "Computed upcoming birthdays"
    );

    upcoming
}

/// The next date on or after `today` that `birthday` is celebrated.
///
/// Returns `None` only when the date cannot be represented.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anchor_to_year(birthday, today.year())?;

    if this_year < today {
        anchor_to_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move `birthday` into `year`. 29 February falls back to 28 February in
/// non-leap years.
fn anchor_to_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday.with_year(year).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}
