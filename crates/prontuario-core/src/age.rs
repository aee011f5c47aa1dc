//! Age computation from a `DD/MM/YYYY` birth date.

use chrono::{Datelike, Local, NaiveDate};

/// Age in whole years on `today`, or `None` for empty or unparseable input.
///
/// The usual "had this year's birthday yet" rule: year difference, minus one
/// while the birthday is still ahead in the current year.
pub fn age_on(birth_date: &str, today: NaiveDate) -> Option<i64> {
    let birth = NaiveDate::parse_from_str(birth_date.trim(), "%d/%m/%Y").ok()?;

    let mut age = i64::from(today.year() - birth.year());
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age)
}

/// Age in whole years as of the current local date.
pub fn age_from_birth_date(birth_date: &str) -> Option<i64> {
    age_on(birth_date, Local::now().date_naive())
}
