// SPDX-License-Identifier: MIT

//!
//! Calendar distances between timestamps
//!

use crate::{Granularity, Timestamp};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// The signed number of whole `granularity` units between `from` and `to`.
///
/// Negative if `to` is before `from`.  Partial units are truncated towards
/// zero, so 23 hours is 0 days and -23 hours is also 0 days.
///
/// Clock units (milliseconds to hours) are measured on the elapsed time.
/// Calendar units (days and coarser) are measured on the calendar fields, so a
/// month is a month whatever its length: 31st Jan to 28th Feb is 0 months, but
/// 28th Feb to 28th Mar is 1.
pub fn distance(from: Timestamp, to: Timestamp, granularity: Granularity) -> i64 {
    let from = from.as_naive();
    let to = to.as_naive();
    let elapsed = to.signed_duration_since(from);
    match granularity {
        Granularity::Millisecond => elapsed.num_milliseconds(),
        Granularity::Second => elapsed.num_seconds(),
        Granularity::Minute => elapsed.num_minutes(),
        Granularity::Hour => elapsed.num_hours(),
        Granularity::Day => whole_days(from, to),
        Granularity::Week => whole_days(from, to) / 7,
        Granularity::Month => whole_months(from, to),
        Granularity::Year => whole_months(from, to) / 12,
        Granularity::Decade => whole_months(from, to) / 120,
        Granularity::Century => whole_months(from, to) / 1_200,
        Granularity::Millennium => whole_months(from, to) / 12_000,
    }
}

/// The end date to count calendar units up to.  A final day is only whole if
/// the end time of day has been reached, so the end date is pulled back (or
/// pushed forward when counting backwards) by a day when it hasn't.
fn effective_end_date(from: NaiveDateTime, to: NaiveDateTime) -> NaiveDate {
    let end_date = to.date();
    if end_date > from.date() && to.time() < from.time() {
        end_date.pred_opt().unwrap_or(end_date)
    } else if end_date < from.date() && to.time() > from.time() {
        end_date.succ_opt().unwrap_or(end_date)
    } else {
        end_date
    }
}

fn whole_days(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    effective_end_date(from, to)
        .signed_duration_since(from.date())
        .num_days()
}

fn whole_months(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    // Pack (month count, day of month) into one number so that the day of the
    // month only matters when the month counts are close
    let packed = |date: NaiveDate| {
        let proleptic_month = i64::from(date.year()) * 12 + i64::from(date.month0());
        proleptic_month * 32 + i64::from(date.day())
    };
    (packed(effective_end_date(from, to)) - packed(from.date())) / 32
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> Timestamp {
        Timestamp::from_date(year, month, day).unwrap()
    }

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Timestamp {
        Timestamp::from(year, month, day, hour, minute, second, 0).unwrap()
    }

    #[test]
    fn days() {
        assert_eq!(
            distance(date(2020, 1, 1), date(2020, 1, 11), Granularity::Day),
            10
        );
        assert_eq!(
            distance(date(2020, 1, 11), date(2020, 1, 1), Granularity::Day),
            -10
        );
        assert_eq!(
            distance(date(2020, 6, 1), date(2020, 6, 1), Granularity::Day),
            0
        );

        // Leap year
        assert_eq!(
            distance(date(2020, 2, 1), date(2020, 3, 1), Granularity::Day),
            29
        );
    }

    #[test]
    fn partial_days_are_truncated() {
        let start = at(2020, 1, 1, 12, 0, 0);
        assert_eq!(
            distance(start, at(2020, 1, 2, 11, 59, 59), Granularity::Day),
            0
        );
        assert_eq!(
            distance(start, at(2020, 1, 2, 12, 0, 0), Granularity::Day),
            1
        );
        assert_eq!(
            distance(start, at(2019, 12, 31, 12, 0, 1), Granularity::Day),
            0
        );
        assert_eq!(
            distance(start, at(2019, 12, 31, 12, 0, 0), Granularity::Day),
            -1
        );
    }

    #[test]
    fn weeks() {
        assert_eq!(
            distance(date(2020, 1, 1), date(2020, 1, 14), Granularity::Week),
            1
        );
        assert_eq!(
            distance(date(2020, 1, 1), date(2020, 1, 15), Granularity::Week),
            2
        );
        assert_eq!(
            distance(date(2020, 1, 15), date(2020, 1, 2), Granularity::Week),
            -1
        );
    }

    #[test]
    fn months_use_calendar_fields() {
        assert_eq!(
            distance(date(2020, 1, 31), date(2020, 2, 29), Granularity::Month),
            0
        );
        assert_eq!(
            distance(date(2020, 2, 29), date(2020, 3, 29), Granularity::Month),
            1
        );
        assert_eq!(
            distance(date(2020, 1, 15), date(2021, 1, 14), Granularity::Month),
            11
        );
        assert_eq!(
            distance(date(2021, 1, 14), date(2020, 1, 15), Granularity::Month),
            -11
        );
        assert_eq!(
            distance(
                at(2020, 1, 1, 10, 0, 0),
                at(2020, 2, 1, 9, 0, 0),
                Granularity::Month
            ),
            0
        );
    }

    #[test]
    fn years_and_coarser() {
        assert_eq!(
            distance(date(2000, 3, 1), date(2001, 2, 28), Granularity::Year),
            0
        );
        assert_eq!(
            distance(date(2000, 3, 1), date(2001, 3, 1), Granularity::Year),
            1
        );
        assert_eq!(
            distance(date(1900, 1, 1), date(2020, 1, 1), Granularity::Decade),
            12
        );
        assert_eq!(
            distance(date(1900, 1, 1), date(2020, 1, 1), Granularity::Century),
            1
        );
        assert_eq!(
            distance(date(-2000, 1, 1), date(2020, 1, 1), Granularity::Millennium),
            4
        );
        assert_eq!(
            distance(date(2020, 1, 1), date(-2000, 1, 1), Granularity::Millennium),
            -4
        );
    }

    #[test]
    fn clock_units() {
        let start = Timestamp::from(2020, 1, 1, 0, 0, 0, 0).unwrap();
        let end = Timestamp::from(2020, 1, 1, 1, 30, 15, 250).unwrap();
        assert_eq!(distance(start, end, Granularity::Hour), 1);
        assert_eq!(distance(start, end, Granularity::Minute), 90);
        assert_eq!(distance(start, end, Granularity::Second), 5_415);
        assert_eq!(distance(start, end, Granularity::Millisecond), 5_415_250);

        // Truncated towards zero in both directions
        assert_eq!(distance(end, start, Granularity::Hour), -1);
        assert_eq!(distance(end, start, Granularity::Second), -5_415);
    }

    #[test]
    fn antisymmetric() {
        let a = at(1815, 6, 18, 11, 0, 0);
        let b = at(2024, 2, 29, 6, 30, 0);
        for granularity in Granularity::ALL {
            assert_eq!(
                distance(a, b, granularity),
                -distance(b, a, granularity),
                "{granularity}"
            );
        }
    }
}
