//! Consecutive-period counting.

use chrono::{Duration, NaiveDate};

/// Count consecutive periods in `dates`, which must be given most recent first.
///
/// The first date anchors the run. Each following date must equal the
/// previous match minus `interval`; repeats of the date just matched are
/// skipped without counting, and anything else ends the run.
///
/// The anchor is not compared with today, so a lone completion from last
/// year still yields 1.
pub fn consecutive_periods<I>(dates: I, interval: Duration) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut dates = dates.into_iter();
    let Some(anchor) = dates.next() else {
        return 0;
    };

    let mut count = 1;
    let mut matched = anchor;
    let mut expected = anchor.checked_sub_signed(interval);

    for date in dates {
        if Some(date) == expected {
            count += 1;
            matched = date;
            expected = date.checked_sub_signed(interval);
        } else if date != matched {
            break;
        }
    }

    count
}
