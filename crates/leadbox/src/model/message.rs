//! Timestamp display formatting for the message list and detail pane.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

/// Formats a submission instant relative to the current local day,
/// chat-client style: "Today, 14:03", "Yesterday, 09:21", or
/// "29 Aug 2026, 14:03".
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    let local = timestamp.with_timezone(&Local);
    relative_label(local.naive_local(), Local::now().date_naive())
}

/// Pure core of [`format_timestamp`], taking "today" explicitly.
#[must_use]
pub fn relative_label(timestamp: NaiveDateTime, today: NaiveDate) -> String {
    let time = timestamp.format("%H:%M");
    let date = timestamp.date();

    if date == today {
        format!("Today, {time}")
    } else if today.pred_opt() == Some(date) {
        format!("Yesterday, {time}")
    } else {
        format!("{}, {time}", date.format("%d %b %Y"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    #[test]
    fn same_day_is_today() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(relative_label(at(today, 14, 3), today), "Today, 14:03");
    }

    #[test]
    fn previous_day_is_yesterday() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        assert_eq!(
            relative_label(at(yesterday, 9, 21), today),
            "Yesterday, 09:21"
        );
    }

    #[test]
    fn yesterday_crosses_month_boundaries() {
        let today = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        assert_eq!(
            relative_label(at(yesterday, 23, 59), today),
            "Yesterday, 23:59"
        );
    }

    #[test]
    fn older_dates_spell_out_the_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let older = NaiveDate::from_ymd_opt(2026, 8, 12).unwrap();
        assert_eq!(relative_label(at(older, 8, 0), today), "12 Aug 2026, 08:00");
    }
}
