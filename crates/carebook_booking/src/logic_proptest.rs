#[cfg(test)]
mod tests {
    use crate::calendar::CalendarMonth;
    use crate::logic::{is_date_disabled, BookingForm, DateChangePolicy};
    use carebook_catalog::Catalog;
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use proptest::prelude::*;

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    proptest! {
        // Weekends and past days are never bookable, every other day is
        #[test]
        fn test_disabled_iff_weekend_or_past(date_offset in 0i64..2000, today_offset in 0i64..2000) {
            let date = base() + Duration::days(date_offset);
            let today = base() + Duration::days(today_offset);
            let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);

            prop_assert_eq!(is_date_disabled(date, today), weekend || date < today);
        }

        // A rejected date leaves the form untouched
        #[test]
        fn test_pick_date_respects_rule(date_offset in 0i64..400, today_offset in 0i64..400) {
            let date = base() + Duration::days(date_offset);
            let today = base() + Duration::days(today_offset);
            let provider = Catalog::standard().find(1).unwrap().clone();
            let mut form = BookingForm::mount(Some(&provider), DateChangePolicy::KeepTime).unwrap();

            let result = form.pick_date(date, today);

            prop_assert_eq!(result.is_ok(), !is_date_disabled(date, today));
            prop_assert_eq!(form.selected_date(), result.ok().map(|_| date));
        }

        // The month grid marks the same days as the predicate
        #[test]
        fn test_calendar_matches_predicate(month_offset in 0i64..700, today_offset in 0i64..700) {
            let month = base() + Duration::days(month_offset);
            let today = base() + Duration::days(today_offset);
            let grid = CalendarMonth::build(month, today, None);

            for day in grid.days() {
                prop_assert_eq!(day.disabled, is_date_disabled(day.date, today));
                prop_assert_eq!(day.date.month(), grid.first.month());
            }
            prop_assert!(grid.weeks.iter().all(|week| week.len() == 7));
        }
    }
}
