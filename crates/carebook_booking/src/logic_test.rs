#[cfg(test)]
mod tests {
    use crate::logic::{
        format_display_date, is_date_disabled, parse_date, BookingError, BookingForm,
        ContactField, DateChangePolicy, TimeSlot, TIME_SLOTS,
    };
    use carebook_catalog::{Catalog, Provider};
    use carebook_common::{
        CarebookError, HttpStatusCode, Notification, NotificationSink, Severity, Toaster,
    };
    use chrono::NaiveDate;
    use mockall::{mock, predicate::eq};

    mock! {
        Sink {}
        impl NotificationSink for Sink {
            fn notify(&mut self, notification: Notification);
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Friday
    fn today() -> NaiveDate {
        date(2026, 10, 16)
    }

    fn chen() -> Provider {
        Catalog::standard().find(2).unwrap().clone()
    }

    fn form() -> BookingForm {
        BookingForm::mount(Some(&chen()), DateChangePolicy::KeepTime).unwrap()
    }

    fn fill_contact(form: &mut BookingForm) {
        form.edit_contact_field(ContactField::Name, "Jane Doe");
        form.edit_contact_field(ContactField::Email, "jane@example.com");
        form.edit_contact_field(ContactField::Phone, "555-0100");
    }

    #[test]
    fn test_time_slots_are_fixed() {
        let all: Vec<&str> = TimeSlot::all().map(|s| s.as_str()).collect();
        assert_eq!(all, TIME_SLOTS.to_vec());
        assert_eq!(all.len(), 12);
        assert!(!all.contains(&"12:00"));
        assert_eq!("14:30".parse::<TimeSlot>().unwrap().to_string(), "14:30");
        assert_eq!(
            "12:00".parse::<TimeSlot>(),
            Err(BookingError::UnknownTimeSlot("12:00".to_string()))
        );
    }

    #[test]
    fn test_date_rules() {
        assert!(!is_date_disabled(today(), today()));
        assert!(is_date_disabled(date(2026, 10, 15), today()));
        assert!(is_date_disabled(date(2026, 10, 17), today())); // Saturday
        assert!(is_date_disabled(date(2026, 10, 18), today())); // Sunday
        assert!(!is_date_disabled(date(2026, 10, 19), today()));
    }

    #[test]
    fn test_display_date() {
        assert_eq!(format_display_date(date(2026, 10, 20)), "10/20/2026");
        assert_eq!(format_display_date(date(2027, 1, 5)), "1/5/2027");
        assert_eq!(parse_date("2026-10-20"), Ok(date(2026, 10, 20)));
        assert!(matches!(parse_date("20/10/2026"), Err(BookingError::InvalidDate(_))));
    }

    #[test]
    fn test_mount_requires_provider() {
        assert_eq!(
            BookingForm::mount(None, DateChangePolicy::KeepTime),
            Err(BookingError::MissingProvider)
        );

        let form = form();
        assert_eq!(form.provider().name, "Dr. Michael Chen");
        assert!(form.selected_date().is_none());
        assert!(form.selected_time().is_none());
        assert!(!form.time_slots_visible());
        assert_eq!(form.contact().name, "");
        assert!(form.confirmation().is_none());
    }

    #[test]
    fn test_pick_disabled_date_is_rejected() {
        let mut form = form();
        let before = form.clone();

        let err = form.pick_date(date(2026, 10, 17), today()).unwrap_err();

        assert_eq!(err, BookingError::DateUnavailable(date(2026, 10, 17)));
        assert_eq!(form, before);
        assert_eq!(CarebookError::from(err).status_code(), 422);
    }

    #[test]
    fn test_pick_date_reveals_slots_and_moves_calendar() {
        let mut form = form();
        form.pick_date(date(2026, 11, 2), today()).unwrap();

        assert_eq!(form.selected_date(), Some(date(2026, 11, 2)));
        assert!(form.time_slots_visible());
        assert_eq!(form.visible_month(today()), date(2026, 11, 1));
    }

    #[test]
    fn test_pick_time_notifies() {
        let mut form = form();
        form.pick_date(date(2026, 10, 20), today()).unwrap();

        let mut sink = MockSink::new();
        sink.expect_notify()
            .with(eq(Notification::new(
                "Time Selected",
                "You've selected 14:30 on 10/20/2026",
            )))
            .times(1)
            .return_const(());

        form.pick_time("14:30".parse().unwrap(), &mut sink).unwrap();
        assert_eq!(form.selected_time().map(|t| t.as_str()), Some("14:30"));
    }

    #[test]
    fn test_pick_time_without_date() {
        let mut form = form();
        let mut sink = MockSink::new();
        sink.expect_notify().never();

        let err = form.pick_time("09:00".parse().unwrap(), &mut sink).unwrap_err();
        assert_eq!(err, BookingError::DateNotSelected);
        assert!(form.selected_time().is_none());
    }

    #[test]
    fn test_time_kept_or_cleared_on_date_change() {
        let mut toaster = Toaster::new(1);

        let mut keep = form();
        keep.pick_date(date(2026, 10, 20), today()).unwrap();
        keep.pick_time("10:00".parse().unwrap(), &mut toaster).unwrap();
        keep.pick_date(date(2026, 10, 21), today()).unwrap();
        assert_eq!(keep.selected_time().map(|t| t.as_str()), Some("10:00"));

        let mut clear = BookingForm::mount(Some(&chen()), DateChangePolicy::ClearTime).unwrap();
        clear.pick_date(date(2026, 10, 20), today()).unwrap();
        clear.pick_time("10:00".parse().unwrap(), &mut toaster).unwrap();
        clear.pick_date(date(2026, 10, 20), today()).unwrap();
        assert!(clear.selected_time().is_some());
        clear.pick_date(date(2026, 10, 21), today()).unwrap();
        assert!(clear.selected_time().is_none());
    }

    #[test]
    fn test_edit_contact_field_is_idempotent() {
        let mut once = form();
        once.edit_contact_field(ContactField::Notes, "first visit");
        let mut twice = once.clone();
        twice.edit_contact_field(ContactField::Notes, "first visit");

        assert_eq!(once, twice);
        assert_eq!(once.contact().notes, "first visit");
        assert!(once.selected_date().is_none());
    }

    #[test]
    fn test_pick_time_is_idempotent() {
        let slot: TimeSlot = "10:00".parse().unwrap();
        let mut twice = form();
        twice.pick_date(date(2026, 10, 20), today()).unwrap();
        let mut once = twice.clone();

        let mut once_toaster = Toaster::new(1);
        once.pick_time(slot, &mut once_toaster).unwrap();

        let mut twice_toaster = Toaster::new(1);
        twice.pick_time(slot, &mut twice_toaster).unwrap();
        twice.pick_time(slot, &mut twice_toaster).unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.selected_time(), Some(slot));
        assert_eq!(once_toaster.drain(), twice_toaster.drain());
    }

    #[test]
    fn test_contact_field_names() {
        assert_eq!("phone".parse::<ContactField>(), Ok(ContactField::Phone));
        assert!(matches!(
            "fax".parse::<ContactField>(),
            Err(BookingError::UnknownField(_))
        ));
        assert!(!ContactField::Notes.is_required());
        assert!(ContactField::Email.is_required());
    }

    #[test]
    fn test_submit_without_slot_raises_destructive_notification() {
        let mut form = form();
        fill_contact(&mut form);
        form.pick_date(date(2026, 10, 20), today()).unwrap();

        let mut sink = MockSink::new();
        sink.expect_notify()
            .withf(|n| {
                n.severity == Severity::Destructive
                    && n.title == "Error"
                    && n.description == "Please select a date and time for your appointment"
            })
            .times(1)
            .return_const(());

        let err = form.submit(&mut sink, true).unwrap_err();
        assert_eq!(err, BookingError::SlotNotSelected);
        assert!(form.confirmation().is_none());
    }

    #[test]
    fn test_submit_missing_required_fields_is_silent() {
        let mut form = form();
        form.edit_contact_field(ContactField::Name, "Jane Doe");

        let mut sink = MockSink::new();
        sink.expect_notify().never();

        let err = form.submit(&mut sink, true).unwrap_err();
        assert_eq!(
            err,
            BookingError::MissingRequiredFields(vec![ContactField::Email, ContactField::Phone])
        );
        assert_eq!(form.missing_fields(), &[ContactField::Email, ContactField::Phone]);
        assert_eq!(err.to_string(), "Missing required fields: email, phone");

        form.edit_contact_field(ContactField::Email, "jane@example.com");
        assert_eq!(form.missing_fields(), &[ContactField::Phone]);
    }

    #[test]
    fn test_submit_without_enforcement_skips_contact_check() {
        let mut form = form();
        let mut toaster = Toaster::new(1);
        form.pick_date(date(2026, 10, 20), today()).unwrap();
        form.pick_time("09:00".parse().unwrap(), &mut toaster).unwrap();

        assert!(form.submit(&mut toaster, false).is_ok());
    }

    #[test]
    fn test_successful_submit() {
        let mut form = form();
        fill_contact(&mut form);
        form.pick_date(date(2026, 10, 20), today()).unwrap();

        let mut toaster = Toaster::new(5);
        form.pick_time("14:30".parse().unwrap(), &mut toaster).unwrap();
        toaster.drain();

        let confirmation = form.submit(&mut toaster, true).unwrap();

        assert_eq!(confirmation.provider.id, 2);
        assert_eq!(confirmation.contact.email, "jane@example.com");
        let notes = toaster.drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Appointment Booked!");
        assert_eq!(
            notes[0].description,
            "Your appointment with Dr. Michael Chen has been scheduled for 10/20/2026 at 14:30"
        );
        assert_eq!(form.confirmation(), Some(&confirmation));
    }
}
