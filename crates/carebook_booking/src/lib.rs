// --- File: crates/carebook_booking/src/lib.rs ---
pub mod calendar;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
#[cfg(test)]
mod logic_test;
pub mod redirect;

pub use calendar::{parse_month, CalendarDay, CalendarMonth, WEEKDAY_LABELS};
pub use logic::{
    format_display_date, is_date_disabled, parse_date, BookingError, BookingForm, Confirmation,
    ContactField, DateChangePolicy, PatientContactInfo, TimeSlot, TIME_SLOTS,
};
pub use redirect::RedirectTimer;
