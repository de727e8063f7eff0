// --- File: crates/carebook_booking/src/logic.rs ---
use carebook_catalog::Provider;
use carebook_common::{parse_error, validation_error, CarebookError, Notification, NotificationSink};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

// --- Error Handling ---
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    #[error("Booking view entered without a selected provider")]
    MissingProvider,
    #[error("{0} cannot be booked")]
    DateUnavailable(NaiveDate),
    #[error("A date must be selected before a time")]
    DateNotSelected,
    #[error("{}", SLOT_REQUIRED_MESSAGE)]
    SlotNotSelected,
    #[error("Missing required fields: {}", field_list(.0))]
    MissingRequiredFields(Vec<ContactField>),
    #[error("Unknown time slot '{0}'")]
    UnknownTimeSlot(String),
    #[error("Unknown contact field '{0}'")]
    UnknownField(String),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl From<BookingError> for CarebookError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::UnknownTimeSlot(_)
            | BookingError::UnknownField(_)
            | BookingError::InvalidDate(_) => parse_error(err),
            _ => validation_error(err),
        }
    }
}

fn field_list(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

pub const SLOT_REQUIRED_MESSAGE: &str = "Please select a date and time for your appointment";

// --- Time Slots ---

/// The bookable times of day, in display order.
pub const TIME_SLOTS: [&str; 12] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30",
];

/// One entry of [`TIME_SLOTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeSlot(&'static str);

impl TimeSlot {
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        TIME_SLOTS.into_iter().map(TimeSlot)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl FromStr for TimeSlot {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        TIME_SLOTS
            .into_iter()
            .find(|slot| *slot == value)
            .map(TimeSlot)
            .ok_or_else(|| BookingError::UnknownTimeSlot(value.to_string()))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// --- Date Rules ---

/// True when `date` can not be picked: weekends and anything before `today`.
/// Only the calendar date is compared, the time of day plays no role.
pub fn is_date_disabled(date: NaiveDate, today: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun) || date < today
}

/// Date as shown to visitors (en-US, e.g. `10/20/2026`).
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(value.to_string()))
}

// --- Patient Contact ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Notes,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Notes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Notes => "notes",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone Number",
            ContactField::Notes => "Additional Notes",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, ContactField::Notes)
    }
}

impl FromStr for ContactField {
    type Err = BookingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.name() == value)
            .ok_or_else(|| BookingError::UnknownField(value.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatientContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl PatientContactInfo {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Notes => &mut self.notes,
        };
        *slot = value.into();
    }

    /// Required fields that are still empty, in form order.
    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).is_empty())
            .collect()
    }
}

// --- Booking Form ---

/// What happens to an already chosen time when another date is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateChangePolicy {
    #[default]
    KeepTime,
    ClearTime,
}

impl DateChangePolicy {
    pub fn from_clear_flag(clear_time_on_date_change: bool) -> Self {
        if clear_time_on_date_change {
            DateChangePolicy::ClearTime
        } else {
            DateChangePolicy::KeepTime
        }
    }
}

/// A simulated, accepted booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub provider: Provider,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub contact: PatientContactInfo,
}

impl Confirmation {
    pub fn summary(&self) -> String {
        format!(
            "Your appointment with {} has been scheduled for {} at {}",
            self.provider.name,
            format_display_date(self.date),
            self.time
        )
    }
}

/// State of the booking view for one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    provider: Provider,
    selected_date: Option<NaiveDate>,
    selected_time: Option<TimeSlot>,
    contact: PatientContactInfo,
    visible_month: Option<NaiveDate>,
    missing_fields: Vec<ContactField>,
    confirmation: Option<Confirmation>,
    policy: DateChangePolicy,
}

impl BookingForm {
    /// Mounts an empty form for the provider carried by navigation.
    pub fn mount(payload: Option<&Provider>, policy: DateChangePolicy) -> Result<Self, BookingError> {
        let provider = payload.ok_or(BookingError::MissingProvider)?;
        debug!(provider_id = provider.id, "booking form mounted");
        Ok(Self {
            provider: provider.clone(),
            selected_date: None,
            selected_time: None,
            contact: PatientContactInfo::default(),
            visible_month: None,
            missing_fields: Vec::new(),
            confirmation: None,
            policy,
        })
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<TimeSlot> {
        self.selected_time
    }

    pub fn contact(&self) -> &PatientContactInfo {
        &self.contact
    }

    /// Required fields the last submit attempt found empty.
    pub fn missing_fields(&self) -> &[ContactField] {
        &self.missing_fields
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    /// Time slots are offered only once a date is chosen.
    pub fn time_slots_visible(&self) -> bool {
        self.selected_date.is_some()
    }

    /// First day of the month the calendar shows.
    pub fn visible_month(&self, today: NaiveDate) -> NaiveDate {
        let anchor = self.visible_month.or(self.selected_date).unwrap_or(today);
        first_of_month(anchor)
    }

    pub fn show_month(&mut self, month: NaiveDate) {
        self.visible_month = Some(first_of_month(month));
    }

    pub fn pick_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), BookingError> {
        if is_date_disabled(date, today) {
            debug!(%date, %today, "rejected unavailable date");
            return Err(BookingError::DateUnavailable(date));
        }

        if self.policy == DateChangePolicy::ClearTime && self.selected_date != Some(date) {
            self.selected_time = None;
        }
        self.selected_date = Some(date);
        self.visible_month = Some(first_of_month(date));
        Ok(())
    }

    pub fn pick_time(
        &mut self,
        slot: TimeSlot,
        sink: &mut dyn NotificationSink,
    ) -> Result<(), BookingError> {
        let date = self.selected_date.ok_or(BookingError::DateNotSelected)?;

        self.selected_time = Some(slot);
        sink.notify(Notification::new(
            "Time Selected",
            format!("You've selected {} on {}", slot, format_display_date(date)),
        ));
        Ok(())
    }

    pub fn edit_contact_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.contact.set(field, value);
        if !self.contact.get(field).is_empty() {
            self.missing_fields.retain(|missing| *missing != field);
        }
    }

    /// Validates and "books" the appointment. Nothing leaves the process.
    ///
    /// Empty required fields block the submission silently (the view marks
    /// them). A missing date or time raises a destructive notification.
    pub fn submit(
        &mut self,
        sink: &mut dyn NotificationSink,
        enforce_required: bool,
    ) -> Result<Confirmation, BookingError> {
        if enforce_required {
            let missing = self.contact.missing_required();
            if !missing.is_empty() {
                self.missing_fields = missing.clone();
                debug!("submission blocked, missing: {}", field_list(&missing));
                return Err(BookingError::MissingRequiredFields(missing));
            }
        }
        self.missing_fields.clear();

        let (date, time) = match (self.selected_date, self.selected_time) {
            (Some(date), Some(time)) => (date, time),
            _ => {
                sink.notify(Notification::destructive("Error", SLOT_REQUIRED_MESSAGE));
                return Err(BookingError::SlotNotSelected);
            }
        };

        let confirmation = Confirmation {
            provider: self.provider.clone(),
            date,
            time,
            contact: self.contact.clone(),
        };
        sink.notify(Notification::new("Appointment Booked!", confirmation.summary()));
        info!(
            provider_id = self.provider.id,
            %date,
            time = %time,
            "appointment booked"
        );

        self.confirmation = Some(confirmation.clone());
        Ok(confirmation)
    }
}

pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
