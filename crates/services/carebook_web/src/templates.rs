// --- File: crates/services/carebook_web/src/templates.rs ---
use askama::Template;
use axum::response::{Html, IntoResponse, Response};
use carebook_booking::{BookingForm, CalendarMonth, ContactField, TimeSlot, WEEKDAY_LABELS};
use carebook_catalog::{Provider, ProviderCard};
use carebook_common::{CarebookError, Context, Notification};
use chrono::NaiveDate;

#[derive(Template)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub toasts: Vec<Notification>,
    pub refresh_secs: Option<u64>,
    pub cards: Vec<ProviderCard>,
}

#[derive(Template)]
#[template(path = "booking.html")]
pub struct BookingTemplate {
    pub toasts: Vec<Notification>,
    pub refresh_secs: Option<u64>,
    pub provider: Provider,
    pub calendar: CalendarMonth,
    pub weekdays: [&'static str; 7],
    pub show_slots: bool,
    pub slots: Vec<SlotView>,
    pub fields: Vec<FieldView>,
    pub confirmation: Option<String>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub toasts: Vec<Notification>,
    pub refresh_secs: Option<u64>,
}

pub struct SlotView {
    pub value: &'static str,
    pub selected: bool,
}

pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub input_type: &'static str,
    pub required: bool,
    pub multiline: bool,
    pub missing: bool,
}

impl BookingTemplate {
    /// Builds the booking view. `refresh_secs` is set while a post-booking
    /// redirect is pending.
    pub fn new(
        form: &BookingForm,
        today: NaiveDate,
        toasts: Vec<Notification>,
        refresh_secs: Option<u64>,
        enforce_required: bool,
    ) -> Self {
        let selected_time = form.selected_time();
        let slots = TimeSlot::all()
            .map(|slot| SlotView {
                value: slot.as_str(),
                selected: selected_time == Some(slot),
            })
            .collect();

        let fields = ContactField::ALL
            .into_iter()
            .map(|field| FieldView {
                name: field.name(),
                label: field.label(),
                value: form.contact().get(field).to_string(),
                input_type: match field {
                    ContactField::Email => "email",
                    ContactField::Phone => "tel",
                    _ => "text",
                },
                required: enforce_required && field.is_required(),
                multiline: field == ContactField::Notes,
                missing: form.missing_fields().contains(&field),
            })
            .collect();

        Self {
            toasts,
            refresh_secs,
            provider: form.provider().clone(),
            calendar: CalendarMonth::build(form.visible_month(today), today, form.selected_date()),
            weekdays: WEEKDAY_LABELS,
            show_slots: form.time_slots_visible(),
            slots,
            fields,
            confirmation: form.confirmation().map(|c| c.summary()),
        }
    }
}

/// Renders an askama template into an HTML response.
pub fn render<T: Template>(template: &T) -> Result<Response, CarebookError> {
    let body = template.render().context("template rendering failed")?;
    Ok(Html(body).into_response())
}
