// --- File: crates/services/carebook_web/src/handlers.rs ---
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use carebook_booking::{parse_date, parse_month, BookingForm, ContactField, TimeSlot};
use carebook_catalog::select_provider;
use carebook_common::{parse_error, CarebookError, Clock, Route};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::session::Session;
use crate::templates::{render, BookingTemplate, CatalogTemplate, NotFoundTemplate};

/// Everything the booking page posts. Buttons add their own `date`, `time`
/// or `month` value; the contact inputs travel with every event.
#[derive(Debug, Default, Deserialize)]
pub struct BookingFormData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub month: Option<String>,
}

impl BookingFormData {
    fn apply_contact(&self, form: &mut BookingForm) {
        let edits = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Phone, &self.phone),
            (ContactField::Notes, &self.notes),
        ];
        for (field, value) in edits {
            if let Some(value) = value {
                form.edit_contact_field(field, value.as_str());
            }
        }
    }

    fn required<'a>(value: &'a Option<String>, what: &str) -> Result<&'a str, CarebookError> {
        value
            .as_deref()
            .ok_or_else(|| parse_error(format!("missing form value '{}'", what)))
    }
}

/// Resolves the visitor's session from the cookie, creating one when needed.
async fn open_session(state: &AppState, jar: CookieJar) -> (CookieJar, Arc<Mutex<Session>>) {
    let cookie_name = state.config.session.cookie_name.clone();
    let known = jar
        .get(&cookie_name)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());
    let limit = state.config.notifications.limit;

    let (id, handle, created) = state
        .sessions
        .get_or_create(known, || Session::new(limit))
        .await;

    let jar = if created {
        jar.add(
            Cookie::build((cookie_name, id.to_string()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax),
        )
    } else {
        jar
    };
    (jar, handle)
}

fn see_current(jar: CookieJar, session: &Session) -> Response {
    (jar, Redirect::to(session.current_route().path())).into_response()
}

fn refresh_secs(state: &AppState, session: &Session) -> Option<u64> {
    session
        .has_pending_redirect()
        .then(|| state.config.booking.redirect_delay_ms.div_ceil(1000))
}

/// Shared shape of every booking event: apply the contact inputs, run the
/// event against the mounted form, answer with the current page.
async fn booking_event<F>(
    state: &AppState,
    jar: CookieJar,
    data: BookingFormData,
    event: F,
) -> Result<Response, CarebookError>
where
    F: FnOnce(&mut Session, &Arc<Mutex<Session>>, &BookingFormData) -> Result<(), CarebookError>,
{
    let (jar, handle) = open_session(state, jar).await;
    let mut session = handle.lock().await;
    session.settle(&state.config.booking);

    let mounted = match session.booking_mut() {
        Some(form) => {
            data.apply_contact(form);
            true
        }
        None => false,
    };

    if mounted {
        event(&mut *session, &handle, &data)?;
    } else {
        debug!(route = %session.current_route(), "booking event outside the booking view ignored");
    }

    Ok(see_current(jar, &session))
}

// --- Catalog ---

pub async fn catalog_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, CarebookError> {
    let (jar, handle) = open_session(&state, jar).await;
    let mut session = handle.lock().await;
    session.navigator.visit(Route::Catalog);
    session.settle(&state.config.booking);

    let page = CatalogTemplate {
        toasts: session.toaster.drain(),
        refresh_secs: None,
        cards: state.catalog.cards(),
    };
    Ok((jar, render(&page)?).into_response())
}

pub async fn select_provider_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(provider_id): Path<u32>,
) -> Result<Response, CarebookError> {
    let (jar, handle) = open_session(&state, jar).await;
    let mut session = handle.lock().await;

    {
        let Session {
            navigator, toaster, ..
        } = &mut *session;
        select_provider(&state.catalog, provider_id, navigator, toaster)?;
    }
    session.settle(&state.config.booking);

    Ok(see_current(jar, &session))
}

// --- Booking ---

pub async fn booking_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, CarebookError> {
    let (jar, handle) = open_session(&state, jar).await;
    let mut session = handle.lock().await;
    session.navigator.visit(Route::Booking);
    session.settle(&state.config.booking);

    if session.booking().is_none() {
        return Ok(see_current(jar, &session));
    }

    let refresh = refresh_secs(&state, &session);
    let toasts = session.toaster.drain();
    let page = match session.booking() {
        Some(form) => BookingTemplate::new(
            form,
            state.clock.today(),
            toasts,
            refresh,
            state.config.booking.enforce_required_fields,
        ),
        None => return Ok(see_current(jar, &session)),
    };

    Ok((jar, render(&page)?).into_response())
}

pub async fn pick_date_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(data): Form<BookingFormData>,
) -> Result<Response, CarebookError> {
    let today = state.clock.today();
    booking_event(&state, jar, data, |session, _, data| {
        let date = parse_date(BookingFormData::required(&data.date, "date")?)?;
        if let Some(form) = session.booking_mut() {
            if let Err(err) = form.pick_date(date, today) {
                debug!("date not picked: {}", err);
            }
        }
        Ok(())
    })
    .await
}

pub async fn pick_time_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(data): Form<BookingFormData>,
) -> Result<Response, CarebookError> {
    booking_event(&state, jar, data, |session, _, data| {
        let slot: TimeSlot = BookingFormData::required(&data.time, "time")?.parse()?;
        if let Some((form, toaster)) = session.booking_with_toaster() {
            if let Err(err) = form.pick_time(slot, toaster) {
                debug!("time not picked: {}", err);
            }
        }
        Ok(())
    })
    .await
}

pub async fn show_month_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(data): Form<BookingFormData>,
) -> Result<Response, CarebookError> {
    booking_event(&state, jar, data, |session, _, data| {
        let raw = BookingFormData::required(&data.month, "month")?;
        let month = parse_month(raw)
            .ok_or_else(|| parse_error(format!("Invalid month '{}', expected YYYY-MM", raw)))?;
        if let Some(form) = session.booking_mut() {
            form.show_month(month);
        }
        Ok(())
    })
    .await
}

pub async fn save_contact_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(data): Form<BookingFormData>,
) -> Result<Response, CarebookError> {
    booking_event(&state, jar, data, |_, _, _| Ok(())).await
}

pub async fn submit_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(data): Form<BookingFormData>,
) -> Result<Response, CarebookError> {
    let booking = state.config.booking.clone();
    booking_event(&state, jar, data, |session, handle, _| {
        let submitted = match session.booking_with_toaster() {
            Some((form, toaster)) => form.submit(toaster, booking.enforce_required_fields),
            None => return Ok(()),
        };
        match submitted {
            Ok(_) => session.schedule_redirect(handle, &booking),
            Err(err) => debug!("booking not submitted: {}", err),
        }
        Ok(())
    })
    .await
}

pub async fn back_handler(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, CarebookError> {
    let (jar, handle) = open_session(&state, jar).await;
    let mut session = handle.lock().await;

    if !session.navigator.back() {
        session.navigator.navigate(Route::Catalog);
    }
    session.settle(&state.config.booking);

    Ok(see_current(jar, &session))
}

// --- Misc ---

pub async fn not_found_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    method: Method,
    uri: Uri,
) -> Result<Response, CarebookError> {
    let path = uri.path().to_string();
    warn!("404 Error: User attempted to access non-existent route: {}", path);

    let (jar, handle) = open_session(&state, jar).await;
    let mut session = handle.lock().await;
    if method == Method::GET {
        session.navigator.visit(Route::NotFound(path));
        session.settle(&state.config.booking);
    }

    let page = NotFoundTemplate {
        toasts: session.toaster.drain(),
        refresh_secs: None,
    };
    Ok((StatusCode::NOT_FOUND, jar, render(&page)?).into_response())
}

pub async fn healthz() -> &'static str {
    "ok"
}
