// --- File: crates/services/carebook_web/src/session.rs ---
//! Everything one visitor's browser tab would hold: history, the mounted
//! booking form, pending notifications and a pending redirect.

use std::sync::Arc;
use std::time::Duration;

use carebook_booking::{BookingForm, DateChangePolicy, RedirectTimer};
use carebook_catalog::Provider;
use carebook_common::{Navigator, Route, Toaster};
use carebook_config::BookingConfig;
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug)]
struct PendingRedirect {
    /// History entry that was current when the redirect was scheduled.
    entry: u64,
    timer: RedirectTimer,
}

#[derive(Debug)]
pub struct Session {
    pub navigator: Navigator<Provider>,
    pub toaster: Toaster,
    booking: Option<(u64, BookingForm)>,
    pending_redirect: Option<PendingRedirect>,
}

impl Session {
    pub fn new(notification_limit: usize) -> Self {
        Self {
            navigator: Navigator::new(),
            toaster: Toaster::new(notification_limit),
            booking: None,
            pending_redirect: None,
        }
    }

    pub fn current_route(&self) -> &Route {
        &self.navigator.current().route
    }

    pub fn booking(&self) -> Option<&BookingForm> {
        self.booking.as_ref().map(|(_, form)| form)
    }

    pub fn booking_mut(&mut self) -> Option<&mut BookingForm> {
        self.booking.as_mut().map(|(_, form)| form)
    }

    /// The mounted form together with the notification sink its events use.
    pub fn booking_with_toaster(&mut self) -> Option<(&mut BookingForm, &mut Toaster)> {
        let Self { booking, toaster, .. } = self;
        booking.as_mut().map(|(_, form)| (form, toaster))
    }

    pub fn has_pending_redirect(&self) -> bool {
        self.pending_redirect
            .as_ref()
            .is_some_and(|pending| !pending.timer.is_finished())
    }

    /// Brings the session in line with the current history entry.
    ///
    /// The booking form lives exactly as long as the entry it was mounted
    /// for. A booking entry without a provider payload sends the visitor
    /// back to the catalog. With `cancel_redirect_on_leave`, leaving the
    /// entry a redirect was scheduled on cancels that redirect.
    pub fn settle(&mut self, booking: &BookingConfig) {
        let current = self.navigator.current().key;

        if booking.cancel_redirect_on_leave {
            if let Some(pending) = self.pending_redirect.take() {
                if pending.entry == current {
                    self.pending_redirect = Some(pending);
                } else {
                    info!("visitor navigated away, cancelling pending redirect");
                    pending.timer.cancel();
                }
            }
        }

        if self.booking.as_ref().is_some_and(|(entry, _)| *entry != current) {
            debug!(entry = current, "booking form discarded");
            self.booking = None;
        }

        if *self.current_route() != Route::Booking || self.booking.is_some() {
            return;
        }

        let policy = DateChangePolicy::from_clear_flag(booking.clear_time_on_date_change);
        match BookingForm::mount(self.navigator.payload(), policy) {
            Ok(form) => self.booking = Some((current, form)),
            Err(err) => {
                debug!("{}, returning to the catalog", err);
                self.navigator.navigate(Route::Catalog);
            }
        }
    }

    /// Schedules the post-booking return to the catalog. `handle` is the
    /// shared slot this session lives in.
    pub fn schedule_redirect(&mut self, handle: &Arc<Mutex<Session>>, booking: &BookingConfig) {
        let delay = Duration::from_millis(booking.redirect_delay_ms);
        let target = Arc::clone(handle);
        let settle_config = booking.clone();

        let timer = RedirectTimer::schedule(delay, async move {
            let mut session = target.lock().await;
            session.pending_redirect = None;
            if session.navigator.navigate(Route::Catalog) {
                info!("booking confirmed, returned to the catalog");
            }
            session.settle(&settle_config);
        });

        if let Some(previous) = self.pending_redirect.replace(PendingRedirect {
            entry: self.navigator.current().key,
            timer,
        }) {
            previous.timer.cancel();
        }
    }
}
