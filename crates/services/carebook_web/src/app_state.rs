// --- File: crates/services/carebook_web/src/app_state.rs ---
use std::sync::Arc;
use std::time::Duration;

use carebook_catalog::Catalog;
use carebook_common::{Clock, SessionStore, SystemClock};
use carebook_config::AppConfig;

use tokio::task::JoinHandle;
use tracing::info;

use crate::session::Session;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<Catalog>,
    pub sessions: SessionStore<Session>,
    /// Source of "today" for the calendar rules.
    pub clock: Arc<dyn Clock>,
}

/// Builder for [`AppState`]; tests use it to swap in a fixed clock or catalog.
pub struct AppStateBuilder {
    config: Arc<AppConfig>,
    catalog: Option<Arc<Catalog>>,
    clock: Option<Arc<dyn Clock>>,
}

impl AppStateBuilder {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            catalog: None,
            clock: None,
        }
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the AppState. Without an explicit clock a UTC wall clock is used.
    pub fn build(self) -> AppState {
        AppState {
            config: self.config,
            catalog: self.catalog.unwrap_or_else(|| Arc::new(Catalog::standard())),
            sessions: SessionStore::new(),
            clock: self
                .clock
                .unwrap_or_else(|| Arc::new(SystemClock::default())),
        }
    }
}

impl AppState {
    pub fn builder(config: Arc<AppConfig>) -> AppStateBuilder {
        AppStateBuilder::new(config)
    }

    /// State for the running server: standard catalog and a wall clock in
    /// the configured time zone.
    pub fn new(config: Arc<AppConfig>) -> Result<Self, carebook_common::CarebookError> {
        let clock = SystemClock::from_zone_name(&config.booking.time_zone)?;
        Ok(Self::builder(config).with_clock(Arc::new(clock)).build())
    }

    /// Periodically drops visitor sessions idle for longer than
    /// `session.idle_timeout_secs`.
    pub fn spawn_session_sweeper(&self) -> JoinHandle<()> {
        let sessions = self.sessions.clone();
        let idle = Duration::from_secs(self.config.session.idle_timeout_secs);
        let every = Duration::from_secs(self.config.session.sweep_interval_secs.max(1));

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let purged = sessions.purge_idle(idle).await;
                if purged > 0 {
                    info!(purged, "idle visitor sessions removed");
                }
            }
        })
    }
}
