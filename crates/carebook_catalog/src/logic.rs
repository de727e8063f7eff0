// --- File: crates/carebook_catalog/src/logic.rs ---
use carebook_common::{not_found, CarebookError, Navigator, Notification, NotificationSink, Route};
use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::info;

use crate::models::{Provider, ProviderCard};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No care provider with id {0}")]
    UnknownProvider(u32),
}

impl From<CatalogError> for CarebookError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownProvider(_) => not_found(err),
        }
    }
}

/// The providers offered at startup, in display order.
pub static PROVIDERS: Lazy<Vec<Provider>> = Lazy::new(|| {
    vec![
        Provider::new(
            1,
            "Dr. Sarah Johnson",
            "Obstetrics",
            "Mon-Fri",
            "https://img.freepik.com/premium-photo/indian-female-doctor-indian-nurse_714173-207.jpg?w=740",
        ),
        Provider::new(
            2,
            "Dr. Michael Chen",
            "Gynecology",
            "Mon-Thu",
            "https://img.freepik.com/premium-photo/indian-doctor-portrait_714173-108.jpg?w=740",
        ),
        Provider::new(
            3,
            "Dr. Emily Martinez",
            "Maternal-Fetal Medicine",
            "Tue-Sat",
            "https://img.freepik.com/free-photo/doctor-using-tablet-computer-isolated-white-wall_231208-841.jpg?t=st=1740460475~exp=1740464075~hmac=556ea5dce1075c012882822b822316bdd890142997aef65a029590619aada339&w=1060",
        ),
    ]
});

/// An immutable, ordered list of providers.
#[derive(Debug, Clone)]
pub struct Catalog {
    providers: Vec<Provider>,
}

impl Catalog {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    /// The built-in provider list.
    pub fn standard() -> Self {
        Self::new(PROVIDERS.clone())
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    pub fn cards(&self) -> Vec<ProviderCard> {
        self.providers.iter().map(ProviderCard::from).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Selects a provider: announces the choice and moves to the booking view
/// with the provider attached to the new history entry.
pub fn select_provider<'a>(
    catalog: &'a Catalog,
    id: u32,
    navigator: &mut Navigator<Provider>,
    sink: &mut dyn NotificationSink,
) -> Result<&'a Provider, CatalogError> {
    let provider = catalog.find(id).ok_or(CatalogError::UnknownProvider(id))?;

    sink.notify(Notification::new(
        "Doctor Selected",
        format!("You've selected {}", provider.name),
    ));
    navigator.push(Route::Booking, Some(provider.clone()));
    info!(provider_id = provider.id, "provider selected");

    Ok(provider)
}
