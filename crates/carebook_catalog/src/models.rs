// --- File: crates/carebook_catalog/src/models.rs ---
use serde::{Deserialize, Serialize};

/// A care provider that can be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: u32,
    pub name: String,
    pub specialization: String,
    /// Free-text schedule, e.g. "Mon-Fri".
    pub availability: String,
    /// Portrait URL.
    pub image: String,
}

impl Provider {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        specialization: impl Into<String>,
        availability: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            specialization: specialization.into(),
            availability: availability.into(),
            image: image.into(),
        }
    }
}

pub const SESSION_LENGTH_LABEL: &str = "30-60 min sessions";
pub const INTAKE_LABEL: &str = "Accepting new patients";

/// What a provider card on the landing page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderCard {
    pub id: u32,
    pub name: String,
    pub specialization: String,
    pub availability_label: String,
    pub session_length_label: &'static str,
    pub intake_label: &'static str,
    pub image: String,
}

impl From<&Provider> for ProviderCard {
    fn from(provider: &Provider) -> Self {
        Self {
            id: provider.id,
            name: provider.name.clone(),
            specialization: provider.specialization.clone(),
            availability_label: format!("Available {}", provider.availability),
            session_length_label: SESSION_LENGTH_LABEL,
            intake_label: INTAKE_LABEL,
            image: provider.image.clone(),
        }
    }
}
