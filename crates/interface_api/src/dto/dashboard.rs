//! Dashboard DTOs

use serde::Deserialize;

/// Query string of the dashboard endpoint
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Requested language, e.g. `fr` or `fr-CA`
    pub lang: Option<String>,
}
