//! Dashboard handler

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    Extension, Json,
};
use tracing::debug;

use domain_dashboard::{Dashboard, Language};

use crate::auth::{Claims, Role};
use crate::dto::dashboard::DashboardQuery;
use crate::error::ApiError;
use crate::handlers::request_metadata;
use crate::AppState;

/// Picks the language from `?lang=`, then `Accept-Language`, then the default
fn resolve_language(query: Option<&str>, headers: &HeaderMap, default: &str) -> Language {
    let requested = query
        .filter(|lang| !lang.trim().is_empty())
        .or_else(|| {
            headers
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok())
        })
        .unwrap_or(default);
    Language::negotiate(requested)
}

/// Returns the owner's dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<Dashboard>, ApiError> {
    let owner_id = claims.require(Role::Owner)?;
    let lang = resolve_language(query.lang.as_deref(), &headers, &state.config.default_lang);

    let properties = state
        .properties
        .list_owner_properties(owner_id, Some(request_metadata(&headers, owner_id)))
        .await?;
    let dashboard = state
        .engine
        .build_dashboard(&properties, lang, state.clock.now())?;

    debug!(%owner_id, lang = lang.code(), reminders = dashboard.reminders.len(), "Dashboard served");
    Ok(Json(dashboard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_query_wins_over_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en-US"));

        assert_eq!(resolve_language(Some("fr"), &headers, "en"), Language::Fr);
        assert_eq!(resolve_language(None, &headers, "fr"), Language::En);
        assert_eq!(resolve_language(Some(""), &HeaderMap::new(), "fr"), Language::Fr);
    }
}
