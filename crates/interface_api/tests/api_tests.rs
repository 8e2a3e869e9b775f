//! HTTP round-trip tests for the API

use std::sync::Arc;

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use core_kernel::{FixedClock, UserId};
use domain_damage::{Damage, DamagePriority};
use domain_dashboard::Localizer;
use domain_property::Property;
use interface_api::auth::{create_token, Role};
use interface_api::config::ApiConfig;
use interface_api::store::InMemoryStore;
use interface_api::{create_router, AppState};
use test_utils::{DamageBuilder, IdFixtures, LeaseBuilder, PropertyBuilder, TemporalFixtures};

const SECRET: &str = "test-secret";

struct Fixture {
    server: TestServer,
    damage: Damage,
}

async fn fixture_with(property: Property) -> Fixture {
    fixture_with_all(vec![property]).await
}

async fn fixture_with_all(properties: Vec<Property>) -> Fixture {
    let config = ApiConfig {
        jwt_secret: SECRET.to_string(),
        ..ApiConfig::default()
    };
    let store = InMemoryStore::new();
    store.seed(properties.clone()).await;
    let localizer = Arc::new(Localizer::load().unwrap());
    let state = AppState::in_memory_with_clock(
        config,
        store,
        localizer,
        Arc::new(FixedClock(TemporalFixtures::now())),
    );

    let damage = properties
        .iter()
        .flat_map(|p| p.leases.iter())
        .next()
        .and_then(|l| l.damages.first())
        .cloned()
        .unwrap_or_else(|| DamageBuilder::new().build());

    Fixture {
        server: TestServer::new(create_router(state)).unwrap(),
        damage,
    }
}

async fn fixture() -> Fixture {
    let property = PropertyBuilder::new()
        .lease(
            LeaseBuilder::new().damage(
                DamageBuilder::new()
                    .priority(DamagePriority::High)
                    .pictures(&["img/first.jpg"])
                    .build(),
            ),
        )
        .build();
    fixture_with(property).await
}

fn bearer(user: UserId, role: Role) -> HeaderValue {
    let token = create_token(user, role, SECRET, 600).unwrap();
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

fn owner() -> HeaderValue {
    bearer(IdFixtures::owner_id(), Role::Owner)
}

fn tenant() -> HeaderValue {
    bearer(IdFixtures::tenant_id(), Role::Tenant)
}

// ============ Health Endpoint Tests ============

#[tokio::test]
async fn test_health_check() {
    let f = fixture().await;

    let response = f.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_check() {
    let f = fixture().await;

    let response = f.server.get("/health/ready").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["store"]["adapter_id"], "in_memory_store");
    assert_eq!(body["store"]["message"], "1 properties");
}

// ============ Dashboard Tests ============

#[tokio::test]
async fn test_dashboard_requires_token() {
    let f = fixture().await;

    let response = f.server.get("/api/v1/dashboard").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_dashboard_rejects_tenants() {
    let f = fixture().await;

    let response = f
        .server
        .get("/api/v1/dashboard")
        .add_header(header::AUTHORIZATION, tenant())
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_dashboard_lists_new_damage() {
    let f = fixture().await;

    let response = f
        .server
        .get("/api/v1/dashboard")
        .add_header(header::AUTHORIZATION, owner())
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["reminders"][0]["id"], "6");
    assert_eq!(body["reminders"][0]["priority"], "high");
    assert_eq!(body["properties"]["total"], 1);
    assert_eq!(body["properties"]["occupied"], 1);
    assert_eq!(body["openDamages"]["total"], 1);
    assert_eq!(body["openDamages"]["high"], 1);
    assert_eq!(body["openDamages"]["damages"][0]["tenantName"], "Jeanne Dupont");
}

#[tokio::test]
async fn test_dashboard_only_covers_own_properties() {
    let mine = PropertyBuilder::new().name("Mine").build();
    let theirs = PropertyBuilder::new()
        .owner(UserId::new_v7())
        .name("Theirs")
        .lease(LeaseBuilder::new().tenant_named("Someone Else").damage(DamageBuilder::new().build()))
        .build();
    let f = fixture_with_all(vec![mine, theirs]).await;

    let response = f
        .server
        .get("/api/v1/dashboard")
        .add_header(header::AUTHORIZATION, owner())
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["properties"]["total"], 1);
    assert_eq!(body["openDamages"]["total"], 0);
    assert_eq!(body["reminders"][0]["title"], "Mine is available");
}

#[tokio::test]
async fn test_dashboard_in_french() {
    let f = fixture_with(PropertyBuilder::new().name("Studio Nation").build()).await;

    let response = f
        .server
        .get("/api/v1/dashboard")
        .add_query_param("lang", "fr-CA")
        .add_header(header::AUTHORIZATION, owner())
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["reminders"][0]["title"], "Studio Nation est disponible");
}

#[tokio::test]
async fn test_dashboard_with_duplicate_active_leases_fails() {
    let property = PropertyBuilder::new()
        .lease(LeaseBuilder::new().tenant_named("Anna"))
        .lease(LeaseBuilder::new().tenant_named("Boris"))
        .build();
    let f = fixture_with(property).await;

    let response = f
        .server
        .get("/api/v1/dashboard")
        .add_header(header::AUTHORIZATION, owner())
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

// ============ Fix Confirmation Tests ============

#[tokio::test]
async fn test_two_party_fix_confirmation() {
    let f = fixture().await;
    let path = format!("/api/v1/damages/{}/fixed", f.damage.id);

    let response = f
        .server
        .put(&path)
        .add_header(header::AUTHORIZATION, tenant())
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "partially_fixed");
    assert_eq!(body["fixedAt"], Value::Null);

    let response = f
        .server
        .put(&path)
        .add_header(header::AUTHORIZATION, owner())
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "fixed");
    assert_eq!(body["fixedAt"], "2024-03-14T10:30:00Z");

    let response = f
        .server
        .put(&path)
        .add_header(header::AUTHORIZATION, tenant())
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "already_fixed");
}

#[tokio::test]
async fn test_repeated_confirmation_is_accepted() {
    let f = fixture().await;
    let path = format!("/api/v1/damages/{}/fixed", f.damage.id);

    for _ in 0..2 {
        let response = f
            .server
            .put(&path)
            .add_header(header::AUTHORIZATION, owner())
            .await;
        response.assert_status_ok();
    }
}

#[tokio::test]
async fn test_stranger_cannot_confirm() {
    let f = fixture().await;

    let response = f
        .server
        .put(&format!("/api/v1/damages/{}/fixed", f.damage.id))
        .add_header(header::AUTHORIZATION, bearer(UserId::new_v7(), Role::Tenant))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_damage_is_not_found() {
    let f = fixture().await;

    let response = f
        .server
        .put(&format!("/api/v1/damages/{}/fixed", core_kernel::DamageId::new_v7()))
        .add_header(header::AUTHORIZATION, owner())
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_malformed_damage_id_is_bad_request() {
    let f = fixture().await;

    let response = f
        .server
        .put("/api/v1/damages/not-an-id/fixed")
        .add_header(header::AUTHORIZATION, owner())
        .await;

    response.assert_status_bad_request();
}

// ============ Damage Update Tests ============

#[tokio::test]
async fn test_owner_marks_read_and_plans_fix() {
    let f = fixture().await;

    let response = f
        .server
        .patch(&format!("/api/v1/owner/damages/{}", f.damage.id))
        .add_header(header::AUTHORIZATION, owner())
        .json(&json!({ "read": true, "fixPlannedAt": "2024-03-16T09:00:00Z" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["read"], true);
    assert_eq!(body["fixPlannedAt"], "2024-03-16T09:00:00Z");
    assert_eq!(body["comment"], f.damage.comment);

    let dashboard: Value = f
        .server
        .get("/api/v1/dashboard")
        .add_header(header::AUTHORIZATION, owner())
        .await
        .json();
    assert_eq!(dashboard["reminders"][0]["id"], "7");
    assert_eq!(dashboard["openDamages"]["plannedThisWeek"], 1);
}

#[tokio::test]
async fn test_tenant_cannot_use_owner_route() {
    let f = fixture().await;

    let response = f
        .server
        .patch(&format!("/api/v1/owner/damages/{}", f.damage.id))
        .add_header(header::AUTHORIZATION, tenant())
        .json(&json!({ "read": true }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_tenant_appends_pictures() {
    let f = fixture().await;

    let response = f
        .server
        .patch(&format!("/api/v1/tenant/damages/{}", f.damage.id))
        .add_header(header::AUTHORIZATION, tenant())
        .json(&json!({ "priority": "urgent", "addPictures": ["img/second.jpg"] }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["priority"], "urgent");
    assert_eq!(body["pictures"], json!(["img/first.jpg", "img/second.jpg"]));
}

#[tokio::test]
async fn test_duplicate_picture_conflicts() {
    let f = fixture().await;

    let response = f
        .server
        .patch(&format!("/api/v1/tenant/damages/{}", f.damage.id))
        .add_header(header::AUTHORIZATION, tenant())
        .json(&json!({ "addPictures": ["img/first.jpg"] }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn test_empty_comment_fails_validation() {
    let f = fixture().await;

    let response = f
        .server
        .patch(&format!("/api/v1/tenant/damages/{}", f.damage.id))
        .add_header(header::AUTHORIZATION, tenant())
        .json(&json!({ "comment": "" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_updates_on_fixed_damage_are_rejected() {
    let property = PropertyBuilder::new()
        .lease(LeaseBuilder::new().damage(DamageBuilder::new().fixed().build()))
        .build();
    let f = fixture_with(property).await;

    let tenant_response = f
        .server
        .patch(&format!("/api/v1/tenant/damages/{}", f.damage.id))
        .add_header(header::AUTHORIZATION, tenant())
        .json(&json!({ "comment": "Still leaking" }))
        .await;
    let owner_response = f
        .server
        .patch(&format!("/api/v1/owner/damages/{}", f.damage.id))
        .add_header(header::AUTHORIZATION, owner())
        .json(&json!({ "read": true }))
        .await;

    for response in [tenant_response, owner_response] {
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["error"], "cannot_update_fixed_damage");
    }
}
