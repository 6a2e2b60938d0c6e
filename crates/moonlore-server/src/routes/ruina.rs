//! Library of Ruina Routes - lore characters, factions, and events

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::error::{not_found, ApiError};
use crate::models::{CharacterView, EventView, FactionView};
use crate::routes::LocaleQuery;
use crate::AppState;

/// List all lore characters
#[utoipa::path(
    get,
    path = "/api/ruina/characters",
    params(("locale" = Option<String>, Query, description = "Content locale (en/zh)")),
    responses(
        (status = 200, description = "Lore characters", body = Vec<CharacterView>)
    ),
    tag = "Ruina"
)]
pub async fn list_characters(
    State(state): State<AppState>,
    Query(locale): Query<LocaleQuery>,
) -> Json<Vec<CharacterView>> {
    let locale = locale.resolve();
    Json(
        state
            .catalog
            .characters()
            .iter()
            .map(|c| CharacterView::from_entity(c, locale))
            .collect(),
    )
}

/// Get one lore character by id
#[utoipa::path(
    get,
    path = "/api/ruina/characters/{id}",
    params(
        ("id" = String, Path, description = "Character id"),
        ("locale" = Option<String>, Query, description = "Content locale (en/zh)")
    ),
    responses(
        (status = 200, description = "Character found", body = CharacterView),
        (status = 404, description = "Character not found", body = crate::error::ErrorBody)
    ),
    tag = "Ruina"
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(locale): Query<LocaleQuery>,
) -> Result<Json<CharacterView>, ApiError> {
    let locale = locale.resolve();
    state
        .catalog
        .character(&id)
        .map(|c| Json(CharacterView::from_entity(c, locale)))
        .ok_or_else(|| not_found("Character not found"))
}

/// List all factions
#[utoipa::path(
    get,
    path = "/api/ruina/factions",
    params(("locale" = Option<String>, Query, description = "Content locale (en/zh)")),
    responses(
        (status = 200, description = "Factions", body = Vec<FactionView>)
    ),
    tag = "Ruina"
)]
pub async fn list_factions(
    State(state): State<AppState>,
    Query(locale): Query<LocaleQuery>,
) -> Json<Vec<FactionView>> {
    let locale = locale.resolve();
    Json(
        state
            .catalog
            .factions()
            .iter()
            .map(|f| FactionView::from_entity(f, locale))
            .collect(),
    )
}

/// List story events in order
#[utoipa::path(
    get,
    path = "/api/ruina/events",
    params(("locale" = Option<String>, Query, description = "Content locale (en/zh)")),
    responses(
        (status = 200, description = "Story events", body = Vec<EventView>)
    ),
    tag = "Ruina"
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(locale): Query<LocaleQuery>,
) -> Json<Vec<EventView>> {
    let locale = locale.resolve();
    Json(
        state
            .catalog
            .events()
            .iter()
            .map(|e| EventView::from_entity(e, locale))
            .collect(),
    )
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/ruina/characters", get(list_characters))
        .route("/api/ruina/characters/:id", get(get_character))
        .route("/api/ruina/factions", get(list_factions))
        .route("/api/ruina/events", get(list_events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        router().with_state(AppState::for_tests())
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_character_locale_switch() {
        let response = app()
            .oneshot(get_req("/api/ruina/characters/angela?locale=zh"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["name"], "安吉拉");

        let response = app()
            .oneshot(get_req("/api/ruina/characters/angela"))
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["name"], "Angela");
    }

    #[tokio::test]
    async fn test_events_keep_story_order() {
        let response = app().oneshot(get_req("/api/ruina/events")).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        let orders: Vec<u64> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["order"].as_u64().unwrap())
            .collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5]);
    }
}
