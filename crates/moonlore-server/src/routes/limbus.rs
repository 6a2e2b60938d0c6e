//! Limbus Company Routes - roster and Mirror Dungeon guide

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::{bad_request, not_found, ApiError};
use crate::models::{
    EgoView, GiftBuildView, IdentityView, MirrorDungeonView, MirrorFloorView, SinnerView,
};
use crate::AppState;

/// List all sinners with their identities
#[utoipa::path(
    get,
    path = "/api/limbus/sinners",
    responses(
        (status = 200, description = "All twelve sinners", body = Vec<SinnerView>)
    ),
    tag = "Limbus"
)]
pub async fn list_sinners(State(state): State<AppState>) -> Json<Vec<SinnerView>> {
    Json(state.catalog.sinners().iter().map(SinnerView::from).collect())
}

/// Get one sinner by id
#[utoipa::path(
    get,
    path = "/api/limbus/sinners/{id}",
    params(("id" = String, Path, description = "Sinner id")),
    responses(
        (status = 200, description = "Sinner found", body = SinnerView),
        (status = 404, description = "Sinner not found", body = crate::error::ErrorBody)
    ),
    tag = "Limbus"
)]
pub async fn get_sinner(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SinnerView>, ApiError> {
    state
        .catalog
        .sinner(&id)
        .map(|s| Json(SinnerView::from(s)))
        .ok_or_else(|| not_found("Sinner not found"))
}

#[derive(Debug, Deserialize)]
pub struct IdentityFilter {
    pub tier: Option<String>,
    pub sinner: Option<String>,
    pub affinity: Option<String>,
}

/// List identities, optionally filtered by tier, sinner, or sin affinity
#[utoipa::path(
    get,
    path = "/api/limbus/identities",
    params(
        ("tier" = Option<String>, Query, description = "Tier filter (S-D)"),
        ("sinner" = Option<String>, Query, description = "Sinner id filter"),
        ("affinity" = Option<String>, Query, description = "Sin affinity filter")
    ),
    responses(
        (status = 200, description = "Matching identities", body = Vec<IdentityView>),
        (status = 400, description = "Invalid filter value", body = crate::error::ErrorBody)
    ),
    tag = "Limbus"
)]
pub async fn list_identities(
    State(state): State<AppState>,
    Query(filter): Query<IdentityFilter>,
) -> Result<Json<Vec<IdentityView>>, ApiError> {
    let tier = filter
        .tier
        .as_deref()
        .map(|s| s.parse().map_err(bad_request))
        .transpose()?;
    let affinity = filter
        .affinity
        .as_deref()
        .map(|s| s.parse().map_err(bad_request))
        .transpose()?;

    let identities = state
        .catalog
        .all_identities()
        .filter(|i| tier.map_or(true, |t| i.tier == t))
        .filter(|i| affinity.map_or(true, |sin| i.sin_affinity.contains(&sin)))
        .filter(|i| {
            filter
                .sinner
                .as_deref()
                .map_or(true, |sinner| i.sinner_id == sinner)
        })
        .map(IdentityView::from)
        .collect();

    Ok(Json(identities))
}

#[derive(Debug, Deserialize)]
pub struct EgoFilter {
    pub sinner: Option<String>,
    pub grade: Option<String>,
    pub tier: Option<String>,
}

/// List E.G.O., optionally filtered by sinner, grade, or tier
#[utoipa::path(
    get,
    path = "/api/limbus/egos",
    params(
        ("sinner" = Option<String>, Query, description = "Sinner id filter"),
        ("grade" = Option<String>, Query, description = "Grade filter (ZAYIN-ALEPH)"),
        ("tier" = Option<String>, Query, description = "Tier filter (S-D)")
    ),
    responses(
        (status = 200, description = "Matching E.G.O.", body = Vec<EgoView>),
        (status = 400, description = "Invalid filter value", body = crate::error::ErrorBody)
    ),
    tag = "Limbus"
)]
pub async fn list_egos(
    State(state): State<AppState>,
    Query(filter): Query<EgoFilter>,
) -> Result<Json<Vec<EgoView>>, ApiError> {
    let grade = filter
        .grade
        .as_deref()
        .map(|s| s.parse().map_err(bad_request))
        .transpose()?;
    let tier = filter
        .tier
        .as_deref()
        .map(|s| s.parse().map_err(bad_request))
        .transpose()?;

    let egos = state
        .catalog
        .egos()
        .iter()
        .filter(|e| grade.map_or(true, |g| e.grade == g))
        .filter(|e| tier.map_or(true, |t| e.tier == t))
        .filter(|e| {
            filter
                .sinner
                .as_deref()
                .map_or(true, |sinner| e.sinner_id == sinner)
        })
        .map(EgoView::from)
        .collect();

    Ok(Json(egos))
}

/// Mirror Dungeon guide: floors and gift builds
#[utoipa::path(
    get,
    path = "/api/limbus/mirror-dungeon",
    responses(
        (status = 200, description = "Mirror Dungeon guide", body = MirrorDungeonView)
    ),
    tag = "Limbus"
)]
pub async fn mirror_dungeon(State(state): State<AppState>) -> Json<MirrorDungeonView> {
    Json(MirrorDungeonView {
        floors: state
            .catalog
            .mirror_floors()
            .iter()
            .map(MirrorFloorView::from)
            .collect(),
        gift_builds: state
            .catalog
            .gift_builds()
            .iter()
            .map(GiftBuildView::from)
            .collect(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/limbus/sinners", get(list_sinners))
        .route("/api/limbus/sinners/:id", get(get_sinner))
        .route("/api/limbus/identities", get(list_identities))
        .route("/api/limbus/egos", get(list_egos))
        .route("/api/limbus/mirror-dungeon", get(mirror_dungeon))
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
    async fn test_unknown_sinner_is_404() {
        let response = app()
            .oneshot(get_req("/api/limbus/sinners/nobody"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_identity_tier_filter() {
        let response = app()
            .oneshot(get_req("/api/limbus/identities?tier=S"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        let identities = json.as_array().unwrap();
        assert!(!identities.is_empty());
        assert!(identities.iter().all(|i| i["tier"] == "S"));
    }

    #[tokio::test]
    async fn test_invalid_tier_filter_is_400() {
        let response = app()
            .oneshot(get_req("/api/limbus/identities?tier=SS"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
