//! Lobotomy Corporation Routes - abnormalities and sephirahs

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::{bad_request, not_found, ApiError};
use crate::models::{AbnormalityView, SephirahView};
use crate::routes::LocaleQuery;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AbnormalityQuery {
    pub risk: Option<String>,
    pub locale: Option<String>,
}

/// List abnormalities, highest risk first, optionally filtered by risk level
#[utoipa::path(
    get,
    path = "/api/lobcorp/abnormalities",
    params(
        ("risk" = Option<String>, Query, description = "Risk level filter (ZAYIN-ALEPH)"),
        ("locale" = Option<String>, Query, description = "Content locale (en/zh)")
    ),
    responses(
        (status = 200, description = "Abnormalities", body = Vec<AbnormalityView>),
        (status = 400, description = "Invalid risk level", body = crate::error::ErrorBody)
    ),
    tag = "LobCorp"
)]
pub async fn list_abnormalities(
    State(state): State<AppState>,
    Query(query): Query<AbnormalityQuery>,
) -> Result<Json<Vec<AbnormalityView>>, ApiError> {
    let locale = LocaleQuery {
        locale: query.locale.clone(),
    }
    .resolve();

    let risk = query
        .risk
        .as_deref()
        .map(|s| s.parse().map_err(bad_request))
        .transpose()?;

    let abnormalities = state
        .catalog
        .abnormalities_sorted_by_risk()
        .into_iter()
        .filter(|a| risk.map_or(true, |r| a.risk_level == r))
        .map(|a| AbnormalityView::from_entity(a, locale))
        .collect();

    Ok(Json(abnormalities))
}

/// Get one abnormality by id
#[utoipa::path(
    get,
    path = "/api/lobcorp/abnormalities/{id}",
    params(
        ("id" = String, Path, description = "Abnormality id"),
        ("locale" = Option<String>, Query, description = "Content locale (en/zh)")
    ),
    responses(
        (status = 200, description = "Abnormality found", body = AbnormalityView),
        (status = 404, description = "Abnormality not found", body = crate::error::ErrorBody)
    ),
    tag = "LobCorp"
)]
pub async fn get_abnormality(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(locale): Query<LocaleQuery>,
) -> Result<Json<AbnormalityView>, ApiError> {
    let locale = locale.resolve();
    state
        .catalog
        .abnormality(&id)
        .map(|a| Json(AbnormalityView::from_entity(a, locale)))
        .ok_or_else(|| not_found("Abnormality not found"))
}

/// List all sephirahs
#[utoipa::path(
    get,
    path = "/api/lobcorp/sephirahs",
    responses(
        (status = 200, description = "All sephirahs", body = Vec<SephirahView>)
    ),
    tag = "LobCorp"
)]
pub async fn list_sephirahs(State(state): State<AppState>) -> Json<Vec<SephirahView>> {
    Json(
        state
            .catalog
            .sephirahs()
            .iter()
            .map(SephirahView::from)
            .collect(),
    )
}

/// Get one sephirah by id
#[utoipa::path(
    get,
    path = "/api/lobcorp/sephirahs/{id}",
    params(("id" = String, Path, description = "Sephirah id")),
    responses(
        (status = 200, description = "Sephirah found", body = SephirahView),
        (status = 404, description = "Sephirah not found", body = crate::error::ErrorBody)
    ),
    tag = "LobCorp"
)]
pub async fn get_sephirah(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SephirahView>, ApiError> {
    state
        .catalog
        .sephirah(&id)
        .map(|s| Json(SephirahView::from(s)))
        .ok_or_else(|| not_found("Sephirah not found"))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/lobcorp/abnormalities", get(list_abnormalities))
        .route("/api/lobcorp/abnormalities/:id", get(get_abnormality))
        .route("/api/lobcorp/sephirahs", get(list_sephirahs))
        .route("/api/lobcorp/sephirahs/:id", get(get_sephirah))
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
    async fn test_abnormalities_sorted_highest_risk_first() {
        let response = app()
            .oneshot(get_req("/api/lobcorp/abnormalities"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        let first = &json.as_array().unwrap()[0];
        assert_eq!(first["riskLevel"], "ALEPH");
    }

    #[tokio::test]
    async fn test_abnormality_chinese_locale() {
        let response = app()
            .oneshot(get_req("/api/lobcorp/abnormalities/one-sin?locale=zh"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["name"], "一罪与百善");
        // Untranslated fields stay as-is
        assert_eq!(json["code"], "O-03-03");
    }

    #[tokio::test]
    async fn test_invalid_risk_filter_is_400() {
        let response = app()
            .oneshot(get_req("/api/lobcorp/abnormalities?risk=OMEGA"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
