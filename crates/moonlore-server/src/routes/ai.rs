//! AI Routes - recommendation, team analysis, and lore chat
//!
//! The bodies are validated by hand so malformed input answers 400 with the
//! same messages the site always returned, never a framework rejection.

use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde_json::Value;

use crate::error::{bad_request, ApiError};
use crate::models::{
    LoreChatResponse, TeamAnalysisResponse, TeamRecommendationResponse,
};
use crate::AppState;

/// Recommend a team from the caller's owned identities
#[utoipa::path(
    post,
    path = "/api/ai/recommend",
    request_body = crate::models::RecommendRequest,
    responses(
        (status = 200, description = "Team recommendation", body = TeamRecommendationResponse),
        (status = 400, description = "ownedIdentities missing or not an array", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error")
    ),
    tag = "AI"
)]
pub async fn recommend(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<TeamRecommendationResponse>, ApiError> {
    let owned = body
        .get("ownedIdentities")
        .and_then(Value::as_array)
        .ok_or_else(|| bad_request("ownedIdentities array is required"))?;
    let owned: Vec<String> = owned
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();

    let scenario = body
        .get("scenario")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();

    let recommendation = state.recommender.recommend(&state.catalog, &owned, scenario);
    Ok(Json(recommendation.into()))
}

/// Analyze a hand-picked team
#[utoipa::path(
    post,
    path = "/api/ai/analyze-team",
    request_body = crate::models::AnalyzeTeamRequest,
    responses(
        (status = 200, description = "Team analysis", body = TeamAnalysisResponse),
        (status = 400, description = "team missing or not an array", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error")
    ),
    tag = "AI"
)]
pub async fn analyze_team(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<TeamAnalysisResponse>, ApiError> {
    let team = body
        .get("team")
        .and_then(Value::as_array)
        .ok_or_else(|| bad_request("team array is required"))?;
    let team: Vec<String> = team
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();

    let analysis = state.recommender.analyze(&state.catalog, &team);
    Ok(Json(analysis.into()))
}

/// Answer a lore question
#[utoipa::path(
    post,
    path = "/api/ai/lore-chat",
    request_body = crate::models::LoreChatRequest,
    responses(
        (status = 200, description = "Lore answer", body = LoreChatResponse),
        (status = 400, description = "Question is required", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error")
    ),
    tag = "AI"
)]
pub async fn lore_chat(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<LoreChatResponse>, ApiError> {
    let question = body
        .get("question")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| bad_request("Question is required"))?;

    let game = body.get("game").and_then(Value::as_str).map(str::to_string);
    let answer = state.lore.answer(&state.catalog, question);

    Ok(Json(LoreChatResponse {
        answer,
        game,
        timestamp: Utc::now(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/ai/recommend", post(recommend))
        .route("/api/ai/analyze-team", post(analyze_team))
        .route("/api/ai/lore-chat", post(lore_chat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        router().with_state(AppState::for_tests())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_recommend_requires_owned_identities() {
        let response = app()
            .oneshot(post_json("/api/ai/recommend", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "ownedIdentities array is required");
    }

    #[tokio::test]
    async fn test_recommend_rejects_non_array_owned_identities() {
        let response = app()
            .oneshot(post_json(
                "/api/ai/recommend",
                r#"{"ownedIdentities": "yi-sang-lcb"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_recommend_happy_path() {
        let response = app()
            .oneshot(post_json(
                "/api/ai/recommend",
                r#"{"ownedIdentities": ["yi-sang-blade-lineage", "faust-seven"], "scenario": "boss"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["team"].as_array().unwrap().len(), 2);
        assert!(json["score"].as_u64().unwrap() <= 100);
        assert!(json["analysis"].as_str().unwrap().contains("boss fights"));
        assert!(json.get("suggestedEGOs").is_some());
    }

    #[tokio::test]
    async fn test_lore_chat_requires_question() {
        let response = app()
            .oneshot(post_json("/api/ai/lore-chat", r#"{"question": "  "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_lore_chat_echoes_game_and_answers() {
        let response = app()
            .oneshot(post_json(
                "/api/ai/lore-chat",
                r#"{"question": "Who is Angela?", "game": "library-of-ruina"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["answer"].as_str().unwrap().contains("Angela"));
        assert_eq!(json["game"], "library-of-ruina");
        assert!(json.get("timestamp").is_some());
    }

    #[tokio::test]
    async fn test_analyze_team_counts_composition() {
        let response = app()
            .oneshot(post_json(
                "/api/ai/analyze-team",
                r#"{"team": ["yi-sang-lcb", "gregor-lcb"]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["sinCounts"]["gloom"], 2);
        assert_eq!(json["attackTypes"]["slash"], 1);
        assert_eq!(json["attackTypes"]["blunt"], 1);
    }
}
