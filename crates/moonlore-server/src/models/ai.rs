//! AI endpoint models: team recommendation, team analysis, lore chat

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use moonlore::{TeamAnalysis, TeamRecommendation};

use super::limbus::{EgoView, IdentityView};

/// Team recommendation request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// Identity ids the player owns
    pub owned_identities: Vec<String>,
    /// Target scenario: general, mirror-hard, or boss
    pub scenario: Option<String>,
    /// Accepted for forward compatibility; currently unused
    pub preferences: Option<TeamPreferences>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamPreferences {
    pub preferred_attack_type: Option<String>,
    pub preferred_sin: Option<String>,
}

/// Team recommendation response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecommendationResponse {
    pub team: Vec<IdentityView>,
    pub analysis: String,
    pub synergies: Vec<String>,
    #[serde(rename = "suggestedEGOs")]
    pub suggested_egos: Vec<EgoView>,
    pub score: u32,
}

impl From<TeamRecommendation> for TeamRecommendationResponse {
    fn from(rec: TeamRecommendation) -> Self {
        Self {
            team: rec.team.iter().map(IdentityView::from).collect(),
            analysis: rec.analysis,
            synergies: rec.synergies,
            suggested_egos: rec.suggested_egos.iter().map(EgoView::from).collect(),
            score: rec.score,
        }
    }
}

/// Team analysis request (hand-picked team)
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeTeamRequest {
    /// Identity ids in slot order
    pub team: Vec<String>,
}

/// Attack type distribution of a team
#[derive(Debug, Serialize, ToSchema)]
pub struct AttackTypeCounts {
    pub slash: usize,
    pub pierce: usize,
    pub blunt: usize,
}

/// Team analysis response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamAnalysisResponse {
    pub team: Vec<IdentityView>,
    pub attack_types: AttackTypeCounts,
    pub sin_counts: BTreeMap<String, usize>,
    pub synergies: Vec<String>,
    pub score: u32,
}

impl From<TeamAnalysis> for TeamAnalysisResponse {
    fn from(analysis: TeamAnalysis) -> Self {
        let mut counts = AttackTypeCounts {
            slash: 0,
            pierce: 0,
            blunt: 0,
        };
        for (attack_type, count) in &analysis.attack_types {
            match attack_type.to_string().as_str() {
                "slash" => counts.slash = *count,
                "pierce" => counts.pierce = *count,
                _ => counts.blunt = *count,
            }
        }

        Self {
            team: analysis.team.iter().map(IdentityView::from).collect(),
            attack_types: counts,
            sin_counts: analysis
                .sin_counts
                .iter()
                .map(|(sin, count)| (sin.to_string(), *count))
                .collect(),
            synergies: analysis.synergies,
            score: analysis.score,
        }
    }
}

/// Lore chat request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoreChatRequest {
    pub question: String,
    /// Echoed back verbatim
    pub game: Option<String>,
}

/// Lore chat response
#[derive(Debug, Serialize, ToSchema)]
pub struct LoreChatResponse {
    pub answer: String,
    pub game: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use moonlore::{Catalog, Scenario, TeamRecommender};

    #[test]
    fn test_recommendation_serializes_camel_case() {
        let catalog = Catalog::new();
        let recommender = TeamRecommender::new(None);
        let rec = recommender.recommend(
            &catalog,
            &["yi-sang-blade-lineage".to_string()],
            Scenario::General,
        );
        let response = TeamRecommendationResponse::from(rec);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("suggestedEGOs").is_some());
        assert!(json.get("synergies").is_some());
        let member = &json["team"][0];
        assert!(member.get("sinnerId").is_some());
        assert!(member.get("attackType").is_some());
        assert_eq!(member["tier"], "S");
    }

    #[test]
    fn test_recommend_request_parses_wire_names() {
        let body = r#"{
            "ownedIdentities": ["yi-sang-lcb"],
            "scenario": "mirror-hard",
            "preferences": { "preferredAttackType": "slash" }
        }"#;
        let request: RecommendRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.owned_identities, vec!["yi-sang-lcb"]);
        assert_eq!(request.scenario.as_deref(), Some("mirror-hard"));
        assert_eq!(
            request
                .preferences
                .unwrap()
                .preferred_attack_type
                .as_deref(),
            Some("slash")
        );
    }
}
