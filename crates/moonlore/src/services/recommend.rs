//! Team Recommendation - rule-based team selection and scoring
//!
//! Picks the best owned identities by tier, one per sinner, and annotates the
//! result with informational synergy notes and a banded analysis text.
//! Purely deterministic given catalog and inputs; the constants are editorial
//! defaults, not game balance.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::domain::entities::{Ego, Identity};
use crate::domain::value_objects::{AttackType, Scenario, Sin, Tier};

/// Thresholds and weights for recommendation (configurable)
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    /// Maximum team members
    pub team_size: usize,
    /// Maximum suggested E.G.O. entries
    pub ego_limit: usize,
    /// Members sharing an attack type before a focus note is emitted
    pub focus_threshold: usize,
    /// Members sharing a sin affinity before a resonance note is emitted
    pub resonance_threshold: usize,
    /// S-tier members before a meta-team note is emitted
    pub meta_threshold: usize,
    /// Score bonus per synergy note
    pub synergy_bonus: u32,
    /// Score ceiling
    pub score_cap: u32,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            team_size: 5,
            ego_limit: 5,
            focus_threshold: 3,
            resonance_threshold: 3,
            meta_threshold: 3,
            synergy_bonus: 5,
            score_cap: 100,
        }
    }
}

/// A suggested team with its analysis
#[derive(Debug, Clone, Serialize)]
pub struct TeamRecommendation {
    pub team: Vec<Identity>,
    pub analysis: String,
    pub synergies: Vec<String>,
    pub suggested_egos: Vec<Ego>,
    pub score: u32,
}

/// Composition breakdown for a hand-picked team
#[derive(Debug, Clone, Serialize)]
pub struct TeamAnalysis {
    pub team: Vec<Identity>,
    pub attack_types: Vec<(AttackType, usize)>,
    pub sin_counts: Vec<(Sin, usize)>,
    pub synergies: Vec<String>,
    pub score: u32,
}

/// Rule-based team recommender
pub struct TeamRecommender {
    config: RecommendConfig,
}

impl TeamRecommender {
    pub fn new(config: Option<RecommendConfig>) -> Self {
        Self {
            config: config.unwrap_or_default(),
        }
    }

    /// Recommend a team from the caller's owned identities.
    ///
    /// An empty (or entirely unknown) owned set is a defined degenerate
    /// result, not an error: empty team, score 0, explanatory analysis.
    pub fn recommend(
        &self,
        catalog: &Catalog,
        owned_ids: &[String],
        scenario: Scenario,
    ) -> TeamRecommendation {
        let owned_set: HashSet<&str> = owned_ids.iter().map(String::as_str).collect();
        let mut owned: Vec<&Identity> = catalog
            .all_identities()
            .filter(|i| owned_set.contains(i.id))
            .collect();

        if owned.is_empty() {
            return TeamRecommendation {
                team: Vec::new(),
                analysis: "No owned identities selected. Please mark which identities you own."
                    .to_string(),
                synergies: Vec::new(),
                suggested_egos: Vec::new(),
                score: 0,
            };
        }

        // Stable sort: ties among equal tier keep catalog order
        owned.sort_by_key(|i| i.tier.rank());

        let mut team: Vec<&Identity> = Vec::with_capacity(self.config.team_size);
        let mut used_sinners: HashSet<&str> = HashSet::new();
        for identity in owned {
            if team.len() >= self.config.team_size {
                break;
            }
            if !used_sinners.insert(identity.sinner_id) {
                continue;
            }
            team.push(identity);
        }

        let synergies = self.synergies(&team);
        let suggested_egos = self.suggest_egos(catalog, &team);
        let score = self.score(&team, &synergies);
        let analysis = self.analysis(score, scenario);

        tracing::debug!(
            team_size = team.len(),
            synergies = synergies.len(),
            score,
            %scenario,
            "team recommendation computed"
        );

        TeamRecommendation {
            team: team.into_iter().cloned().collect(),
            analysis,
            synergies,
            suggested_egos,
            score,
        }
    }

    /// Break down a hand-picked team: distribution counts, synergy notes, and
    /// the same score the recommender would assign.
    ///
    /// Unknown ids are ignored; the team is capped at `team_size` members
    /// with distinct sinners, first-wins in the caller's order.
    pub fn analyze(&self, catalog: &Catalog, team_ids: &[String]) -> TeamAnalysis {
        let mut team: Vec<&Identity> = Vec::with_capacity(self.config.team_size);
        let mut used_sinners: HashSet<&str> = HashSet::new();
        for id in team_ids {
            if team.len() >= self.config.team_size {
                break;
            }
            let Some(identity) = catalog.identity(id) else {
                continue;
            };
            if !used_sinners.insert(identity.sinner_id) {
                continue;
            }
            team.push(identity);
        }

        let attack_types = AttackType::ALL
            .iter()
            .map(|&at| (at, team.iter().filter(|i| i.attack_type == at).count()))
            .collect();
        let sin_counts = Sin::ALL
            .iter()
            .map(|&sin| {
                (
                    sin,
                    team.iter().filter(|i| i.sin_affinity.contains(&sin)).count(),
                )
            })
            .collect();

        let synergies = self.synergies(&team);
        let score = self.score(&team, &synergies);

        TeamAnalysis {
            team: team.into_iter().cloned().collect(),
            attack_types,
            sin_counts,
            synergies,
            score,
        }
    }

    /// Informational synergy notes; counting only, no optimization.
    fn synergies(&self, team: &[&Identity]) -> Vec<String> {
        let mut synergies = Vec::new();

        // Dominant attack type; ties resolve to the first in scan order
        let mut dominant_attack = AttackType::Slash;
        let mut attack_count = 0usize;
        for &at in &AttackType::ALL {
            let count = team.iter().filter(|i| i.attack_type == at).count();
            if count > attack_count {
                dominant_attack = at;
                attack_count = count;
            }
        }
        if attack_count >= self.config.focus_threshold {
            synergies.push(format!(
                "Strong {} focus ({}/{})",
                dominant_attack, attack_count, self.config.team_size
            ));
        }

        // Dominant sin affinity across members
        let mut dominant_sin = Sin::Wrath;
        let mut sin_count = 0usize;
        for &sin in &Sin::ALL {
            let count = team.iter().filter(|i| i.sin_affinity.contains(&sin)).count();
            if count > sin_count {
                dominant_sin = sin;
                sin_count = count;
            }
        }
        if sin_count >= self.config.resonance_threshold {
            synergies.push(format!(
                "{} resonance ({} members)",
                dominant_sin.label(),
                sin_count
            ));
        }

        let s_tier_count = team.iter().filter(|i| i.tier == Tier::S).count();
        if s_tier_count >= self.config.meta_threshold {
            synergies.push(format!(
                "Meta team with {} S-tier identities",
                s_tier_count
            ));
        }

        synergies
    }

    fn suggest_egos(&self, catalog: &Catalog, team: &[&Identity]) -> Vec<Ego> {
        let team_sinners: HashSet<&str> = team.iter().map(|i| i.sinner_id).collect();
        let mut egos: Vec<&Ego> = catalog
            .egos()
            .iter()
            .filter(|e| team_sinners.contains(e.sinner_id))
            .collect();
        egos.sort_by_key(|e| e.tier.rank());
        egos.truncate(self.config.ego_limit);
        egos.into_iter().cloned().collect()
    }

    fn score(&self, team: &[&Identity], synergies: &[String]) -> u32 {
        let base: u32 = team.iter().map(|i| i.tier.weight()).sum();
        let bonus = synergies.len() as u32 * self.config.synergy_bonus;
        (base + bonus).min(self.config.score_cap)
    }

    fn analysis(&self, score: u32, scenario: Scenario) -> String {
        let mut analysis = if score >= 80 {
            "Excellent team composition! This team has strong synergies and high-tier identities."
        } else if score >= 60 {
            "Good team with solid fundamentals. Consider upgrading some lower-tier identities."
        } else if score >= 40 {
            "Decent team for progression. Focus on acquiring higher-tier identities."
        } else {
            "Early game team. Keep grinding for better identities!"
        }
        .to_string();

        match scenario {
            Scenario::MirrorHard => {
                analysis.push_str(
                    " For Hard Mirror Dungeon, prioritize survivability and consistent damage.",
                );
            }
            Scenario::Boss => {
                analysis.push_str(" For boss fights, consider burst damage and status effects.");
            }
            Scenario::General => {}
        }

        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_owned_is_degenerate_not_error() {
        let catalog = Catalog::new();
        let recommender = TeamRecommender::new(None);
        let rec = recommender.recommend(&catalog, &[], Scenario::General);
        assert!(rec.team.is_empty());
        assert_eq!(rec.score, 0);
        assert!(rec.synergies.is_empty());
        assert!(rec.suggested_egos.is_empty());
        assert!(rec.analysis.contains("No owned identities"));
    }

    #[test]
    fn test_unknown_ids_are_degenerate_too() {
        let catalog = Catalog::new();
        let recommender = TeamRecommender::new(None);
        let rec = recommender.recommend(&catalog, &owned(&["not-a-real-id"]), Scenario::General);
        assert!(rec.team.is_empty());
        assert_eq!(rec.score, 0);
    }

    #[test]
    fn test_team_capped_at_five_with_distinct_sinners() {
        let catalog = Catalog::new();
        let recommender = TeamRecommender::new(None);
        let all_ids: Vec<String> = catalog
            .all_identities()
            .map(|i| i.id.to_string())
            .collect();
        let rec = recommender.recommend(&catalog, &all_ids, Scenario::General);

        assert!(rec.team.len() <= 5);
        let mut sinners = HashSet::new();
        for member in &rec.team {
            assert!(sinners.insert(member.sinner_id), "duplicate sinner in team");
        }
    }

    #[test]
    fn test_higher_tier_wins_within_a_sinner() {
        let catalog = Catalog::new();
        let recommender = TeamRecommender::new(None);
        // Both a C-tier and an S-tier Yi Sang owned; the S-tier must be picked.
        let rec = recommender.recommend(
            &catalog,
            &owned(&["yi-sang-lcb", "yi-sang-blade-lineage"]),
            Scenario::General,
        );
        assert_eq!(rec.team.len(), 1);
        assert_eq!(rec.team[0].id, "yi-sang-blade-lineage");
    }

    #[test]
    fn test_score_is_bounded() {
        let catalog = Catalog::new();
        let recommender = TeamRecommender::new(None);
        let all_ids: Vec<String> = catalog
            .all_identities()
            .map(|i| i.id.to_string())
            .collect();
        let rec = recommender.recommend(&catalog, &all_ids, Scenario::General);
        assert!(rec.score <= 100);
    }

    #[test]
    fn test_meta_team_synergy_and_score_floor() {
        let catalog = Catalog::new();
        let recommender = TeamRecommender::new(None);
        // Three S-tier identities from three distinct sinners.
        let rec = recommender.recommend(
            &catalog,
            &owned(&["yi-sang-blade-lineage", "faust-seven", "don-wcrp"]),
            Scenario::General,
        );
        assert_eq!(rec.team.len(), 3);
        assert!(rec
            .synergies
            .iter()
            .any(|s| s.starts_with("Meta team with 3")));
        // 3 x 20 tier weight plus at least the meta-team bonus
        assert!(rec.score >= 65, "score was {}", rec.score);
    }

    #[test]
    fn test_suggested_egos_belong_to_team_sinners() {
        let catalog = Catalog::new();
        let recommender = TeamRecommender::new(None);
        let rec = recommender.recommend(
            &catalog,
            &owned(&["yi-sang-blade-lineage", "faust-seven"]),
            Scenario::General,
        );
        assert!(!rec.suggested_egos.is_empty());
        assert!(rec.suggested_egos.len() <= 5);
        for ego in &rec.suggested_egos {
            assert!(matches!(ego.sinner_id, "yi-sang" | "faust"));
        }
        // Sorted best tier first
        for pair in rec.suggested_egos.windows(2) {
            assert!(pair[0].tier.rank() <= pair[1].tier.rank());
        }
    }

    #[test]
    fn test_scenario_suffix() {
        let catalog = Catalog::new();
        let recommender = TeamRecommender::new(None);
        let ids = owned(&["yi-sang-lcb"]);
        let mirror = recommender.recommend(&catalog, &ids, Scenario::MirrorHard);
        assert!(mirror.analysis.contains("Hard Mirror Dungeon"));
        let boss = recommender.recommend(&catalog, &ids, Scenario::Boss);
        assert!(boss.analysis.contains("boss fights"));
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let catalog = Catalog::new();
        let recommender = TeamRecommender::new(None);
        let all_ids: Vec<String> = catalog
            .all_identities()
            .map(|i| i.id.to_string())
            .collect();
        let first = recommender.recommend(&catalog, &all_ids, Scenario::Boss);
        let second = recommender.recommend(&catalog, &all_ids, Scenario::Boss);
        let team_ids = |r: &TeamRecommendation| {
            r.team.iter().map(|i| i.id).collect::<Vec<_>>()
        };
        assert_eq!(team_ids(&first), team_ids(&second));
        assert_eq!(first.score, second.score);
        assert_eq!(first.synergies, second.synergies);
        assert_eq!(first.analysis, second.analysis);
    }

    #[test]
    fn test_analyze_respects_caller_order() {
        let catalog = Catalog::new();
        let recommender = TeamRecommender::new(None);
        // The C-tier Yi Sang comes first, so it wins the sinner slot.
        let analysis = recommender.analyze(
            &catalog,
            &owned(&["yi-sang-lcb", "yi-sang-blade-lineage", "gregor-lcb", "bogus"]),
        );
        let ids: Vec<&str> = analysis.team.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["yi-sang-lcb", "gregor-lcb"]);

        // Both members carry gloom
        let gloom = analysis
            .sin_counts
            .iter()
            .find(|(sin, _)| *sin == Sin::Gloom)
            .map(|(_, n)| *n);
        assert_eq!(gloom, Some(2));
    }
}
