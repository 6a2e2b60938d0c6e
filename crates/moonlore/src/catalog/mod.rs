//! Catalog Store
//!
//! The immutable in-memory roster and lore tables. Built once at process
//! start; every request reads it through a shared reference. There is no
//! persistence layer behind it - the tables are hand-authored data.

mod data;

use crate::domain::entities::{
    Abnormality, Ego, GiftBuild, Identity, LoreCharacter, LoreEvent, LoreFaction, MirrorFloor,
    Sephirah, Sinner,
};
use crate::domain::value_objects::{Grade, Sin, Tier};

/// All catalog tables for the three games
#[derive(Debug)]
pub struct Catalog {
    sinners: Vec<Sinner>,
    egos: Vec<Ego>,
    abnormalities: Vec<Abnormality>,
    sephirahs: Vec<Sephirah>,
    characters: Vec<LoreCharacter>,
    factions: Vec<LoreFaction>,
    events: Vec<LoreEvent>,
    mirror_floors: Vec<MirrorFloor>,
    gift_builds: Vec<GiftBuild>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            sinners: data::limbus::sinners(),
            egos: data::limbus::egos(),
            abnormalities: data::lobcorp::abnormalities(),
            sephirahs: data::lobcorp::sephirahs(),
            characters: data::ruina::characters(),
            factions: data::ruina::factions(),
            events: data::ruina::events(),
            mirror_floors: data::limbus::mirror_floors(),
            gift_builds: data::limbus::gift_builds(),
        }
    }

    // ---- Limbus Company ----

    pub fn sinners(&self) -> &[Sinner] {
        &self.sinners
    }

    pub fn sinner(&self, id: &str) -> Option<&Sinner> {
        self.sinners.iter().find(|s| s.id == id)
    }

    /// All identities across all sinners, in catalog insertion order
    pub fn all_identities(&self) -> impl Iterator<Item = &Identity> {
        self.sinners.iter().flat_map(|s| s.identities.iter())
    }

    pub fn identity(&self, id: &str) -> Option<&Identity> {
        self.all_identities().find(|i| i.id == id)
    }

    pub fn identities_by_sinner(&self, sinner_id: &str) -> Vec<&Identity> {
        self.sinner(sinner_id)
            .map(|s| s.identities.iter().collect())
            .unwrap_or_default()
    }

    pub fn identities_by_tier(&self, tier: Tier) -> Vec<&Identity> {
        self.all_identities().filter(|i| i.tier == tier).collect()
    }

    pub fn identities_by_affinity(&self, sin: Sin) -> Vec<&Identity> {
        self.all_identities()
            .filter(|i| i.sin_affinity.contains(&sin))
            .collect()
    }

    pub fn egos(&self) -> &[Ego] {
        &self.egos
    }

    pub fn ego(&self, id: &str) -> Option<&Ego> {
        self.egos.iter().find(|e| e.id == id)
    }

    pub fn egos_by_sinner(&self, sinner_id: &str) -> Vec<&Ego> {
        self.egos.iter().filter(|e| e.sinner_id == sinner_id).collect()
    }

    pub fn egos_by_grade(&self, grade: Grade) -> Vec<&Ego> {
        self.egos.iter().filter(|e| e.grade == grade).collect()
    }

    pub fn egos_by_tier(&self, tier: Tier) -> Vec<&Ego> {
        self.egos.iter().filter(|e| e.tier == tier).collect()
    }

    pub fn mirror_floors(&self) -> &[MirrorFloor] {
        &self.mirror_floors
    }

    pub fn gift_builds(&self) -> &[GiftBuild] {
        &self.gift_builds
    }

    // ---- Lobotomy Corporation ----

    pub fn abnormalities(&self) -> &[Abnormality] {
        &self.abnormalities
    }

    pub fn abnormality(&self, id: &str) -> Option<&Abnormality> {
        self.abnormalities.iter().find(|a| a.id == id)
    }

    pub fn abnormalities_by_risk(&self, risk: Grade) -> Vec<&Abnormality> {
        self.abnormalities
            .iter()
            .filter(|a| a.risk_level == risk)
            .collect()
    }

    /// Abnormalities sorted by risk level, highest first
    pub fn abnormalities_sorted_by_risk(&self) -> Vec<&Abnormality> {
        let mut sorted: Vec<&Abnormality> = self.abnormalities.iter().collect();
        sorted.sort_by(|a, b| b.risk_level.rank().cmp(&a.risk_level.rank()));
        sorted
    }

    pub fn sephirahs(&self) -> &[Sephirah] {
        &self.sephirahs
    }

    pub fn sephirah(&self, id: &str) -> Option<&Sephirah> {
        self.sephirahs.iter().find(|s| s.id == id)
    }

    // ---- Library of Ruina ----

    pub fn characters(&self) -> &[LoreCharacter] {
        &self.characters
    }

    pub fn character(&self, id: &str) -> Option<&LoreCharacter> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Characters whose faction slugifies to the given faction id
    pub fn characters_by_faction(&self, faction_id: &str) -> Vec<&LoreCharacter> {
        self.characters
            .iter()
            .filter(|c| c.faction.to_lowercase().replace(' ', "-") == faction_id)
            .collect()
    }

    pub fn factions(&self) -> &[LoreFaction] {
        &self.factions
    }

    pub fn faction(&self, id: &str) -> Option<&LoreFaction> {
        self.factions.iter().find(|f| f.id == id)
    }

    pub fn events(&self) -> &[LoreEvent] {
        &self.events
    }

    pub fn event(&self, id: &str) -> Option<&LoreEvent> {
        self.events.iter().find(|e| e.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_twelve_sinners_in_order() {
        let catalog = Catalog::new();
        assert_eq!(catalog.sinners().len(), 12);
        for (idx, sinner) in catalog.sinners().iter().enumerate() {
            assert_eq!(sinner.number as usize, idx + 1);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::new();

        let mut seen = HashSet::new();
        for identity in catalog.all_identities() {
            assert!(seen.insert(identity.id), "duplicate identity id {}", identity.id);
        }

        let mut seen = HashSet::new();
        for ego in catalog.egos() {
            assert!(seen.insert(ego.id), "duplicate ego id {}", ego.id);
        }

        let mut seen = HashSet::new();
        for abno in catalog.abnormalities() {
            assert!(seen.insert(abno.id), "duplicate abnormality id {}", abno.id);
        }
    }

    #[test]
    fn test_identities_and_egos_reference_existing_sinners() {
        let catalog = Catalog::new();

        for identity in catalog.all_identities() {
            assert!(
                catalog.sinner(identity.sinner_id).is_some(),
                "identity {} references unknown sinner {}",
                identity.id,
                identity.sinner_id
            );
        }

        for ego in catalog.egos() {
            assert!(
                catalog.sinner(ego.sinner_id).is_some(),
                "ego {} references unknown sinner {}",
                ego.id,
                ego.sinner_id
            );
        }
    }

    #[test]
    fn test_identity_queries() {
        let catalog = Catalog::new();

        let s_tier = catalog.identities_by_tier(Tier::S);
        assert!(!s_tier.is_empty());
        assert!(s_tier.iter().all(|i| i.tier == Tier::S));

        let gloom = catalog.identities_by_affinity(Sin::Gloom);
        assert!(gloom.iter().any(|i| i.id == "yi-sang-lcb"));

        assert!(!catalog.identities_by_sinner("yi-sang").is_empty());
        assert!(catalog.identities_by_sinner("no-such-sinner").is_empty());
    }

    #[test]
    fn test_lookups_by_id() {
        let catalog = Catalog::new();
        assert!(catalog.identity("yi-sang-lcb").is_some());
        assert_eq!(
            catalog.ego("yi-sang-sunshower").map(|e| e.grade),
            Some(Grade::Waw)
        );
        assert!(catalog.faction("the-library").is_some());
        assert!(catalog.event("library-appears").is_some());
        assert!(catalog.sephirah("malkuth").is_some());
        assert!(catalog.character("angela").is_some());
        assert!(catalog.abnormality("nothing-there").is_some());
    }

    #[test]
    fn test_ego_queries() {
        let catalog = Catalog::new();
        assert_eq!(catalog.egos_by_sinner("yi-sang").len(), 2);
        assert!(catalog
            .egos_by_grade(Grade::Waw)
            .iter()
            .all(|e| e.grade == Grade::Waw));
        assert!(catalog
            .egos_by_tier(Tier::S)
            .iter()
            .all(|e| e.tier == Tier::S));
        assert!(catalog
            .abnormalities_by_risk(Grade::Aleph)
            .iter()
            .all(|a| a.risk_level == Grade::Aleph));
    }

    #[test]
    fn test_abnormalities_sorted_by_risk_descending() {
        let catalog = Catalog::new();
        let sorted = catalog.abnormalities_sorted_by_risk();
        for pair in sorted.windows(2) {
            assert!(pair[0].risk_level.rank() >= pair[1].risk_level.rank());
        }
    }

    #[test]
    fn test_characters_by_faction_slug() {
        let catalog = Catalog::new();
        let librarians = catalog.characters_by_faction("the-library");
        assert!(librarians.iter().any(|c| c.id == "angela"));
        assert!(librarians.iter().any(|c| c.id == "roland"));
        assert!(catalog.characters_by_faction("the-fingers").is_empty());
    }

    #[test]
    fn test_events_are_ordered() {
        let catalog = Catalog::new();
        for pair in catalog.events().windows(2) {
            assert!(pair[0].order < pair[1].order);
        }
    }
}
