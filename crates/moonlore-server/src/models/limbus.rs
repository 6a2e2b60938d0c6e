//! Limbus Company views: sinners, identities, E.G.O., Mirror Dungeon guide

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use moonlore::{Ego, GiftBuild, Identity, MirrorFloor, Sinner};

/// Identity view
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdentityView {
    pub id: String,
    pub name: String,
    pub sinner_id: String,
    pub rarity: u8,
    pub affiliation: String,
    pub attack_type: String,
    pub defense_type: String,
    pub sin_affinity: Vec<String>,
    pub tier: String,
    pub tags: Vec<String>,
}

impl From<&Identity> for IdentityView {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            name: identity.name.to_string(),
            sinner_id: identity.sinner_id.to_string(),
            rarity: identity.rarity,
            affiliation: identity.affiliation.to_string(),
            attack_type: identity.attack_type.to_string(),
            defense_type: identity.defense_type.to_string(),
            sin_affinity: identity.sin_affinity.iter().map(|s| s.to_string()).collect(),
            tier: identity.tier.to_string(),
            tags: identity.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Sinner view with nested identities
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SinnerView {
    pub id: String,
    pub name: String,
    pub number: u8,
    pub quote: String,
    pub base_identity: String,
    pub identities: Vec<IdentityView>,
}

impl From<&Sinner> for SinnerView {
    fn from(sinner: &Sinner) -> Self {
        Self {
            id: sinner.id.to_string(),
            name: sinner.name.to_string(),
            number: sinner.number,
            quote: sinner.quote.to_string(),
            base_identity: sinner.base_identity.to_string(),
            identities: sinner.identities.iter().map(IdentityView::from).collect(),
        }
    }
}

/// E.G.O. view
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EgoView {
    pub id: String,
    pub name: String,
    pub sinner_id: String,
    pub sinner_name: String,
    pub grade: String,
    pub attack_type: String,
    pub sin_cost: BTreeMap<String, u8>,
    pub abnormality: String,
    pub tier: String,
    pub tags: Vec<String>,
}

impl From<&Ego> for EgoView {
    fn from(ego: &Ego) -> Self {
        Self {
            id: ego.id.to_string(),
            name: ego.name.to_string(),
            sinner_id: ego.sinner_id.to_string(),
            sinner_name: ego.sinner_name.to_string(),
            grade: ego.grade.to_string(),
            attack_type: ego.attack_type.to_string(),
            sin_cost: ego
                .sin_cost
                .iter()
                .map(|(sin, cost)| (sin.to_string(), *cost))
                .collect(),
            abnormality: ego.abnormality.to_string(),
            tier: ego.tier.to_string(),
            tags: ego.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Mirror Dungeon floor view
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MirrorFloorView {
    pub name: String,
    pub difficulty: String,
    pub tips: Vec<String>,
    pub recommended_gifts: Vec<String>,
}

impl From<&MirrorFloor> for MirrorFloorView {
    fn from(floor: &MirrorFloor) -> Self {
        Self {
            name: floor.name.to_string(),
            difficulty: floor.difficulty.to_string(),
            tips: floor.tips.iter().map(|t| t.to_string()).collect(),
            recommended_gifts: floor
                .recommended_gifts
                .iter()
                .map(|g| g.to_string())
                .collect(),
        }
    }
}

/// E.G.O. gift build view
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GiftBuildView {
    pub name: String,
    pub tier: String,
    pub description: String,
}

impl From<&GiftBuild> for GiftBuildView {
    fn from(build: &GiftBuild) -> Self {
        Self {
            name: build.name.to_string(),
            tier: build.tier.to_string(),
            description: build.description.to_string(),
        }
    }
}

/// Full Mirror Dungeon guide
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MirrorDungeonView {
    pub floors: Vec<MirrorFloorView>,
    pub gift_builds: Vec<GiftBuildView>,
}
