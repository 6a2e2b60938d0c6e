//! Mirror Dungeon guide data

use serde::Serialize;

use crate::domain::value_objects::Tier;

/// One floor of the Mirror Dungeon with its strategy notes
#[derive(Debug, Clone, Serialize)]
pub struct MirrorFloor {
    pub name: &'static str,
    pub difficulty: &'static str,
    pub tips: Vec<&'static str>,
    pub recommended_gifts: Vec<&'static str>,
}

/// An E.G.O. gift build archetype with its editorial tier
#[derive(Debug, Clone, Serialize)]
pub struct GiftBuild {
    pub name: &'static str,
    pub tier: Tier,
    pub description: &'static str,
}
