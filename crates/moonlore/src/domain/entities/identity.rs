//! Sinner and Identity - the playable Limbus Company roster
//!
//! Pure catalog records, defined at build time and never mutated.

use serde::Serialize;

use crate::domain::value_objects::{AttackType, Sin, Tier};

/// A playable character variant, the base selectable unit of a team
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub id: &'static str,
    pub name: &'static str,
    pub sinner_id: &'static str,
    /// Gacha rarity, 1-3
    pub rarity: u8,
    pub affiliation: &'static str,
    pub attack_type: AttackType,
    pub defense_type: AttackType,
    pub sin_affinity: Vec<Sin>,
    pub tier: Tier,
    pub tags: Vec<&'static str>,
}

/// One of the twelve playable characters; owns its Identities in release order
#[derive(Debug, Clone, Serialize)]
pub struct Sinner {
    pub id: &'static str,
    pub name: &'static str,
    pub number: u8,
    pub quote: &'static str,
    pub base_identity: &'static str,
    pub identities: Vec<Identity>,
}
