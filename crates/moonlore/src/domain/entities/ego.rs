//! Ego - an E.G.O. ability tied to a sinner and an abnormality source

use serde::Serialize;

use crate::domain::value_objects::{AttackType, Grade, Sin, Tier};

#[derive(Debug, Clone, Serialize)]
pub struct Ego {
    pub id: &'static str,
    pub name: &'static str,
    pub sinner_id: &'static str,
    pub sinner_name: &'static str,
    pub grade: Grade,
    pub attack_type: AttackType,
    /// Sin resources consumed on use
    pub sin_cost: Vec<(Sin, u8)>,
    /// The abnormality this E.G.O. manifests from
    pub abnormality: &'static str,
    pub tier: Tier,
    pub tags: Vec<&'static str>,
}
