//! Abnormality - a contained entity from Lobotomy Corporation

use serde::Serialize;

use crate::domain::value_objects::{DamageType, Grade, LocalizedText, WorkAffinity};

/// How the abnormality responds to each of the four work types
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorkPreference {
    pub instinct: WorkAffinity,
    pub insight: WorkAffinity,
    pub attachment: WorkAffinity,
    pub repression: WorkAffinity,
}

#[derive(Debug, Clone, Serialize)]
pub struct Abnormality {
    pub id: &'static str,
    pub name: LocalizedText,
    /// Containment code, e.g. "O-03-03"
    pub code: &'static str,
    pub risk_level: Grade,
    pub description: LocalizedText,
    pub portrait: &'static str,
    pub pe_info: LocalizedText,
    pub max_energy: u16,
    pub breach_condition: Option<&'static str>,
    pub work_preference: WorkPreference,
    pub special_notes: Vec<&'static str>,
    pub damage_type: DamageType,
    pub encode_value: u16,
}
