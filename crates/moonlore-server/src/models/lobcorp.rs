//! Lobotomy Corporation views: abnormalities and sephirahs
//!
//! Abnormality prose is resolved for the requested locale.

use serde::Serialize;
use utoipa::ToSchema;

use moonlore::{Abnormality, Locale, Sephirah};

/// Work preference view
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkPreferenceView {
    pub instinct: String,
    pub insight: String,
    pub attachment: String,
    pub repression: String,
}

/// Abnormality view
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AbnormalityView {
    pub id: String,
    pub name: String,
    pub code: String,
    pub risk_level: String,
    pub description: String,
    pub portrait: String,
    pub pe_info: String,
    pub max_energy: u16,
    pub breach_condition: Option<String>,
    pub work_preference: WorkPreferenceView,
    pub special_notes: Vec<String>,
    pub damage_type: String,
    pub encode_value: u16,
}

impl AbnormalityView {
    pub fn from_entity(abnormality: &Abnormality, locale: Locale) -> Self {
        Self {
            id: abnormality.id.to_string(),
            name: abnormality.name.get(locale).to_string(),
            code: abnormality.code.to_string(),
            risk_level: abnormality.risk_level.to_string(),
            description: abnormality.description.get(locale).to_string(),
            portrait: abnormality.portrait.to_string(),
            pe_info: abnormality.pe_info.get(locale).to_string(),
            max_energy: abnormality.max_energy,
            breach_condition: abnormality.breach_condition.map(str::to_string),
            work_preference: WorkPreferenceView {
                instinct: abnormality.work_preference.instinct.to_string(),
                insight: abnormality.work_preference.insight.to_string(),
                attachment: abnormality.work_preference.attachment.to_string(),
                repression: abnormality.work_preference.repression.to_string(),
            },
            special_notes: abnormality
                .special_notes
                .iter()
                .map(|n| n.to_string())
                .collect(),
            damage_type: abnormality.damage_type.to_string(),
            encode_value: abnormality.encode_value,
        }
    }
}

/// Sephirah view
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SephirahView {
    pub id: String,
    pub name: String,
    pub department: String,
    pub role: String,
    pub description: String,
    pub portrait: String,
    pub personality: String,
    pub suppression_guide: String,
    pub quest_reward: String,
    pub connections: Vec<String>,
}

impl From<&Sephirah> for SephirahView {
    fn from(sephirah: &Sephirah) -> Self {
        Self {
            id: sephirah.id.to_string(),
            name: sephirah.name.to_string(),
            department: sephirah.department.to_string(),
            role: sephirah.role.to_string(),
            description: sephirah.description.to_string(),
            portrait: sephirah.portrait.to_string(),
            personality: sephirah.personality.to_string(),
            suppression_guide: sephirah.suppression_guide.to_string(),
            quest_reward: sephirah.quest_reward.to_string(),
            connections: sephirah.connections.iter().map(|c| c.to_string()).collect(),
        }
    }
}
