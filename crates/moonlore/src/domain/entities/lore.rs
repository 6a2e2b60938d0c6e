//! Library of Ruina lore records: characters, factions, and story events

use serde::Serialize;

use crate::domain::value_objects::{FactionTier, LocalizedText, SpoilerLevel};

#[derive(Debug, Clone, Serialize)]
pub struct LoreCharacter {
    pub id: &'static str,
    pub name: LocalizedText,
    pub title: LocalizedText,
    pub faction: &'static str,
    pub description: LocalizedText,
    pub first_appearance: &'static str,
    pub is_playable: bool,
    pub relations: Vec<&'static str>,
    /// Spoken lines, stored without surrounding quotation marks
    pub quotes: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoreFaction {
    pub id: &'static str,
    pub name: LocalizedText,
    pub tier: FactionTier,
    pub description: LocalizedText,
    pub key_members: Vec<&'static str>,
    pub philosophy: LocalizedText,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoreEvent {
    pub id: &'static str,
    pub title: LocalizedText,
    pub description: LocalizedText,
    /// Story order, 1-based
    pub order: u8,
    pub spoiler_level: SpoilerLevel,
    pub related_characters: Vec<&'static str>,
}
