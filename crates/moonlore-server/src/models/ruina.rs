//! Library of Ruina views: lore characters, factions, and events
//!
//! Prose fields are resolved for the requested locale.

use serde::Serialize;
use utoipa::ToSchema;

use moonlore::{Locale, LoreCharacter, LoreEvent, LoreFaction};

/// Lore character view
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CharacterView {
    pub id: String,
    pub name: String,
    pub title: String,
    pub faction: String,
    pub description: String,
    pub first_appearance: String,
    pub is_playable: bool,
    pub relations: Vec<String>,
    pub quotes: Vec<String>,
}

impl CharacterView {
    pub fn from_entity(character: &LoreCharacter, locale: Locale) -> Self {
        Self {
            id: character.id.to_string(),
            name: character.name.get(locale).to_string(),
            title: character.title.get(locale).to_string(),
            faction: character.faction.to_string(),
            description: character.description.get(locale).to_string(),
            first_appearance: character.first_appearance.to_string(),
            is_playable: character.is_playable,
            relations: character.relations.iter().map(|r| r.to_string()).collect(),
            quotes: character.quotes.iter().map(|q| q.to_string()).collect(),
        }
    }
}

/// Lore faction view
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FactionView {
    pub id: String,
    pub name: String,
    pub tier: String,
    pub description: String,
    pub key_members: Vec<String>,
    pub philosophy: String,
}

impl FactionView {
    pub fn from_entity(faction: &LoreFaction, locale: Locale) -> Self {
        Self {
            id: faction.id.to_string(),
            name: faction.name.get(locale).to_string(),
            tier: faction.tier.to_string(),
            description: faction.description.get(locale).to_string(),
            key_members: faction.key_members.iter().map(|m| m.to_string()).collect(),
            philosophy: faction.philosophy.get(locale).to_string(),
        }
    }
}

/// Lore event view
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order: u8,
    pub spoiler_level: u8,
    pub related_characters: Vec<String>,
}

impl EventView {
    pub fn from_entity(event: &LoreEvent, locale: Locale) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title.get(locale).to_string(),
            description: event.description.get(locale).to_string(),
            order: event.order,
            spoiler_level: event.spoiler_level.as_u8(),
            related_characters: event
                .related_characters
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}
