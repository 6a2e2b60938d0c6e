//! Classification tags for the Library of Ruina lore tables

use serde::{Deserialize, Serialize};

/// Power-structure tier of a faction in The City
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FactionTier {
    Finger,
    Claw,
    Fixer,
    Syndicate,
    Wing,
    Head,
    Other,
}

impl std::fmt::Display for FactionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactionTier::Finger => write!(f, "Finger"),
            FactionTier::Claw => write!(f, "Claw"),
            FactionTier::Fixer => write!(f, "Fixer"),
            FactionTier::Syndicate => write!(f, "Syndicate"),
            FactionTier::Wing => write!(f, "Wing"),
            FactionTier::Head => write!(f, "Head"),
            FactionTier::Other => write!(f, "Other"),
        }
    }
}

/// How far into the story an event spoils. Serialized as 1/2/3 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpoilerLevel {
    Early,
    Mid,
    Endgame,
}

impl SpoilerLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            SpoilerLevel::Early => 1,
            SpoilerLevel::Mid => 2,
            SpoilerLevel::Endgame => 3,
        }
    }
}

impl Serialize for SpoilerLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}
