//! Damage and work classification for Abnormalities

use serde::{Deserialize, Serialize};

/// Damage type dealt by an Abnormality
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DamageType {
    Red,
    White,
    Black,
    Pale,
}

impl std::fmt::Display for DamageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DamageType::Red => write!(f, "Red"),
            DamageType::White => write!(f, "White"),
            DamageType::Black => write!(f, "Black"),
            DamageType::Pale => write!(f, "Pale"),
        }
    }
}

/// How well an Abnormality responds to a given work type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum WorkAffinity {
    Bad,
    Normal,
    Good,
    Best,
}

impl std::fmt::Display for WorkAffinity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkAffinity::Bad => write!(f, "Bad"),
            WorkAffinity::Normal => write!(f, "Normal"),
            WorkAffinity::Good => write!(f, "Good"),
            WorkAffinity::Best => write!(f, "Best"),
        }
    }
}
