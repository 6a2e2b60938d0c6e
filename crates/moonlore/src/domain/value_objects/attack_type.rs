//! AttackType - physical damage category of an Identity or E.G.O.

use serde::{Deserialize, Serialize};

/// Physical attack category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AttackType {
    Slash,
    Pierce,
    Blunt,
}

impl AttackType {
    /// All attack types, in the order the synergy counter scans them
    pub const ALL: [AttackType; 3] = [AttackType::Slash, AttackType::Pierce, AttackType::Blunt];
}

impl std::fmt::Display for AttackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttackType::Slash => write!(f, "slash"),
            AttackType::Pierce => write!(f, "pierce"),
            AttackType::Blunt => write!(f, "blunt"),
        }
    }
}

impl std::str::FromStr for AttackType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slash" => Ok(AttackType::Slash),
            "pierce" => Ok(AttackType::Pierce),
            "blunt" => Ok(AttackType::Blunt),
            _ => Err(format!("Unknown attack type: {}", s)),
        }
    }
}
