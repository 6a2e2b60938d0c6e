//! Sin - the seven sin affinities used for resonance counting

use serde::{Deserialize, Serialize};

/// Sin affinity tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sin {
    Wrath,
    Lust,
    Sloth,
    Gluttony,
    Gloom,
    Pride,
    Envy,
}

impl Sin {
    /// All sins in canonical declaration order; resonance ties resolve to the
    /// first match in this order.
    pub const ALL: [Sin; 7] = [
        Sin::Wrath,
        Sin::Lust,
        Sin::Sloth,
        Sin::Gluttony,
        Sin::Gloom,
        Sin::Pride,
        Sin::Envy,
    ];

    /// Capitalized English label, as shown in synergy notes
    pub fn label(self) -> &'static str {
        match self {
            Sin::Wrath => "Wrath",
            Sin::Lust => "Lust",
            Sin::Sloth => "Sloth",
            Sin::Gluttony => "Gluttony",
            Sin::Gloom => "Gloom",
            Sin::Pride => "Pride",
            Sin::Envy => "Envy",
        }
    }
}

impl std::fmt::Display for Sin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sin::Wrath => write!(f, "wrath"),
            Sin::Lust => write!(f, "lust"),
            Sin::Sloth => write!(f, "sloth"),
            Sin::Gluttony => write!(f, "gluttony"),
            Sin::Gloom => write!(f, "gloom"),
            Sin::Pride => write!(f, "pride"),
            Sin::Envy => write!(f, "envy"),
        }
    }
}

impl std::str::FromStr for Sin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wrath" => Ok(Sin::Wrath),
            "lust" => Ok(Sin::Lust),
            "sloth" => Ok(Sin::Sloth),
            "gluttony" => Ok(Sin::Gluttony),
            "gloom" => Ok(Sin::Gloom),
            "pride" => Ok(Sin::Pride),
            "envy" => Ok(Sin::Envy),
            _ => Err(format!("Unknown sin: {}", s)),
        }
    }
}
