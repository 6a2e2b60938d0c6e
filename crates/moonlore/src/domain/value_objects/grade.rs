//! Grade - the ZAYIN..ALEPH scale shared by E.G.O. grades and Abnormality
//! risk levels (the same in-game scale).

use serde::{Deserialize, Serialize};

/// Threat/power grade, ZAYIN (lowest) through ALEPH (highest)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    Zayin,
    Teth,
    He,
    Waw,
    Aleph,
}

impl Grade {
    /// Sort rank: ZAYIN = 0 (lowest) ... ALEPH = 4 (highest)
    pub fn rank(self) -> u8 {
        match self {
            Grade::Zayin => 0,
            Grade::Teth => 1,
            Grade::He => 2,
            Grade::Waw => 3,
            Grade::Aleph => 4,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::Zayin => write!(f, "ZAYIN"),
            Grade::Teth => write!(f, "TETH"),
            Grade::He => write!(f, "HE"),
            Grade::Waw => write!(f, "WAW"),
            Grade::Aleph => write!(f, "ALEPH"),
        }
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ZAYIN" => Ok(Grade::Zayin),
            "TETH" => Ok(Grade::Teth),
            "HE" => Ok(Grade::He),
            "WAW" => Ok(Grade::Waw),
            "ALEPH" => Ok(Grade::Aleph),
            _ => Err(format!("Unknown grade: {}", s)),
        }
    }
}
