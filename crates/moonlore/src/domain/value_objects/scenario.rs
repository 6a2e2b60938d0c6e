//! Scenario - what the caller is building a team for

use serde::{Deserialize, Serialize};

/// Target scenario for a team recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    #[default]
    General,
    MirrorHard,
    Boss,
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scenario::General => write!(f, "general"),
            Scenario::MirrorHard => write!(f, "mirror-hard"),
            Scenario::Boss => write!(f, "boss"),
        }
    }
}

impl std::str::FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Scenario::General),
            "mirror-hard" => Ok(Scenario::MirrorHard),
            "boss" => Ok(Scenario::Boss),
            _ => Err(format!("Unknown scenario: {}", s)),
        }
    }
}
