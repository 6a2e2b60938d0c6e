//! Tier - editorial quality ranking for Identities and E.G.O.

use serde::{Deserialize, Serialize};

/// Editorial tier label, S (best) through D (worst)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
}

impl Tier {
    /// Sort rank: S = 0 (best) ... D = 4 (worst)
    pub fn rank(self) -> u8 {
        match self {
            Tier::S => 0,
            Tier::A => 1,
            Tier::B => 2,
            Tier::C => 3,
            Tier::D => 4,
        }
    }

    /// Score weight used by the recommendation engine
    pub fn weight(self) -> u32 {
        match self {
            Tier::S => 20,
            Tier::A => 15,
            Tier::B => 10,
            Tier::C => 5,
            Tier::D => 0,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::S => write!(f, "S"),
            Tier::A => write!(f, "A"),
            Tier::B => write!(f, "B"),
            Tier::C => write!(f, "C"),
            Tier::D => write!(f, "D"),
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "S" => Ok(Tier::S),
            "A" => Ok(Tier::A),
            "B" => Ok(Tier::B),
            "C" => Ok(Tier::C),
            "D" => Ok(Tier::D),
            _ => Err(format!("Unknown tier: {}", s)),
        }
    }
}
