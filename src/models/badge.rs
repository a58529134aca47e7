use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display tier derived from an eco-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EcoBadge {
    Green,
    Yellow,
    Red,
}

impl EcoBadge {
    pub fn as_str(&self) -> &'static str {
        match self {
            EcoBadge::Green => "green",
            EcoBadge::Yellow => "yellow",
            EcoBadge::Red => "red",
        }
    }
}

impl fmt::Display for EcoBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown eco badge: {0}")]
pub struct UnknownBadge(pub String);

impl FromStr for EcoBadge {
    type Err = UnknownBadge;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(EcoBadge::Green),
            "yellow" => Ok(EcoBadge::Yellow),
            "red" => Ok(EcoBadge::Red),
            other => Err(UnknownBadge(other.to_string())),
        }
    }
}
