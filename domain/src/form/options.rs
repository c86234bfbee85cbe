//! Enumerated form options: output quality and ad resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested output quality for style variations.
///
/// The style form starts with no quality selected; validation rejects a
/// submit until one of these is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    High,
    Medium,
    Low,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::High => "high",
            Quality::Medium => "medium",
            Quality::Low => "low",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Quality::High),
            "medium" => Ok(Quality::Medium),
            "low" => Ok(Quality::Low),
            _ => Err(format!("Invalid Quality: {}", s)),
        }
    }
}

/// Canvas shape for generated ad graphics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// 1:1 (default)
    #[default]
    Square,
    Portrait,
    Landscape,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Square => "square",
            Resolution::Portrait => "portrait",
            Resolution::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "square" => Ok(Resolution::Square),
            "portrait" => Ok(Resolution::Portrait),
            "landscape" => Ok(Resolution::Landscape),
            _ => Err(format!("Invalid Resolution: {}", s)),
        }
    }
}
