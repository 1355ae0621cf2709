use crate::error::ParserError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit that symbolizer sizes are written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitOfMeasure {
    #[default]
    Pixel,
    Metre,
    Foot,
}

impl UnitOfMeasure {
    pub const ALL: [UnitOfMeasure; 3] = [Self::Pixel, Self::Metre, Self::Foot];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pixel => "pixel",
            Self::Metre => "metre",
            Self::Foot => "foot",
        }
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitOfMeasure {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParserError::Rejected(format!("Unknown unit of measure: {}", s)))
    }
}

/// Configuration a parser reads on every call.
///
/// Lives on the [`crate::ParserHandle`], so every holder of the handle sees
/// the same values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    #[serde(default)]
    pub unit_of_measure: UnitOfMeasure,
}
