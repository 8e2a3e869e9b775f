//! Condition assessments
//!
//! An external vision model describes a room or a damage from its photos and
//! answers with a single `state|cleanliness|note` line. This module only
//! turns that line into typed values; producing it is someone else's job.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Physical state of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionState {
    Broken,
    NeedsRepair,
    Bad,
    Medium,
    Good,
    New,
}

/// Cleanliness of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cleanliness {
    Dirty,
    Medium,
    Clean,
}

/// Parsed model answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionAssessment {
    pub state: ConditionState,
    pub cleanliness: Cleanliness,
    /// Free text; may itself contain `|`
    pub note: String,
}

/// Errors raised while reading a model answer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConditionParseError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Unknown condition state: {0}")]
    UnknownState(String),

    #[error("Unknown cleanliness: {0}")]
    UnknownCleanliness(String),
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase().replace([' ', '-'], "_")
}

impl FromStr for ConditionState {
    type Err = ConditionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "broken" => Ok(ConditionState::Broken),
            "needs_repair" | "needsrepair" => Ok(ConditionState::NeedsRepair),
            "bad" => Ok(ConditionState::Bad),
            "medium" => Ok(ConditionState::Medium),
            "good" => Ok(ConditionState::Good),
            "new" => Ok(ConditionState::New),
            _ => Err(ConditionParseError::UnknownState(s.trim().to_string())),
        }
    }
}

impl FromStr for Cleanliness {
    type Err = ConditionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "dirty" => Ok(Cleanliness::Dirty),
            "medium" => Ok(Cleanliness::Medium),
            "clean" => Ok(Cleanliness::Clean),
            _ => Err(ConditionParseError::UnknownCleanliness(s.trim().to_string())),
        }
    }
}

impl ConditionAssessment {
    /// Parses a `state|cleanliness|note` line
    pub fn parse(line: &str) -> Result<Self, ConditionParseError> {
        line.parse()
    }
}

impl FromStr for ConditionAssessment {
    type Err = ConditionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(3, '|');

        let state = parts
            .next()
            .filter(|p| !p.trim().is_empty())
            .ok_or(ConditionParseError::MissingField("state"))?
            .parse::<ConditionState>()?;
        let cleanliness = parts
            .next()
            .filter(|p| !p.trim().is_empty())
            .ok_or(ConditionParseError::MissingField("cleanliness"))?
            .parse::<Cleanliness>()?;
        let note = parts.next().map(|n| n.trim().to_string()).unwrap_or_default();

        Ok(Self { state, cleanliness, note })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_line() {
        let assessment = ConditionAssessment::parse("needs_repair|dirty|Cracked tiles near the shower").unwrap();

        assert_eq!(assessment.state, ConditionState::NeedsRepair);
        assert_eq!(assessment.cleanliness, Cleanliness::Dirty);
        assert_eq!(assessment.note, "Cracked tiles near the shower");
    }

    #[test]
    fn test_parse_is_lenient_on_case_and_spacing() {
        let assessment = ConditionAssessment::parse("  Needs Repair | CLEAN | ").unwrap();

        assert_eq!(assessment.state, ConditionState::NeedsRepair);
        assert_eq!(assessment.cleanliness, Cleanliness::Clean);
        assert!(assessment.note.is_empty());
    }

    #[test]
    fn test_note_keeps_extra_separators() {
        let assessment = ConditionAssessment::parse("good|clean|left|right wall scuffed").unwrap();
        assert_eq!(assessment.note, "left|right wall scuffed");
    }

    #[test]
    fn test_missing_note_is_allowed() {
        let assessment = ConditionAssessment::parse("new|clean").unwrap();
        assert_eq!(assessment.state, ConditionState::New);
        assert!(assessment.note.is_empty());
    }

    #[test]
    fn test_missing_cleanliness_is_rejected() {
        assert_eq!(
            ConditionAssessment::parse("good"),
            Err(ConditionParseError::MissingField("cleanliness"))
        );
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        assert_eq!(
            ConditionAssessment::parse("shiny|clean|"),
            Err(ConditionParseError::UnknownState("shiny".to_string()))
        );
        assert_eq!(
            ConditionAssessment::parse("good|spotless|"),
            Err(ConditionParseError::UnknownCleanliness("spotless".to_string()))
        );
    }
}
