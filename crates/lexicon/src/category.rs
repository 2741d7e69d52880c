//! Canonical category sets.
//!
//! Each vocabulary is a closed enum. The wire form of a category (in YAML lexicon files, in
//! stored reports and in API responses) is its lower-case name, e.g. `"severe"`.

use crate::{LexiconError, LexiconResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Behaviour shared by every vocabulary's category enum.
pub trait Category: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Human-readable vocabulary name, used in error messages.
    const VOCABULARY: &'static str;

    /// Every category in the order the built-in lexicon declares it.
    const ALL: &'static [Self];

    /// Canonical wire name.
    fn as_str(self) -> &'static str;

    /// Parse a canonical wire name.
    fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

/// Report severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Severe,
    Moderate,
    Mild,
}

impl Category for Severity {
    const VOCABULARY: &'static str = "severity";
    const ALL: &'static [Self] = &[Severity::Severe, Severity::Moderate, Severity::Mild];

    fn as_str(self) -> &'static str {
        match self {
            Severity::Severe => "severe",
            Severity::Moderate => "moderate",
            Severity::Mild => "mild",
        }
    }
}

/// Patient outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Recovered,
    Ongoing,
    Fatal,
}

impl Category for Outcome {
    const VOCABULARY: &'static str = "outcome";
    const ALL: &'static [Self] = &[Outcome::Recovered, Outcome::Ongoing, Outcome::Fatal];

    fn as_str(self) -> &'static str {
        match self {
            Outcome::Recovered => "recovered",
            Outcome::Ongoing => "ongoing",
            Outcome::Fatal => "fatal",
        }
    }
}

/// Adverse event (symptom) category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdverseEvent {
    Nausea,
    Headache,
    Dizziness,
    Rash,
    Fever,
    Cough,
    Fatigue,
}

impl Category for AdverseEvent {
    const VOCABULARY: &'static str = "adverse event";
    const ALL: &'static [Self] = &[
        AdverseEvent::Nausea,
        AdverseEvent::Headache,
        AdverseEvent::Dizziness,
        AdverseEvent::Rash,
        AdverseEvent::Fever,
        AdverseEvent::Cough,
        AdverseEvent::Fatigue,
    ];

    fn as_str(self) -> &'static str {
        match self {
            AdverseEvent::Nausea => "nausea",
            AdverseEvent::Headache => "headache",
            AdverseEvent::Dizziness => "dizziness",
            AdverseEvent::Rash => "rash",
            AdverseEvent::Fever => "fever",
            AdverseEvent::Cough => "cough",
            AdverseEvent::Fatigue => "fatigue",
        }
    }
}

fn parse_category<C: Category>(s: &str) -> LexiconResult<C> {
    C::from_wire(s).ok_or_else(|| LexiconError::UnknownCategory {
        vocabulary: C::VOCABULARY,
        value: s.to_string(),
    })
}

impl FromStr for Severity {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_category(s)
    }
}

impl FromStr for Outcome {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_category(s)
    }
}

impl FromStr for AdverseEvent {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_category(s)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AdverseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
