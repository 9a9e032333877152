use super::*;
use crate::GameError;
use std::sync::Arc;

/// The strategies a seat can be filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum AgentKind {
    Human,
    HoldAboveThreshold,
    HoldRepeats,
    UpperSectionPreferring,
    RandomChoice,
}

impl AgentKind {
    pub const fn all() -> [Self; 5] {
        [
            Self::Human,
            Self::HoldAboveThreshold,
            Self::HoldRepeats,
            Self::UpperSectionPreferring,
            Self::RandomChoice,
        ]
    }
    pub fn agent(&self) -> Arc<dyn Agent> {
        match self {
            Self::Human => Arc::new(Human),
            Self::HoldAboveThreshold => Arc::new(HoldAboveThreshold::default()),
            Self::HoldRepeats => Arc::new(HoldRepeats::default()),
            Self::UpperSectionPreferring => Arc::new(UpperSectionPreferring::default()),
            Self::RandomChoice => Arc::new(RandomChoice::default()),
        }
    }
    /// Same as [`AgentKind::agent`] but with a reproducible random source.
    pub fn seeded(&self, seed: u64) -> Arc<dyn Agent> {
        match self {
            Self::RandomChoice => Arc::new(RandomChoice::seeded(seed)),
            other => other.agent(),
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::HoldAboveThreshold => "Four and Up",
            Self::HoldRepeats => "Of a Kinder",
            Self::UpperSectionPreferring => "Upper Section",
            Self::RandomChoice => "Random",
        }
    }
    pub fn is_automated(&self) -> bool {
        !matches!(self, Self::Human)
    }
}

/// Accepts display names, hyphenated menu labels ("Of-a-Kinder",
/// "Upper-Half") and type names, ignoring case and separators.
impl std::str::FromStr for AgentKind {
    type Err = GameError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "human" => Ok(Self::Human),
            "fourandup" | "holdabovethreshold" | "threshold" => Ok(Self::HoldAboveThreshold),
            "ofakinder" | "holdrepeats" | "repeats" => Ok(Self::HoldRepeats),
            "uppersection" | "upperhalf" | "uppersectionpreferring" | "upper" => {
                Ok(Self::UpperSectionPreferring)
            }
            "random" | "randomchoice" => Ok(Self::RandomChoice),
            _ => Err(GameError::InvalidAgent(s.to_string())),
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.name())
    }
}
