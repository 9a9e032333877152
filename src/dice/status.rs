/// Where the rack stands within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub enum DiceStatus {
    /// Fresh turn, nothing rolled yet.
    #[default]
    Ready,
    /// Rolled at least once with rolls remaining.
    Rolling,
    OutOfRolls,
}

impl std::fmt::Display for DiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::Rolling => write!(f, "rolling"),
            Self::OutOfRolls => write!(f, "out of rolls"),
        }
    }
}
