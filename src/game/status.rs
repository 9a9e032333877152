/// Lifecycle of a table.
///
/// Only `Uninitialized`, `Initialized` and `InProgress` are ever entered by
/// the engine. The remaining labels exist so collaborators can name finer
/// phases of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
pub enum GameStatus {
    #[default]
    Uninitialized,
    Initialized,
    InProgress,
    Rolling,
    GameOver,
    Waiting,
    Scoring,
    Final,
}

impl GameStatus {
    pub fn is_reserved(&self) -> bool {
        !matches!(
            self,
            Self::Uninitialized | Self::Initialized | Self::InProgress
        )
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Initialized => write!(f, "initialized"),
            Self::InProgress => write!(f, "in progress"),
            Self::Rolling => write!(f, "rolling"),
            Self::GameOver => write!(f, "game over"),
            Self::Waiting => write!(f, "waiting"),
            Self::Scoring => write!(f, "scoring"),
            Self::Final => write!(f, "final"),
        }
    }
}
