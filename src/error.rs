use crate::scoring::Category;

/// Everything the engine refuses to do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no rolls left this turn")]
    OutOfRolls,
    #[error("dice have not been rolled this turn")]
    NotRolled,
    #[error("die index {0} is outside 0..5")]
    InvalidDie(usize),
    #[error("unknown category {0:?}")]
    InvalidCategory(String),
    #[error("unknown agent {0:?}")]
    InvalidAgent(String),
    #[error("{0} has already been scored")]
    DuplicateScore(Category),
    #[error("cannot seat players while a game is in progress")]
    GameInProgress,
    #[error("no game is in progress")]
    NoGameInProgress,
    #[error("at least {0} players are needed to start a game")]
    NotEnoughPlayers(usize),
    #[error("no players are seated")]
    NoPlayers,
    #[error("the active player is automated")]
    NotYourTurn,
    #[error("an automated turn is in progress")]
    TurnInProgress,
}
