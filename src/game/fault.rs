/// An automated turn that stopped before committing a score.
/// Published on the table's fault channel after the gate has been released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    pub player: String,
    pub message: String,
}

impl From<(&str, &anyhow::Error)> for Fault {
    fn from((player, error): (&str, &anyhow::Error)) -> Self {
        Self {
            player: player.to_string(),
            message: format!("{:#}", error),
        }
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.player, self.message)
    }
}
