use super::*;
use crate::Points;
use crate::scorecard::ScoreEntry;

/// Read-only view of one player's card and totals, detached from the table.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Standing {
    pub name: String,
    pub strategy: String,
    pub entries: Vec<ScoreEntry>,
    pub upper_total: Points,
    pub upper_bonus: Points,
    pub lower_total: Points,
    pub yahtzee_bonus: Points,
    pub final_score: Points,
    pub cumulative: Points,
}

impl From<&Player> for Standing {
    fn from(player: &Player) -> Self {
        let card = player.card();
        Self {
            name: player.name().to_string(),
            strategy: player.strategy().to_string(),
            entries: card.entries().to_vec(),
            upper_total: card.upper_total(),
            upper_bonus: card.upper_bonus(),
            lower_total: card.lower_total(),
            yahtzee_bonus: card.yahtzee_bonus(),
            final_score: card.final_score(),
            cumulative: player.cumulative(),
        }
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<12} {:<14} {:>4} (total {})",
            self.name, self.strategy, self.final_score, self.cumulative
        )
    }
}
