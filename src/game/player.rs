use crate::Points;
use crate::agents::Agent;
use crate::scorecard::ScoreCard;
use std::sync::Arc;

/// A seat at the table: fixed identity and agent, a scorecard for the
/// current game, and a score carried across games.
pub struct Player {
    name: String,
    agent: Arc<dyn Agent>,
    card: ScoreCard,
    cumulative: Points,
    first: bool,
}

impl From<(&str, Arc<dyn Agent>)> for Player {
    fn from((name, agent): (&str, Arc<dyn Agent>)) -> Self {
        Self {
            name: name.to_string(),
            agent,
            card: ScoreCard::default(),
            cumulative: 0,
            first: false,
        }
    }
}

impl Player {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn agent(&self) -> Arc<dyn Agent> {
        self.agent.clone()
    }
    pub fn strategy(&self) -> &'static str {
        self.agent.name()
    }
    pub fn is_automated(&self) -> bool {
        self.agent.automated()
    }
    pub fn card(&self) -> &ScoreCard {
        &self.card
    }
    pub fn card_mut(&mut self) -> &mut ScoreCard {
        &mut self.card
    }
    pub fn cumulative(&self) -> Points {
        self.cumulative
    }
    pub fn is_first(&self) -> bool {
        self.first
    }
}

impl Player {
    pub(crate) fn mark_first(&mut self) {
        self.first = true;
    }
    /// Fold this game's final score into the running total.
    pub fn record(&mut self) {
        self.cumulative += self.card.final_score();
    }
    /// Fresh scorecard for a new game.
    pub fn renew(&mut self) {
        self.card = ScoreCard::default();
    }
    pub fn reset_score(&mut self) {
        self.cumulative = 0;
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("agent", &self.agent.name())
            .field("score", &self.card.final_score())
            .field("cumulative", &self.cumulative)
            .field("first", &self.first)
            .finish()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.agent.name())
    }
}
