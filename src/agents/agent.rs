use crate::DICE;
use crate::dice::Roll;
use crate::scoring::Category;

/// Decision-maker behind a seat.
///
/// Automated agents have their turns driven by a [`Turn`](super::Turn)
/// task: up to three rounds of roll then [`Agent::holds`], followed by one
/// [`Agent::category`]. Non-automated agents are driven from outside the
/// engine through the table's command surface.
#[async_trait::async_trait]
pub trait Agent: Send + Sync {
    /// Display name of the strategy.
    fn name(&self) -> &'static str;

    /// Whether turns are taken on a background task.
    fn automated(&self) -> bool {
        true
    }

    /// Dice to hold after seeing `roll`. Holds only ever accumulate within a
    /// turn, so returning `false` for an already held die keeps it held.
    async fn holds(&self, roll: &Roll, held: &[bool; DICE]) -> [bool; DICE];

    /// Category to commit `roll` to, chosen from the still open `open`.
    async fn category(&self, roll: &Roll, open: &[Category]) -> Option<Category>;
}
