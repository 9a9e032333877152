use super::*;
use crate::DICE;
use crate::Face;
use crate::dice::Roll;
use crate::scoring::Category;
use crate::scoring::best;

/// Holds every die showing at least `threshold`, then takes the open
/// category worth the most.
#[derive(Debug, Clone, Copy)]
pub struct HoldAboveThreshold {
    threshold: Face,
}

impl Default for HoldAboveThreshold {
    fn default() -> Self {
        Self::from(4)
    }
}

impl From<Face> for HoldAboveThreshold {
    fn from(threshold: Face) -> Self {
        Self { threshold }
    }
}

#[async_trait::async_trait]
impl Agent for HoldAboveThreshold {
    fn name(&self) -> &'static str {
        "Four and Up"
    }
    async fn holds(&self, roll: &Roll, _: &[bool; DICE]) -> [bool; DICE] {
        roll.faces().map(|face| face >= self.threshold)
    }
    async fn category(&self, roll: &Roll, open: &[Category]) -> Option<Category> {
        best(roll, open.iter().copied()).map(|(category, _)| category)
    }
}
