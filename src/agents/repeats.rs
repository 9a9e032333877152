use super::*;
use crate::DICE;
use crate::dice::Roll;
use crate::scoring::Category;
use crate::scoring::best;

/// Holds every die whose face shows up at least `min` times, then takes
/// the open category worth the most.
#[derive(Debug, Clone, Copy)]
pub struct HoldRepeats {
    min: usize,
}

impl Default for HoldRepeats {
    fn default() -> Self {
        Self::from(2)
    }
}

impl From<usize> for HoldRepeats {
    fn from(min: usize) -> Self {
        Self { min }
    }
}

impl HoldRepeats {
    pub(super) fn repeated(&self, roll: &Roll) -> [bool; DICE] {
        let counts = roll.counts();
        roll.faces().map(|face| counts[face as usize] >= self.min)
    }
}

#[async_trait::async_trait]
impl Agent for HoldRepeats {
    fn name(&self) -> &'static str {
        "Of a Kinder"
    }
    async fn holds(&self, roll: &Roll, _: &[bool; DICE]) -> [bool; DICE] {
        self.repeated(roll)
    }
    async fn category(&self, roll: &Roll, open: &[Category]) -> Option<Category> {
        best(roll, open.iter().copied()).map(|(category, _)| category)
    }
}
