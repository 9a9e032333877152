use super::*;
use crate::DICE;
use crate::dice::Roll;
use crate::scoring::Category;
use crate::scoring::best;

/// Chases the upper bonus: holds repeats, and scores the best open upper
/// category whenever it is worth anything. Otherwise falls back to the best
/// open category overall.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpperSectionPreferring {
    holding: HoldRepeats,
}

#[async_trait::async_trait]
impl Agent for UpperSectionPreferring {
    fn name(&self) -> &'static str {
        "Upper Section"
    }
    async fn holds(&self, roll: &Roll, _: &[bool; DICE]) -> [bool; DICE] {
        self.holding.repeated(roll)
    }
    async fn category(&self, roll: &Roll, open: &[Category]) -> Option<Category> {
        let upper = open.iter().copied().filter(Category::is_upper);
        match best(roll, upper) {
            Some((category, points)) if points > 0 => Some(category),
            _ => best(roll, open.iter().copied()).map(|(category, _)| category),
        }
    }
}
