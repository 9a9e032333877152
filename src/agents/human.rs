use super::*;
use crate::DICE;
use crate::dice::Roll;
use crate::scoring::Category;

/// A person at the table. The engine never decides for them; they roll,
/// hold and score through the table directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct Human;

#[async_trait::async_trait]
impl Agent for Human {
    fn name(&self) -> &'static str {
        "Human"
    }
    fn automated(&self) -> bool {
        false
    }
    async fn holds(&self, _: &Roll, held: &[bool; DICE]) -> [bool; DICE] {
        *held
    }
    async fn category(&self, _: &Roll, _: &[Category]) -> Option<Category> {
        None
    }
}
