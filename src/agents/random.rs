use super::*;
use crate::DICE;
use crate::dice::Roll;
use crate::scoring::Category;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::sync::Mutex;

/// Coin-flip holds and a random open category.
#[derive(Debug)]
pub struct RandomChoice {
    rng: Mutex<SmallRng>,
}

impl Default for RandomChoice {
    fn default() -> Self {
        Self::from(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl From<SmallRng> for RandomChoice {
    fn from(rng: SmallRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl RandomChoice {
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }
    fn flips(&self, held: &[bool; DICE]) -> [bool; DICE] {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        held.map(|held| held || rng.random_bool(0.5))
    }
    /// Redraw from the whole card until an open category comes up.
    fn draw(&self, open: &[Category]) -> Option<Category> {
        if open.is_empty() {
            return None;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        loop {
            let category = Category::all().choose(&mut *rng).copied()?;
            if open.contains(&category) {
                return Some(category);
            }
        }
    }
}

#[async_trait::async_trait]
impl Agent for RandomChoice {
    fn name(&self) -> &'static str {
        "Random"
    }
    async fn holds(&self, _: &Roll, held: &[bool; DICE]) -> [bool; DICE] {
        self.flips(held)
    }
    async fn category(&self, _: &Roll, open: &[Category]) -> Option<Category> {
        self.draw(open)
    }
}
