use super::*;
use crate::DICE;
use crate::FACES;
use crate::Face;
use crate::GameError;
use crate::MAX_ROLLS;
use crate::notify::*;
use colored::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Five dice, their hold flags and the per-turn roll counter.
///
/// The rack enforces the roll limit and nothing else; deciding who may
/// roll or hold is the table's job.
#[derive(Debug)]
pub struct DiceRack {
    faces: [Face; DICE],
    held: [bool; DICE],
    rolls: usize,
    status: DiceStatus,
    rng: SmallRng,
    notifier: Notifier,
}

impl Default for DiceRack {
    fn default() -> Self {
        Self::from(SmallRng::from_rng(&mut rand::rng()))
    }
}

/// Pre-rolls the faces once so observers never see blank dice.
/// The pre-roll does not count against the turn.
impl From<SmallRng> for DiceRack {
    fn from(mut rng: SmallRng) -> Self {
        let faces = std::array::from_fn(|_| rng.random_range(1..=FACES));
        Self {
            faces,
            held: [false; DICE],
            rolls: 0,
            status: DiceStatus::Ready,
            rng,
            notifier: Notifier::default(),
        }
    }
}

impl DiceRack {
    /// Deterministic rack for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }
}

impl DiceRack {
    /// Reroll every unheld die.
    pub fn roll(&mut self) -> Result<Roll, GameError> {
        if self.rolls >= MAX_ROLLS {
            return Err(GameError::OutOfRolls);
        }
        for (face, held) in self.faces.iter_mut().zip(self.held.iter()) {
            if !held {
                *face = self.rng.random_range(1..=FACES);
            }
        }
        self.rolls += 1;
        self.status = match self.rolls {
            MAX_ROLLS => DiceStatus::OutOfRolls,
            _ => DiceStatus::Rolling,
        };
        log::trace!("[dice] roll {} -> {:?}", self.rolls, self.faces);
        self.notifier.publish();
        Ok(self.current_roll())
    }

    /// Flip the hold on one die. Returns the new hold state.
    pub fn toggle_hold(&mut self, index: usize) -> Result<bool, GameError> {
        let held = self
            .held
            .get_mut(index)
            .ok_or(GameError::InvalidDie(index))?;
        *held = !*held;
        let held = *held;
        self.notifier.publish();
        Ok(held)
    }

    pub fn hold(&mut self, index: usize) -> Result<(), GameError> {
        self.set_hold(index, true)
    }

    pub fn release(&mut self, index: usize) -> Result<(), GameError> {
        self.set_hold(index, false)
    }

    /// Start a fresh turn: nothing held, no rolls used.
    pub fn reset(&mut self) {
        self.held = [false; DICE];
        self.rolls = 0;
        self.status = DiceStatus::Ready;
        self.notifier.publish();
    }

    fn set_hold(&mut self, index: usize, hold: bool) -> Result<(), GameError> {
        if self.is_held(index)? != hold {
            self.toggle_hold(index)?;
        }
        Ok(())
    }
}

impl DiceRack {
    pub fn current_roll(&self) -> Roll {
        Roll::from(self.faces)
    }
    pub fn is_held(&self, index: usize) -> Result<bool, GameError> {
        self.held
            .get(index)
            .copied()
            .ok_or(GameError::InvalidDie(index))
    }
    pub fn holds(&self) -> [bool; DICE] {
        self.held
    }
    pub fn roll_count(&self) -> usize {
        self.rolls
    }
    pub fn rolls_left(&self) -> usize {
        MAX_ROLLS - self.rolls
    }
    pub fn status(&self) -> DiceStatus {
        self.status
    }
    pub fn subscribe(&self) -> Subscription {
        self.notifier.subscribe()
    }
}

impl std::fmt::Display for DiceRack {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, (face, held)) in self.faces.iter().zip(self.held.iter()).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match held {
                true => write!(f, "{}", format!("[{}]", face).green())?,
                false => write!(f, "{}", format!(" {} ", face).white())?,
            }
        }
        write!(f, "  ({}/{})", self.rolls, MAX_ROLLS)
    }
}
