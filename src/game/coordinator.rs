use super::*;
use crate::DEFAULT_THINK_MS;
use crate::GameError;
use crate::MIN_PLAYERS;
use crate::Points;
use crate::SLOWEST_THINK_MS;
use crate::notify::*;
use crate::scoring::Category;
use std::time::Duration;

/// Turn order, game lifecycle and pacing for one table.
///
/// Pure bookkeeping: dispatching turns to agents and waiting on the gate
/// happens in [`Table`].
#[derive(Debug)]
pub struct TurnCoordinator {
    rotation: Rotation,
    status: GameStatus,
    think: Duration,
    finished: bool,
    epoch: u64,
    notifier: Notifier,
}

impl Default for TurnCoordinator {
    fn default() -> Self {
        Self {
            rotation: Rotation::default(),
            status: GameStatus::Uninitialized,
            think: Duration::from_millis(DEFAULT_THINK_MS),
            finished: false,
            epoch: 0,
            notifier: Notifier::default(),
        }
    }
}

impl TurnCoordinator {
    /// Seat a player at the tail. Refused while a game is running.
    pub fn add_player(&mut self, mut player: Player) -> Result<(), GameError> {
        if self.status == GameStatus::InProgress {
            return Err(GameError::GameInProgress);
        }
        if self.rotation.is_empty() {
            player.mark_first();
        }
        log::debug!("[coordinator] seating {}", player);
        self.rotation.push(player);
        self.status = GameStatus::Initialized;
        self.notifier.publish();
        Ok(())
    }

    /// Score the active player's `category` and pass the turn on.
    pub fn take_score(&mut self, category: Category, value: Points) -> Result<(), GameError> {
        let player = self.rotation.head_mut().ok_or(GameError::NoPlayers)?;
        player.card_mut().set_score(category, value)?;
        log::debug!("[coordinator] {} scores {} in {}", player.name(), value, category);
        self.rotation.rotate();
        self.notifier.publish();
        Ok(())
    }

    /// Prepare the table for a new game: bank a finished game's scores,
    /// hand out fresh scorecards and mark the game as running.
    pub fn begin_game(&mut self) -> Result<(), GameError> {
        if self.rotation.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers(MIN_PLAYERS));
        }
        if self.finished {
            self.record_scores();
        }
        if matches!(self.status, GameStatus::InProgress | GameStatus::Initialized) {
            self.reset_scores();
        }
        self.status = GameStatus::InProgress;
        self.finished = false;
        self.epoch += 1;
        log::info!("[coordinator] game begins with {} players (epoch {})", self.rotation.len(), self.epoch);
        self.notifier.publish();
        Ok(())
    }

    /// True once every seated player's card is full.
    pub fn is_over(&self) -> bool {
        !self.rotation.is_empty() && self.rotation.iter().all(|p| p.card().is_full())
    }

    /// Leave the running state once the game is over.
    pub fn conclude(&mut self) {
        if self.status == GameStatus::InProgress {
            self.status = GameStatus::Initialized;
            self.finished = true;
            self.notifier.publish();
        }
    }

    /// Rotate the highest final score to the head and return that player.
    /// Ties go to whoever comes first from the current head.
    pub fn show_winner(&mut self) -> Option<&Player> {
        let position = self
            .rotation
            .iter()
            .map(|p| p.card().final_score())
            .enumerate()
            .fold(None, |best: Option<(usize, Points)>, (i, score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((i, score)),
            })
            .map(|(i, _)| i)?;
        self.rotation.rotate_by(position);
        self.notifier.publish();
        self.rotation.head()
    }

    /// Restore the original seating order and give everyone a fresh card.
    pub fn reset_scores(&mut self) {
        self.rotation.rotate_to(Player::is_first);
        self.rotation.iter_mut().for_each(Player::renew);
        self.notifier.publish();
    }

    /// Unseat everyone.
    pub fn reset_game(&mut self) {
        self.rotation.clear();
        self.status = GameStatus::Uninitialized;
        self.finished = false;
        self.epoch += 1;
        self.notifier.publish();
    }

    /// Add every player's final score to their cumulative score.
    pub fn record_scores(&mut self) {
        self.rotation.iter_mut().for_each(Player::record);
        self.notifier.publish();
    }

    /// Zero every player's cumulative score.
    pub fn reset_cumulative(&mut self) {
        self.rotation.iter_mut().for_each(Player::reset_score);
        self.notifier.publish();
    }

    /// Map a play speed in percent onto a think time: 0 is slowest,
    /// 100 is instant.
    pub fn set_play_speed(&mut self, percent: u32) -> Duration {
        let percent = percent.min(100) as u64;
        self.think = Duration::from_millis(SLOWEST_THINK_MS - SLOWEST_THINK_MS / 100 * percent);
        self.think
    }
}

impl TurnCoordinator {
    pub fn status(&self) -> GameStatus {
        self.status
    }
    pub fn think_time(&self) -> Duration {
        self.think
    }
    /// A game has concluded and its scores are not banked yet.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
    /// Counter bumped whenever a game starts or the table is cleared.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
    pub fn head(&self) -> Option<&Player> {
        self.rotation.head()
    }
    pub fn head_mut(&mut self) -> Option<&mut Player> {
        self.rotation.head_mut()
    }
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.rotation.get(name)
    }
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.rotation.iter()
    }
    pub fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.rotation.iter_mut()
    }
    pub fn len(&self) -> usize {
        self.rotation.len()
    }
    pub fn subscribe(&self) -> Subscription {
        self.notifier.subscribe()
    }
}
