use super::*;
use crate::DICE;
use crate::GameError;
use crate::Points;
use crate::agents::*;
use crate::dice::*;
use crate::notify::*;
use crate::scoring::*;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::time::Duration;
use tokio::sync::broadcast;

#[derive(Debug)]
struct Shared {
    dice: Mutex<DiceRack>,
    game: Mutex<TurnCoordinator>,
    gate: Gate,
    faults: broadcast::Sender<Fault>,
    stalled: Mutex<Option<Fault>>,
}

/// Handle to one game context: the dice, the coordinator and the gate that
/// serializes automated turns. Clones share the same table.
///
/// People play through the command surface ([`Table::roll`],
/// [`Table::toggle_hold`], [`Table::score_current`]). Automated seats are
/// played by [`Turn`] tasks that the table spawns itself.
#[derive(Debug, Clone)]
pub struct Table {
    shared: Arc<Shared>,
}

impl Default for Table {
    fn default() -> Self {
        Self::from(DiceRack::default())
    }
}

impl From<DiceRack> for Table {
    fn from(dice: DiceRack) -> Self {
        let (faults, _) = broadcast::channel(16);
        Self {
            shared: Arc::new(Shared {
                dice: Mutex::new(dice),
                game: Mutex::new(TurnCoordinator::default()),
                gate: Gate::default(),
                faults,
                stalled: Mutex::new(None),
            }),
        }
    }
}

impl Table {
    /// Table whose dice are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::from(DiceRack::seeded(seed))
    }
}

// ============================================================================
// SEATING AND LIFECYCLE
// ============================================================================
impl Table {
    pub fn add_player(&self, name: &str, kind: AgentKind) -> Result<(), GameError> {
        self.seat(name, kind.agent())
    }

    pub fn seat(&self, name: &str, agent: Arc<dyn Agent>) -> Result<(), GameError> {
        self.game().add_player(Player::from((name, agent)))
    }

    /// Start a game: bank any finished game, deal fresh cards, reset the
    /// dice and hand the first turn out.
    pub async fn new_game(&self) -> Result<(), GameError> {
        if self.shared.gate.is_busy() {
            return Err(GameError::TurnInProgress);
        }
        self.game().begin_game()?;
        self.dice().reset();
        self.unstall();
        self.next_turn().await;
        Ok(())
    }

    /// Unseat everyone.
    pub fn reset_game(&self) -> Result<(), GameError> {
        if self.shared.gate.is_busy() {
            return Err(GameError::TurnInProgress);
        }
        self.game().reset_game();
        self.dice().reset();
        self.unstall();
        log::info!("[table] cleared");
        Ok(())
    }

    /// Play speed in percent; returns the resulting think time.
    pub fn set_play_speed(&self, percent: u32) -> Duration {
        self.game().set_play_speed(percent)
    }

    /// Wait for the gate, then give the active player their turn.
    /// Returns at once when a person is due; they act through the
    /// command surface.
    pub async fn next_turn(&self) {
        loop {
            self.shared.gate.cleared().await;
            if self.up_next().is_none() {
                return;
            }
            if let Some(guard) = self.shared.gate.claim() {
                if let Some(seat) = self.up_next() {
                    Turn::spawn(self.clone(), seat, guard);
                }
                return;
            }
        }
    }

    /// The automated seat due to act in the running game.
    fn up_next(&self) -> Option<Seat> {
        let game = self.game();
        if game.status() != GameStatus::InProgress || game.is_over() {
            return None;
        }
        match game.head() {
            Some(player) if player.is_automated() => Some(Seat::from((
                player.name().to_string(),
                player.agent(),
                game.epoch(),
            ))),
            Some(player) => {
                log::debug!("[table] waiting on {}", player);
                None
            }
            None => {
                log::warn!("[table] no players to take a turn");
                None
            }
        }
    }

    /// After a turn has been scored: conclude the game if every card is
    /// full. True while the game goes on. Turns from an earlier game never
    /// go on.
    pub(crate) fn wrap_up(&self, epoch: u64) -> bool {
        let mut game = self.game();
        if game.epoch() != epoch || game.status() != GameStatus::InProgress {
            return false;
        }
        if !game.is_over() {
            return true;
        }
        game.conclude();
        if let Some(winner) = game.show_winner() {
            log::info!("[table] {} wins with {}", winner, winner.card().final_score());
        }
        false
    }

    /// Zero every player's score carried across games.
    pub fn reset_cumulative(&self) -> Result<(), GameError> {
        if self.shared.gate.is_busy() {
            return Err(GameError::TurnInProgress);
        }
        self.game().reset_cumulative();
        Ok(())
    }
}

// ============================================================================
// COMMANDS FOR PEOPLE
// ============================================================================
impl Table {
    /// Roll the unheld dice for the active person.
    pub fn roll(&self) -> Result<Roll, GameError> {
        self.manual()?;
        self.roll_dice()
    }

    /// Hold or release a die. Only between the first and last roll of a
    /// person's turn.
    pub fn toggle_hold(&self, index: usize) -> Result<bool, GameError> {
        self.manual()?;
        let mut dice = self.dice();
        match dice.status() {
            DiceStatus::Ready => Err(GameError::NotRolled),
            DiceStatus::OutOfRolls => Err(GameError::OutOfRolls),
            DiceStatus::Rolling => dice.toggle_hold(index),
        }
    }

    /// Score the dice as they lie in `category`, end the person's turn and
    /// hand the table on.
    pub async fn score_current(&self, category: Category) -> Result<Points, GameError> {
        let epoch = self.manual()?;
        let roll = self.rolled()?;
        let points = score(category, &roll);
        self.game().take_score(category, points)?;
        self.dice().reset();
        if self.wrap_up(epoch) {
            self.next_turn().await;
        }
        Ok(points)
    }

    /// Record a score for the active person without touching the dice or
    /// dispatching the next turn; follow with [`Table::next_turn`].
    pub fn take_score(&self, category: Category, value: Points) -> Result<(), GameError> {
        self.manual()?;
        self.game().take_score(category, value)
    }

    /// Commands for people need a running game with open categories, no
    /// automated turn in flight, and a person at the head. Returns the
    /// current game epoch.
    fn manual(&self) -> Result<u64, GameError> {
        if self.shared.gate.is_busy() {
            return Err(GameError::TurnInProgress);
        }
        let game = self.game();
        if game.status() != GameStatus::InProgress || game.is_over() {
            return Err(GameError::NoGameInProgress);
        }
        match game.head() {
            None => Err(GameError::NoPlayers),
            Some(player) if player.is_automated() => Err(GameError::NotYourTurn),
            Some(_) => Ok(game.epoch()),
        }
    }

    fn rolled(&self) -> Result<Roll, GameError> {
        let dice = self.dice();
        match dice.roll_count() {
            0 => Err(GameError::NotRolled),
            _ => Ok(dice.current_roll()),
        }
    }
}

// ============================================================================
// TURN PLUMBING
// ============================================================================
impl Table {
    /// Roll, then grant the active player a Yahtzee bonus if the roll earns one.
    pub(crate) fn roll_dice(&self) -> Result<Roll, GameError> {
        let roll = self.dice().roll()?;
        if score(Category::Yahtzee, &roll) > 0 {
            let mut game = self.game();
            if let Some(player) = game.head_mut() {
                if player.card_mut().take_yahtzee_bonus() {
                    log::info!("[table] {} earns a Yahtzee bonus", player.name());
                }
            }
        }
        Ok(roll)
    }
    /// Score for an automated seat. Refused unless that seat is still at
    /// the head of the game it was dealt into.
    pub(crate) fn commit(
        &self,
        seat: &Seat,
        category: Category,
        value: Points,
    ) -> Result<(), GameError> {
        let mut game = self.game();
        if game.epoch() != seat.epoch() || game.status() != GameStatus::InProgress {
            return Err(GameError::NoGameInProgress);
        }
        match game.head().map(|player| player.name() == seat.name()) {
            Some(true) => game.take_score(category, value),
            Some(false) => Err(GameError::NotYourTurn),
            None => Err(GameError::NoPlayers),
        }
    }
    pub(crate) fn hold(&self, index: usize) -> Result<(), GameError> {
        self.dice().hold(index)
    }
    pub(crate) fn reset_dice(&self) {
        self.dice().reset();
    }
    pub(crate) fn fault(&self, fault: Fault) {
        log::error!("[table] turn abandoned by {}", fault);
        *self.stall() = Some(fault.clone());
        let _ = self.shared.faults.send(fault);
    }
    fn unstall(&self) {
        self.stall().take();
    }
    fn stall(&self) -> MutexGuard<'_, Option<Fault>> {
        self.shared
            .stalled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
    fn dice(&self) -> MutexGuard<'_, DiceRack> {
        self.shared
            .dice
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
    fn game(&self) -> MutexGuard<'_, TurnCoordinator> {
        self.shared
            .game
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// QUERIES
// ============================================================================
impl Table {
    pub fn current_roll(&self) -> Roll {
        self.dice().current_roll()
    }
    pub fn holds(&self) -> [bool; DICE] {
        self.dice().holds()
    }
    pub fn roll_count(&self) -> usize {
        self.dice().roll_count()
    }
    pub fn rolls_left(&self) -> usize {
        self.dice().rolls_left()
    }
    pub fn dice_status(&self) -> DiceStatus {
        self.dice().status()
    }
    pub fn status(&self) -> GameStatus {
        self.game().status()
    }
    pub fn think_time(&self) -> Duration {
        self.game().think_time()
    }
    pub fn is_turn_in_progress(&self) -> bool {
        self.shared.gate.is_busy()
    }
    /// The fault that stopped the running game, if one has.
    pub fn stalled(&self) -> Option<Fault> {
        self.stall().clone()
    }
    /// Name of the player to act.
    pub fn active(&self) -> Option<String> {
        self.game().head().map(|p| p.name().to_string())
    }
    /// Seating order starting from the active player.
    pub fn order(&self) -> Vec<String> {
        self.game().players().map(|p| p.name().to_string()).collect()
    }
    pub fn standings(&self) -> Vec<Standing> {
        self.game().players().map(Standing::from).collect()
    }
    pub fn standing(&self, name: &str) -> Option<Standing> {
        self.game().player(name).map(Standing::from)
    }
    /// The winner of the last finished game, until the next one starts.
    pub fn winner(&self) -> Option<Standing> {
        let game = self.game();
        match game.is_finished() {
            true => game.head().map(Standing::from),
            false => None,
        }
    }
    /// Categories still open on the active player's card.
    pub fn open_categories(&self) -> Result<Vec<Category>, GameError> {
        self.game()
            .head()
            .map(|p| p.card().open_categories())
            .ok_or(GameError::NoPlayers)
    }
}

// ============================================================================
// OBSERVATION
// ============================================================================
impl Table {
    pub fn watch_dice(&self) -> Subscription {
        self.dice().subscribe()
    }
    pub fn watch_game(&self) -> Subscription {
        self.game().subscribe()
    }
    /// Changes to one player's current scorecard. A new game replaces the
    /// card, so subscribe again after [`Table::new_game`].
    pub fn watch_card(&self, name: &str) -> Option<Subscription> {
        self.game().player(name).map(|p| p.card().subscribe())
    }
    pub fn faults(&self) -> broadcast::Receiver<Fault> {
        self.shared.faults.subscribe()
    }

    /// Resolves once no automated turn is running.
    pub async fn idle(&self) {
        self.shared.gate.cleared().await;
    }

    /// Resolves once the running game has finished and its last turn has
    /// let go of the gate, or with the first automated turn that faults
    /// before then.
    pub async fn settled(&self) -> Result<(), Fault> {
        let mut game = self.watch_game();
        let mut faults = self.faults();
        loop {
            if let Some(fault) = self.stalled() {
                return Err(fault);
            }
            if self.status() != GameStatus::InProgress {
                self.idle().await;
                return Ok(());
            }
            tokio::select! {
                changed = game.changed() => {
                    if !changed {
                        return Ok(());
                    }
                }
                fault = faults.recv() => match fault {
                    Ok(fault) => return Err(fault),
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => return Ok(()),
                },
            }
        }
    }

    /// Wait until a person is due to act and return their name.
    /// Returns `None` once no game is running or an automated turn faulted.
    pub async fn await_manual(&self) -> Option<String> {
        loop {
            let mut game = self.watch_game();
            let mut gate = self.shared.gate.subscribe();
            let mut faults = self.faults();
            if self.status() != GameStatus::InProgress || self.stalled().is_some() {
                return None;
            }
            if self.manual().is_ok() {
                return self.active();
            }
            tokio::select! {
                _ = game.changed() => {}
                _ = gate.changed() => {}
                _ = faults.recv() => {}
            }
        }
    }
}
