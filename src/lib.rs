//! Rules and turn engine for a five-dice, thirteen-category dice game.
//!
//! The engine keeps one [`game::Table`] per game context: a dice rack,
//! a rotation of players each holding a scorecard, and automated agents
//! that take their turns on background tasks.

pub mod agents;
pub mod dice;
pub mod error;
pub mod game;
pub mod notify;
pub mod scorecard;
pub mod scoring;

pub use error::GameError;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Face value shown by a single die.
pub type Face = u8;
/// Scores, bonuses and running totals.
pub type Points = i32;

// ============================================================================
// DICE
// ============================================================================
/// Dice in the rack.
pub const DICE: usize = 5;
/// Highest face on a die.
pub const FACES: Face = 6;
/// Rolls allowed per turn.
pub const MAX_ROLLS: usize = 3;

// ============================================================================
// SCORING RULES
// ============================================================================
/// Categories on a scorecard.
pub const CATEGORIES: usize = 13;
/// Fixed score for a full house.
pub const FULL_HOUSE_POINTS: Points = 25;
/// Fixed score for a small straight.
pub const SMALL_STRAIGHT_POINTS: Points = 30;
/// Fixed score for a large straight.
pub const LARGE_STRAIGHT_POINTS: Points = 40;
/// Fixed score for five of a kind.
pub const YAHTZEE_POINTS: Points = 50;
/// Granted for each further five of a kind once Yahtzee has been scored.
pub const YAHTZEE_BONUS_POINTS: Points = 100;
/// Upper-section bonus.
pub const UPPER_BONUS_POINTS: Points = 35;
/// The upper bonus latches once the upper sum exceeds this.
pub const UPPER_BONUS_THRESHOLD: Points = 62;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Players required before a game can start.
pub const MIN_PLAYERS: usize = 2;
/// Pause between automated roll and hold decisions (milliseconds).
pub const DEFAULT_THINK_MS: u64 = 500;
/// Think time at play speed zero (milliseconds).
pub const SLOWEST_THINK_MS: u64 = 1000;

/// Initialize logging: Info to the terminal, Debug to a timestamped file under `logs/`.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/robodice-{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler that ends the process without waiting on the table.
#[cfg(feature = "cli")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, leaving the table");
            std::process::exit(0);
        }
    });
}
