mod agent;
mod human;
mod kind;
mod random;
mod repeats;
mod threshold;
mod turn;
mod upper;

pub use agent::*;
pub use human::*;
pub use kind::*;
pub use random::*;
pub use repeats::*;
pub use threshold::*;
pub use turn::*;
pub use upper::*;
