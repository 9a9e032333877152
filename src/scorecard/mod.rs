mod card;
mod entry;

pub use card::*;
pub use entry::*;
