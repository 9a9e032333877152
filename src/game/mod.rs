mod coordinator;
mod fault;
mod gate;
mod player;
mod rotation;
mod standing;
mod status;
mod table;

pub use coordinator::*;
pub use fault::*;
pub use gate::*;
pub use player::*;
pub use rotation::*;
pub use standing::*;
pub use status::*;
pub use table::*;
