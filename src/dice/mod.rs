mod rack;
mod roll;
mod status;

pub use rack::*;
pub use roll::*;
pub use status::*;
