mod category;
mod evaluator;

pub use category::*;
pub use evaluator::*;
