pub mod ball;
pub mod search;

pub use ball::*;
pub use search::*;
