pub mod generation;
pub mod history;
pub mod payload;

pub use generation::*;
pub use history::*;
pub use payload::*;
