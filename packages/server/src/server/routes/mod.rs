// HTTP routes
pub mod essays;
pub mod health;

pub use essays::*;
pub use health::*;
