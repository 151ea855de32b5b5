pub mod main;
pub mod models;
pub mod traits;

pub use main::Db;
pub use traits::{InsertOutcome, NewPosition, PositionStore};
