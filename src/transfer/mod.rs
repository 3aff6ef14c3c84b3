//! Transfer module for scheduling money transfers and computing their fees.
mod command;
mod fee;
mod record;
mod state;
mod store;
mod types;

pub use command::*;
pub use fee::*;
pub use record::*;
pub use state::*;
pub use store::*;
pub use types::*;
