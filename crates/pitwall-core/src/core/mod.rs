//! Session state and the command loop.

pub mod board;
pub mod dispatch;
pub mod interrupt;
pub mod listing;
pub mod navigate;
pub mod parse;
pub mod session;

pub use dispatch::{Crew, Dispatcher, Flow, Input, LineSource};
pub use session::{Session, TyreCompound};
