//! Finance mini-games as explicit state machines.
//!
//! Each game is a view-model: one struct per screen flow, mutated
//! synchronously by the methods a UI would call on user input. Operations
//! the UI would refuse return [`GameError`] carrying the user-facing message.

pub mod budget;
pub mod escape_room;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Not available in the {0} phase")]
    WrongPhase(&'static str),

    #[error("{0}")]
    Rejected(String),
}
