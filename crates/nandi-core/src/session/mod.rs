//! Chat session domain module.
//!
//! # Module Structure
//!
//! - `message`: conversation turns (`TurnRole`, `ConversationTurn`)
//! - `transcript`: the append-only `Transcript`
//! - `mode`: chat channel (`ChatMode`) and call-duration formatting

mod message;
mod mode;
mod transcript;

pub use message::{ConversationTurn, TurnRole};
pub use mode::{ChatMode, format_call_duration};
pub use transcript::Transcript;
