//! Async use cases on top of `nandi-core`.
//!
//! - `chat_session`: transcript-owning chat with a simulated reply delay
//! - `voice_call`: call-duration counter driven by a background interval
//! - `registration`: registration wizard wired to a submission handler

pub mod chat_session;
pub mod registration;
pub mod voice_call;

pub use chat_session::{ChatSession, PendingReply};
pub use registration::{
    LoggingSubmissionHandler, REGISTRATION_CONFIRMATION, RegistrationFlow, SubmissionHandler,
};
pub use voice_call::VoiceCall;
