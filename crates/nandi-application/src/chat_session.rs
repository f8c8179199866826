//! Chat session use case.
//!
//! The session owns its transcript; the presentation layer only ever sees
//! cloned snapshots. Sending a message appends the user turn immediately
//! and schedules the assistant reply on a background task that waits out
//! the simulated latency, appends the reply and signals completion through
//! a [`PendingReply`].

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, oneshot};
use uuid::Uuid;

use nandi_core::Language;
use nandi_core::config::ChatConfig;
use nandi_core::error::{NandiError, Result};
use nandi_core::quick_action::find_quick_action;
use nandi_core::responder::{GREETING, ResponseResolver};
use nandi_core::session::{ChatMode, ConversationTurn, Transcript};

/// Completion handle for a scheduled assistant reply.
///
/// Dropping it does not cancel the reply; the turn is appended either way.
#[derive(Debug)]
pub struct PendingReply {
    user_turn: ConversationTurn,
    receiver: oneshot::Receiver<ConversationTurn>,
}

impl PendingReply {
    /// The user turn that triggered this reply.
    pub fn user_turn(&self) -> &ConversationTurn {
        &self.user_turn
    }

    /// Waits until the assistant turn has been appended and returns it.
    pub async fn wait(self) -> Result<ConversationTurn> {
        self.receiver
            .await
            .map_err(|_| NandiError::internal("reply task ended without a response"))
    }
}

pub struct ChatSession {
    id: String,
    transcript: Arc<RwLock<Transcript>>,
    resolver: Arc<ResponseResolver>,
    language: Language,
    mode: ChatMode,
    reply_delay: Duration,
}

impl ChatSession {
    /// Creates a session whose transcript starts with the greeting.
    ///
    /// # Errors
    ///
    /// `UnsupportedLanguage` if `config.default_language` is not offered in chat.
    pub fn new(resolver: Arc<ResponseResolver>, config: &ChatConfig) -> Result<Self> {
        let language = config.default_language;
        ensure_chat_language(language)?;

        let mut transcript = Transcript::new();
        transcript.push(ConversationTurn::assistant(GREETING, language));

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            transcript: Arc::new(RwLock::new(transcript)),
            resolver,
            language,
            mode: ChatMode::default(),
            reply_delay: config.reply_delay(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Applies to turns created from now on.
    ///
    /// Only [`Language::CHAT`] languages are accepted; anything else leaves
    /// the session language unchanged.
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        ensure_chat_language(language)?;
        tracing::debug!(session = %self.id, %language, "language changed");
        self.language = language;
        Ok(())
    }

    pub fn mode(&self) -> ChatMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ChatMode) {
        self.mode = mode;
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Sends a user message.
    ///
    /// Returns `None` for blank input, which leaves the transcript untouched.
    /// Must be called within a Tokio runtime.
    pub async fn send(&self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }

        let user_turn = ConversationTurn::user(text, self.language);
        self.transcript.write().await.push(user_turn.clone());
        tracing::debug!(session = %self.id, turn = %user_turn.id(), "user turn appended");

        let (sender, receiver) = oneshot::channel();
        let transcript = Arc::clone(&self.transcript);
        let resolver = Arc::clone(&self.resolver);
        let delay = self.reply_delay;
        let language = self.language;
        let input = text.to_string();
        let session_id = self.id.clone();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let reply = ConversationTurn::assistant(resolver.resolve(&input), language);
            transcript.write().await.push(reply.clone());
            tracing::debug!(
                session = %session_id,
                topic = %resolver.resolve_topic(&input),
                "assistant turn appended"
            );

            // The caller may have dropped the handle; the turn is stored anyway.
            let _ = sender.send(reply);
        });

        Some(PendingReply {
            user_turn,
            receiver,
        })
    }

    /// Sends the query of a builtin quick action.
    ///
    /// # Errors
    ///
    /// `NandiError::NotFound` for an unknown action id.
    pub async fn send_quick_action(&self, action_id: &str) -> Result<PendingReply> {
        let action = find_quick_action(action_id)
            .ok_or_else(|| NandiError::not_found("quick action", action_id))?;
        tracing::info!(session = %self.id, action = %action.label, "quick action");

        self.send(&action.query)
            .await
            .ok_or_else(|| NandiError::internal("quick action query is blank"))
    }

    /// Read-only copy of the transcript.
    pub async fn snapshot(&self) -> Transcript {
        self.transcript.read().await.clone()
    }
}

fn ensure_chat_language(language: Language) -> Result<()> {
    if language.is_chat_language() {
        Ok(())
    } else {
        tracing::warn!(%language, "language not offered in chat");
        Err(NandiError::unsupported_language(language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nandi_core::session::TurnRole;

    fn session() -> ChatSession {
        let resolver = Arc::new(ResponseResolver::demo().unwrap());
        ChatSession::new(resolver, &ChatConfig::default()).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_session_starts_with_greeting() {
        let session = session();
        let transcript = session.snapshot().await;
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.turns()[0].role(), TurnRole::Assistant);
        assert_eq!(transcript.turns()[0].text(), GREETING);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_is_ignored() {
        let session = session();
        assert!(session.send("   ").await.is_none());
        assert_eq!(session.snapshot().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let session = session();
        let start = tokio::time::Instant::now();

        let pending = session.send("What's the weather?").await.unwrap();
        assert_eq!(pending.user_turn().text(), "What's the weather?");

        // user turn is visible before the reply
        let before = session.snapshot().await;
        assert_eq!(before.len(), 2);
        assert_eq!(before.last().unwrap().role(), TurnRole::User);

        let reply = pending.wait().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert_eq!(reply.role(), TurnRole::Assistant);
        assert!(reply.text().starts_with("Today's weather forecast"));

        let after = session.snapshot().await;
        assert_eq!(after.len(), 3);
        assert_eq!(after.last(), Some(&reply));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_uses_session_language() {
        let mut session = session();
        session.set_language(Language::Telugu).unwrap();
        let reply = session.send("hello").await.unwrap().wait().await.unwrap();
        assert_eq!(reply.language(), Language::Telugu);
        assert!(reply.text().starts_with("Thank you for your message."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_chat_language_rejected() {
        let mut session = session();
        let err = session.set_language(Language::Marathi).unwrap_err();
        assert!(err.is_unsupported_language());
        assert_eq!(session.language(), Language::English);

        let config = ChatConfig {
            default_language: Language::Gujarati,
            ..ChatConfig::default()
        };
        let resolver = Arc::new(ResponseResolver::demo().unwrap());
        let err = ChatSession::new(resolver, &config).err().unwrap();
        assert!(err.is_unsupported_language());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_still_appends() {
        let session = session();
        drop(session.send("loan").await.unwrap());
        tokio::time::sleep(Duration::from_millis(1500)).await;
        let transcript = session.snapshot().await;
        assert_eq!(transcript.count_by(TurnRole::Assistant), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_action() {
        let session = session();
        let reply = session.send_quick_action("2").await.unwrap().wait().await.unwrap();
        assert!(reply.text().starts_with("Today's Mandi Prices"));

        let err = session.send_quick_action("42").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
