//! Configuration model.
//!
//! Every field has a default so a partial (or missing) `config.toml` is
//! always usable. Loading lives in `nandi-infrastructure`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{NandiError, Result};
use crate::language::Language;
use crate::trust::TrustThresholds;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NandiConfig {
    pub chat: ChatConfig,
    pub call: CallConfig,
    pub trust: TrustThresholds,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ChatConfig {
    /// Simulated latency before the assistant reply is appended.
    pub reply_delay_ms: u64,
    pub default_language: Language,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            default_language: Language::English,
        }
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CallConfig {
    /// Interval of the call-duration counter.
    pub tick_interval_ms: u64,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
        }
    }
}

impl CallConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl NandiConfig {
    /// Checks values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<()> {
        if !self.chat.default_language.is_chat_language() {
            return Err(NandiError::config(format!(
                "chat.default_language '{}' is not a chat language",
                self.chat.default_language
            )));
        }
        if self.call.tick_interval_ms == 0 {
            return Err(NandiError::config("call.tick_interval_ms must be positive"));
        }
        if !self.trust.is_ordered() {
            return Err(NandiError::config(format!(
                "trust thresholds must descend: excellent {} > good {} > fair {}",
                self.trust.excellent, self.trust.good, self.trust.fair
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: NandiConfig = toml::from_str(
            r#"
            [chat]
            default_language = "tamil"

            [trust]
            excellent = 900
            "#,
        )
        .unwrap();

        assert_eq!(config.chat.reply_delay_ms, 1000);
        assert_eq!(config.chat.default_language, Language::Tamil);
        assert_eq!(config.trust.excellent, 900);
        assert_eq!(config.trust.good, 750);
        assert_eq!(config.call.tick_interval(), Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = NandiConfig::default();
        config.call.tick_interval_ms = 0;
        assert!(config.validate().unwrap_err().is_config());

        let mut config = NandiConfig::default();
        config.trust.fair = 900;
        assert!(config.validate().unwrap_err().is_config());

        let mut config = NandiConfig::default();
        config.chat.default_language = Language::Marathi;
        assert!(config.validate().unwrap_err().is_config());
    }
}
