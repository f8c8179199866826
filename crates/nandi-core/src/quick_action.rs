//! Quick actions shown beside the chat input.
//!
//! Each action is a canned query that is sent as if the farmer typed it.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// A single quick action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    /// Slot identifier ("1", "2", ...).
    pub id: String,
    pub label: String,
    /// Text sent to the assistant.
    pub query: String,
    pub icon: String,
}

impl QuickAction {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        query: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            query: query.into(),
            icon: icon.into(),
        }
    }
}

static BUILTIN_QUICK_ACTIONS: OnceLock<Vec<QuickAction>> = OnceLock::new();

/// Returns the builtin quick actions in display order.
pub fn builtin_quick_actions() -> &'static [QuickAction] {
    BUILTIN_QUICK_ACTIONS.get_or_init(|| {
        vec![
            QuickAction::new("1", "Weather Update", "What is today's weather forecast?", "🌤️"),
            QuickAction::new("2", "Market Prices", "Show me today's mandi prices", "💰"),
            QuickAction::new(
                "3",
                "Loan Information",
                "I need information about agricultural loans",
                "🏦",
            ),
            QuickAction::new("4", "Crop Advice", "Give me advice for my wheat crop", "🌾"),
            QuickAction::new("5", "Trust Score", "Check my current trust score", "⭐"),
            QuickAction::new("6", "Satellite Data", "Show my farm's satellite analysis", "🛰️"),
        ]
    })
}

/// Looks up a builtin quick action by id.
pub fn find_quick_action(id: &str) -> Option<&'static QuickAction> {
    builtin_quick_actions().iter().find(|a| a.id == id)
}
