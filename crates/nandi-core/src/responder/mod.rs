//! Canned-response engine for the chat demo.
//!
//! Incoming text is lower-cased and matched against an ordered rule table;
//! the first rule with a keyword occurring as a substring wins, and a
//! keyword-less fallback rule at the end of the table catches everything
//! else.
//!
//! # Module Structure
//!
//! - `rule`: `Rule`, `Topic` and the validated `RuleTable`
//! - `snapshot`: illustrative figures (`FarmSnapshot`) baked into the templates
//! - `builtin`: the default rule table and greeting
//! - `resolver`: `ResponseResolver`, which pre-renders and matches

mod builtin;
mod resolver;
mod rule;
mod snapshot;

pub use builtin::{GREETING, builtin_rules};
pub use resolver::{ResponseResolver, format_inr};
pub use rule::{Rule, RuleTable, Topic};
pub use snapshot::{
    AdviceSnapshot, ComponentShare, CropPrice, FarmSnapshot, MarketSnapshot, SatelliteSnapshot,
    TrustSnapshot, WeatherSnapshot,
};
