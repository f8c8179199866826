//! Builtin rule table for the advisory chat.
//!
//! Order matters: the first matching rule wins, so broader keywords such as
//! `crop` sit after the more specific topics.

use std::sync::OnceLock;

use super::rule::{Rule, RuleTable, Topic};

/// First assistant turn of every new chat session.
pub const GREETING: &str = "Namaste! I am your Nandi AI assistant. How can I help you today? You can ask about weather, market prices, loans, or farming advice.";

const WEATHER: &str = "Today's weather forecast for your area:
🌤️ Temperature: {{ weather.min_temp_c }}°C - {{ weather.max_temp_c }}°C
🌧️ Rain: {{ weather.rain_chance_pct }}% chance
💨 Wind: {{ weather.wind_kmh }} km/h

Recommendation: {{ weather.recommendation }}";

const MARKET: &str = "Today's Mandi Prices (₹/quintal):{% for p in market.prices %}
{{ p.icon }} {{ p.crop }}: ₹{{ p.price | inr }}{% endfor %}

Best selling location: {{ market.best_location }}
Trend: {{ market.trend }}";

const LOAN: &str = "Agricultural Loan Options:
🏦 Kisan Credit Card: Up to ₹3 Lakh at 7% interest
🌱 Crop Loan: ₹50,000 - ₹5 Lakh
🚜 Equipment Loan: Up to ₹10 Lakh

Your Trust Score: {{ trust.score }}/{{ trust.max_score }}
Eligible for: {{ trust.eligible_for }}

Would you like help with application?";

const TRUST: &str = "Your Current Trust Score: {{ trust.score }}/{{ trust.max_score }} ⭐

Score Breakdown:{% for c in trust.components %}
✅ {{ c.name }}: {{ c.percent }}%{% endfor %}

To improve: {{ trust.improvement }}";

const SATELLITE: &str = "🛰️ Satellite Analysis for your farm:

NDVI Score: {{ satellite.ndvi }} ({{ satellite.rating }})
🟢 Healthy crop area: {{ satellite.healthy_pct }}%
🟡 Moderate stress: {{ satellite.moderate_pct }}%
🔴 Stressed area: {{ satellite.stressed_pct }}%

Recommendation: {{ satellite.recommendation }}";

const ADVICE: &str = "🌾 Farming Advice:

For current season:{% for tip in advice.tips %}
• {{ tip }}{% endfor %}

Expected yield: {{ advice.expected_yield }}
Best harvest time: {{ advice.harvest_window }}";

const FALLBACK: &str = "Thank you for your message. I can help you with:
• Weather forecasts
• Market prices
• Loan information
• Farming advice
• Trust score updates
• Satellite crop monitoring

Please ask me about any of these topics!";

static BUILTIN_RULES: OnceLock<Vec<Rule>> = OnceLock::new();

/// Returns the builtin rules in declaration order.
///
/// Initialized on first access and cached for the lifetime of the process.
pub fn builtin_rules() -> &'static [Rule] {
    BUILTIN_RULES.get_or_init(|| {
        vec![
            Rule::new(Topic::Weather, ["weather"], WEATHER),
            Rule::new(Topic::MarketPrices, ["market", "price", "mandi"], MARKET),
            Rule::new(Topic::Loan, ["loan"], LOAN),
            Rule::new(Topic::TrustScore, ["trust score"], TRUST),
            Rule::new(Topic::Satellite, ["satellite", "ndvi"], SATELLITE),
            Rule::new(Topic::FarmingAdvice, ["crop", "advice", "farming"], ADVICE),
            Rule::fallback(FALLBACK),
        ]
    })
}

impl RuleTable {
    /// The builtin table. Its shape is checked by the tests below.
    pub fn builtin() -> Self {
        Self::from_checked(builtin_rules().to_vec())
    }
}
