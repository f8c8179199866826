//! Illustrative figures rendered into the canned responses.
//!
//! Nothing here is fetched or computed live; a snapshot is a fixed bundle
//! of demo numbers handed to the template engine once, when the resolver
//! is built.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub min_temp_c: i32,
    pub max_temp_c: i32,
    pub rain_chance_pct: u8,
    pub wind_kmh: u32,
    pub recommendation: String,
}

/// Mandi price for one commodity, in rupees per quintal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropPrice {
    pub crop: String,
    pub icon: String,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub prices: Vec<CropPrice>,
    pub best_location: String,
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentShare {
    pub name: String,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustSnapshot {
    pub score: u32,
    pub max_score: u32,
    pub eligible_for: String,
    pub components: Vec<ComponentShare>,
    pub improvement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteSnapshot {
    pub ndvi: f64,
    pub rating: String,
    pub healthy_pct: u8,
    pub moderate_pct: u8,
    pub stressed_pct: u8,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceSnapshot {
    pub tips: Vec<String>,
    pub expected_yield: String,
    pub harvest_window: String,
}

/// Template context for the builtin rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmSnapshot {
    pub weather: WeatherSnapshot,
    pub market: MarketSnapshot,
    pub trust: TrustSnapshot,
    pub satellite: SatelliteSnapshot,
    pub advice: AdviceSnapshot,
}

impl FarmSnapshot {
    /// The figures shown by the public demo.
    pub fn demo() -> Self {
        Self {
            weather: WeatherSnapshot {
                min_temp_c: 28,
                max_temp_c: 35,
                rain_chance_pct: 20,
                wind_kmh: 12,
                recommendation:
                    "Good day for field work. Consider watering crops in the evening.".to_string(),
            },
            market: MarketSnapshot {
                prices: vec![
                    price("Wheat", "🌾", 2150),
                    price("Maize", "🌽", 1890),
                    price("Potato", "🥔", 1200),
                    price("Onion", "🧅", 2800),
                ],
                best_location: "Azadpur Mandi, Delhi".to_string(),
                trend: "Wheat prices up 3% from last week".to_string(),
            },
            trust: TrustSnapshot {
                score: 750,
                max_score: 1000,
                eligible_for: "KCC and Crop Loan".to_string(),
                components: vec![
                    share("Repayment History", 85),
                    share("Farm Productivity", 78),
                    share("Market Engagement", 72),
                ],
                improvement:
                    "Increase market sales frequency and maintain timely loan repayments."
                        .to_string(),
            },
            satellite: SatelliteSnapshot {
                ndvi: 0.65,
                rating: "Good".to_string(),
                healthy_pct: 78,
                moderate_pct: 18,
                stressed_pct: 4,
                recommendation: "Focus irrigation on the northeastern section. Consider soil testing for stressed areas.".to_string(),
            },
            advice: AdviceSnapshot {
                tips: vec![
                    "Apply urea fertilizer (50kg/acre)".to_string(),
                    "Monitor for pest activity".to_string(),
                    "Ensure adequate irrigation".to_string(),
                    "Consider intercropping with legumes".to_string(),
                ],
                expected_yield: "25-30 quintals/acre".to_string(),
                harvest_window: "Next 15-20 days".to_string(),
            },
        }
    }
}

impl Default for FarmSnapshot {
    fn default() -> Self {
        Self::demo()
    }
}

fn price(crop: &str, icon: &str, price: u64) -> CropPrice {
    CropPrice {
        crop: crop.to_string(),
        icon: icon.to_string(),
        price,
    }
}

fn share(name: &str, percent: u8) -> ComponentShare {
    ComponentShare {
        name: name.to_string(),
        percent,
    }
}
