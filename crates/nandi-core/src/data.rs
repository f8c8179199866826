//! Weather and mandi price data behind the dashboard.
//!
//! The figures are demo values for one location; advisories are derived
//! from whatever report and price list they are given.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Price unit used by every demo mandi quote.
pub const PER_QUINTAL: &str = "₹/quintal";

/// States selectable on the dashboard, as `(key, label)`.
pub const DATA_LOCATIONS: [(&str, &str); 6] = [
    ("punjab", "Punjab"),
    ("haryana", "Haryana"),
    ("uttar-pradesh", "Uttar Pradesh"),
    ("maharashtra", "Maharashtra"),
    ("gujarat", "Gujarat"),
    ("rajasthan", "Rajasthan"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    Sunny,
    #[strum(to_string = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    #[strum(to_string = "Light Rain")]
    LightRain,
}

impl WeatherCondition {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Sunny => "☀️",
            Self::PartlyCloudy => "⛅",
            Self::Cloudy => "☁️",
            Self::LightRain => "🌧️",
        }
    }

    pub fn is_rain(&self) -> bool {
        matches!(self, Self::LightRain)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub temperature_c: i32,
    pub humidity_pct: u32,
    pub wind_kmh: u32,
    pub condition: WeatherCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub day: String,
    pub high_c: i32,
    pub low_c: i32,
    pub condition: WeatherCondition,
    pub rainfall_mm: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: String,
    pub current: CurrentWeather,
    pub forecast: Vec<DailyForecast>,
}

impl WeatherReport {
    pub fn total_rainfall_mm(&self) -> u32 {
        self.forecast.iter().map(|day| day.rainfall_mm).sum()
    }

    /// First forecast day whose condition is rain.
    pub fn first_rain_day(&self) -> Option<&DailyForecast> {
        self.forecast.iter().find(|day| day.condition.is_rain())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    Stable,
}

impl PriceTrend {
    /// Sign of a percentage change; exactly zero is `Stable`.
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Self::Up
        } else if change < 0.0 {
            Self::Down
        } else {
            Self::Stable
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Stable => "●",
        }
    }
}

/// One mandi quote. `change` is the weekly change in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPrice {
    pub crop: String,
    pub price: u32,
    pub unit: String,
    pub change: f64,
    pub trend: PriceTrend,
    pub market: String,
    pub last_updated: String,
}

impl MarketPrice {
    /// Quote in `₹/quintal` whose trend follows the sign of `change`.
    pub fn new(crop: &str, price: u32, change: f64, market: &str, last_updated: &str) -> Self {
        Self {
            crop: crop.to_string(),
            price,
            unit: PER_QUINTAL.to_string(),
            change,
            trend: PriceTrend::from_change(change),
            market: market.to_string(),
            last_updated: last_updated.to_string(),
        }
    }
}

/// Quotes with the given trend, or all of them for `None`. Order is kept.
pub fn filter_prices(prices: &[MarketPrice], trend: Option<PriceTrend>) -> Vec<&MarketPrice> {
    prices
        .iter()
        .filter(|price| trend.is_none_or(|trend| price.trend == trend))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub month: String,
    pub price: u32,
}

/// Monthly price history of one crop, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub crop: String,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Percent change from the first to the last point.
    pub fn change_percent(&self) -> Option<f64> {
        let first = self.points.first()?.price;
        let last = self.points.last()?.price;
        if first == 0 {
            return None;
        }
        Some((f64::from(last) - f64::from(first)) / f64::from(first) * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub icon: String,
    pub title: String,
    pub text: String,
}

impl Advisory {
    fn new(icon: &str, title: &str, text: String) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            text,
        }
    }
}

/// Advice derived from the report and quotes: sell the strongest riser,
/// prepare for the first rain day and hold the steepest faller.
pub fn advisories(weather: &WeatherReport, prices: &[MarketPrice]) -> Vec<Advisory> {
    let mut advice = Vec::new();

    let best = prices
        .iter()
        .filter(|p| p.trend == PriceTrend::Up)
        .max_by(|a, b| a.change.total_cmp(&b.change));
    if let Some(best) = best {
        advice.push(Advisory::new(
            "🌾",
            "Selling Opportunity",
            format!(
                "{} prices are up {:.1}% this week. Consider selling your {} stock at {} for better returns.",
                best.crop,
                best.change,
                best.crop.to_lowercase(),
                best.market
            ),
        ));
    }

    if let Some(day) = weather.first_rain_day() {
        advice.push(Advisory::new(
            "🌧️",
            "Weather Alert",
            format!(
                "{} expected on {} ({} mm). Plan your harvesting activities accordingly and protect stored crops.",
                day.condition, day.day, day.rainfall_mm
            ),
        ));
    }

    let worst = prices
        .iter()
        .filter(|p| p.trend == PriceTrend::Down)
        .min_by(|a, b| a.change.total_cmp(&b.change));
    if let Some(worst) = worst {
        advice.push(Advisory::new(
            "📊",
            "Market Insight",
            format!(
                "{} prices are declining ({:.1}%). Hold your stock for 2-3 weeks for potential price recovery.",
                worst.crop, worst.change
            ),
        ));
    }

    advice
}

pub fn demo_weather() -> WeatherReport {
    use WeatherCondition::*;

    let day = |day: &str, high_c, low_c, condition, rainfall_mm| DailyForecast {
        day: day.to_string(),
        high_c,
        low_c,
        condition,
        rainfall_mm,
    };

    WeatherReport {
        location: "Ludhiana, Punjab".to_string(),
        current: CurrentWeather {
            temperature_c: 32,
            humidity_pct: 65,
            wind_kmh: 12,
            condition: PartlyCloudy,
        },
        forecast: vec![
            day("Today", 35, 28, Sunny, 0),
            day("Tomorrow", 33, 26, PartlyCloudy, 0),
            day("Wed", 31, 24, Cloudy, 2),
            day("Thu", 29, 22, LightRain, 8),
            day("Fri", 30, 23, PartlyCloudy, 1),
        ],
    }
}

pub fn demo_market_prices() -> Vec<MarketPrice> {
    vec![
        MarketPrice::new("Wheat", 2150, 3.2, "Ludhiana Mandi", "2 hours ago"),
        MarketPrice::new("Rice (Basmati)", 4200, -1.5, "Amritsar Mandi", "1 hour ago"),
        MarketPrice::new("Cotton", 6800, 5.8, "Bathinda Mandi", "3 hours ago"),
        MarketPrice::new("Sugarcane", 380, 0.0, "Jalandhar Mandi", "4 hours ago"),
        MarketPrice::new("Maize", 1890, 2.1, "Patiala Mandi", "1 hour ago"),
        MarketPrice::new("Mustard", 5200, -2.3, "Ludhiana Mandi", "2 hours ago"),
    ]
}

/// Six months of prices (Jan to Jun) for the charted crops.
pub fn demo_price_history() -> Vec<PriceSeries> {
    const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
    let series = |crop: &str, prices: [u32; 6]| PriceSeries {
        crop: crop.to_string(),
        points: MONTHS
            .iter()
            .zip(prices)
            .map(|(month, price)| PricePoint {
                month: month.to_string(),
                price,
            })
            .collect(),
    };

    vec![
        series("Wheat", [2000, 2050, 2100, 2080, 2120, 2150]),
        series("Rice", [4000, 4100, 4200, 4150, 4250, 4200]),
        series("Cotton", [6200, 6300, 6500, 6400, 6600, 6800]),
        series("Sugarcane", [360, 365, 370, 375, 380, 380]),
    ]
}
