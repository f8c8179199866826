//! Trust-score tiers, weighted components and unlockable benefits.
//!
//! Tier boundaries are data, not invariants: they come from
//! [`TrustThresholds`], which the configuration file may override.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Upper bound of every trust score.
pub const MAX_TRUST_SCORE: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TrustGrade {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Minimum score for each grade above `Poor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustThresholds {
    pub excellent: u32,
    pub good: u32,
    pub fair: u32,
}

impl Default for TrustThresholds {
    fn default() -> Self {
        Self {
            excellent: 850,
            good: 750,
            fair: 650,
        }
    }
}

impl TrustThresholds {
    pub fn grade(&self, score: u32) -> TrustGrade {
        if score >= self.excellent {
            TrustGrade::Excellent
        } else if score >= self.good {
            TrustGrade::Good
        } else if score >= self.fair {
            TrustGrade::Fair
        } else {
            TrustGrade::Poor
        }
    }

    /// Thresholds must be strictly descending from `excellent` to `fair`.
    pub fn is_ordered(&self) -> bool {
        self.excellent > self.good && self.good > self.fair
    }
}

/// One weighted part of the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComponent {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    /// Relative weight in percent.
    pub weight: u32,
    pub status: TrustGrade,
    pub description: String,
    #[serde(default)]
    pub improvement: Vec<String>,
}

/// Combines components into a 0..=1000 score, normalised by total weight.
///
/// Components with a zero `max_score` are ignored.
pub fn weighted_score(components: &[ScoreComponent]) -> u32 {
    let (sum, weights) = components
        .iter()
        .filter(|c| c.max_score > 0)
        .fold((0.0_f64, 0_u64), |(sum, weights), c| {
            let ratio = f64::from(c.score.min(c.max_score)) / f64::from(c.max_score);
            (sum + ratio * f64::from(c.weight), weights + u64::from(c.weight))
        });

    if weights == 0 {
        return 0;
    }
    (sum / weights as f64 * f64::from(MAX_TRUST_SCORE)).round() as u32
}

/// A product or discount unlocked at a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefit {
    pub title: String,
    pub description: String,
    pub required_score: u32,
    pub icon: String,
}

/// Benefits whose requirement `score` meets.
pub fn available_benefits(score: u32, benefits: &[Benefit]) -> Vec<&Benefit> {
    benefits
        .iter()
        .filter(|b| b.required_score <= score)
        .collect()
}

/// The locked benefit with the lowest requirement, if any.
pub fn next_benefit(score: u32, benefits: &[Benefit]) -> Option<&Benefit> {
    benefits
        .iter()
        .filter(|b| b.required_score > score)
        .min_by_key(|b| b.required_score)
}

/// Component breakdown shown on the trust dashboard.
pub fn demo_components() -> Vec<ScoreComponent> {
    vec![
        component(
            "Repayment History",
            85,
            35,
            TrustGrade::Excellent,
            "Your loan repayment track record",
            &["Maintain timely payments", "Pay before due dates when possible"],
        ),
        component(
            "Farm Productivity",
            78,
            25,
            TrustGrade::Good,
            "Crop yield and farming efficiency",
            &[
                "Increase crop yield per acre",
                "Diversify crop portfolio",
                "Use modern farming techniques",
            ],
        ),
        component(
            "Market Engagement",
            72,
            20,
            TrustGrade::Good,
            "Active participation in agricultural markets",
            &[
                "Sell more frequently in mandis",
                "Use digital payment methods",
                "Maintain sales records",
            ],
        ),
        component(
            "Financial Stability",
            68,
            15,
            TrustGrade::Fair,
            "Income consistency and savings",
            &[
                "Maintain steady income",
                "Build emergency savings",
                "Reduce debt-to-income ratio",
            ],
        ),
        component(
            "Technology Adoption",
            45,
            5,
            TrustGrade::Poor,
            "Use of digital tools and services",
            &[
                "Use mobile banking",
                "Adopt digital payment methods",
                "Use agricultural apps",
            ],
        ),
    ]
}

/// Benefit ladder shown on the trust dashboard.
pub fn demo_benefits() -> Vec<Benefit> {
    vec![
        benefit("Kisan Credit Card", "Up to ₹3 Lakh at 7% interest rate", 650, "💳"),
        benefit("Crop Insurance Discount", "15% discount on premium", 700, "🛡️"),
        benefit("Equipment Loan", "Up to ₹10 Lakh for farm equipment", 750, "🚜"),
        benefit("Premium Loan Rate", "5.5% interest rate (2% below market)", 800, "⭐"),
        benefit("Instant Loan Approval", "Get loans approved within 24 hours", 850, "⚡"),
        benefit("Gold Tier Benefits", "Priority support and exclusive offers", 900, "👑"),
    ]
}

fn component(
    name: &str,
    score: u32,
    weight: u32,
    status: TrustGrade,
    description: &str,
    improvement: &[&str],
) -> ScoreComponent {
    ScoreComponent {
        name: name.to_string(),
        score,
        max_score: 100,
        weight,
        status,
        description: description.to_string(),
        improvement: improvement.iter().map(|s| s.to_string()).collect(),
    }
}

fn benefit(title: &str, description: &str, required_score: u32, icon: &str) -> Benefit {
    Benefit {
        title: title.to_string(),
        description: description.to_string(),
        required_score,
        icon: icon.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        let t = TrustThresholds::default();
        assert_eq!(t.grade(1000), TrustGrade::Excellent);
        assert_eq!(t.grade(850), TrustGrade::Excellent);
        assert_eq!(t.grade(849), TrustGrade::Good);
        assert_eq!(t.grade(750), TrustGrade::Good);
        assert_eq!(t.grade(650), TrustGrade::Fair);
        assert_eq!(t.grade(649), TrustGrade::Poor);
        assert_eq!(t.grade(0), TrustGrade::Poor);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = TrustThresholds {
            excellent: 800,
            good: 700,
            fair: 600,
        };
        assert!(t.is_ordered());
        assert_eq!(t.grade(820), TrustGrade::Excellent);
        assert_eq!(t.grade(600), TrustGrade::Fair);

        let broken = TrustThresholds {
            excellent: 600,
            good: 700,
            fair: 500,
        };
        assert!(!broken.is_ordered());
    }

    #[test]
    fn test_weighted_score() {
        // 0.85*35 + 0.78*25 + 0.72*20 + 0.68*15 + 0.45*5 = 76.1 of 100
        assert_eq!(weighted_score(&demo_components()), 761);
        assert_eq!(weighted_score(&[]), 0);
    }

    #[test]
    fn test_weighted_score_clamps_component() {
        let mut components = demo_components();
        components.truncate(1);
        components[0].score = 150;
        assert_eq!(weighted_score(&components), MAX_TRUST_SCORE);
    }

    #[test]
    fn test_weighted_score_with_huge_weights() {
        let mut components = demo_components();
        components.truncate(2);
        for component in &mut components {
            component.score = 50;
            component.max_score = 100;
            component.weight = u32::MAX;
        }
        assert_eq!(weighted_score(&components), 500);
    }

    #[test]
    fn test_benefits_for_score() {
        let benefits = demo_benefits();
        let titles: Vec<&str> = available_benefits(750, &benefits)
            .into_iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Kisan Credit Card", "Crop Insurance Discount", "Equipment Loan"]
        );
        assert_eq!(
            next_benefit(750, &benefits).map(|b| b.title.as_str()),
            Some("Premium Loan Rate")
        );
        assert!(next_benefit(900, &benefits).is_none());
    }

    #[test]
    fn test_grade_ordering() {
        assert!(TrustGrade::Excellent > TrustGrade::Good);
        assert_eq!(TrustGrade::Fair.to_string(), "fair");
    }
}
