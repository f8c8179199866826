use colored::{ColoredString, Colorize};

use nandi_core::config::NandiConfig;
use nandi_core::trust::{
    MAX_TRUST_SCORE, TrustGrade, available_benefits, demo_benefits, demo_components,
    next_benefit, weighted_score,
};

pub fn run(config: &NandiConfig, score: u32, breakdown: bool) {
    let grade = config.trust.grade(score);
    println!(
        "Trust score: {}/{} ({})",
        score.to_string().bold(),
        MAX_TRUST_SCORE,
        paint(grade, &grade.to_string())
    );

    let benefits = demo_benefits();
    let unlocked = available_benefits(score, &benefits);
    println!();
    println!("{}", "Unlocked benefits:".bold());
    if unlocked.is_empty() {
        println!("  {}", "none yet".bright_black());
    }
    for benefit in unlocked {
        println!("  {} {} - {}", benefit.icon, benefit.title, benefit.description);
    }

    if let Some(next) = next_benefit(score, &benefits) {
        println!(
            "{}",
            format!(
                "Next: {} at {} ({} points to go)",
                next.title,
                next.required_score,
                next.required_score - score
            )
            .yellow()
        );
    }

    if breakdown {
        let components = demo_components();
        println!();
        println!("{}", "Score components:".bold());
        for c in &components {
            println!(
                "  {:<24} {:>4}/{:<4} weight {:>2}%  {}",
                c.name,
                c.score,
                c.max_score,
                c.weight,
                paint(c.status, &c.status.to_string())
            );
        }
        println!("  {:<24} {:>4}", "Weighted total", weighted_score(&components));
    }
}

fn paint(grade: TrustGrade, text: &str) -> ColoredString {
    match grade {
        TrustGrade::Excellent => text.bright_green(),
        TrustGrade::Good => text.green(),
        TrustGrade::Fair => text.yellow(),
        TrustGrade::Poor => text.red(),
    }
}
