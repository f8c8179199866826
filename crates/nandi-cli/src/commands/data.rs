use colored::{ColoredString, Colorize};

use nandi_core::data::{
    PriceTrend, advisories, demo_market_prices, demo_price_history, demo_weather, filter_prices,
};
use nandi_core::responder::format_inr;

pub fn run(trend: Option<PriceTrend>, history: bool) {
    let weather = demo_weather();
    let current = &weather.current;
    println!("{}", format!("📍 {}", weather.location).bold());
    println!(
        "  {} {}°C {}  humidity {}%  wind {} km/h",
        current.condition.icon(),
        current.temperature_c,
        current.condition,
        current.humidity_pct,
        current.wind_kmh
    );

    println!();
    println!("{}", "5-day forecast:".bold());
    for day in &weather.forecast {
        let rain = format!("{} mm", day.rainfall_mm);
        println!(
            "  {:<9} {} {:>3}°/{:<3}° {:<14} {}",
            day.day,
            day.condition.icon(),
            day.high_c,
            day.low_c,
            day.condition.to_string(),
            if day.rainfall_mm > 0 { rain.bright_blue() } else { rain.bright_black() }
        );
    }

    let prices = demo_market_prices();
    println!();
    println!("{}", "Mandi prices:".bold());
    let shown = filter_prices(&prices, trend);
    if shown.is_empty() {
        println!("  {}", "no matching quotes".bright_black());
    }
    for price in shown {
        println!(
            "  {:<16} ₹{:>7} {}  {}  {:<16} {}",
            price.crop,
            format_inr(u64::from(price.price)),
            price.unit.bright_black(),
            paint(
                price.trend,
                &format!("{} {:+.1}%", price.trend.arrow(), price.change)
            ),
            price.market,
            price.last_updated.bright_black()
        );
    }

    if history {
        println!();
        println!("{}", "Price trends (6 months):".bold());
        for series in demo_price_history() {
            let points: Vec<String> = series.points.iter().map(|p| p.price.to_string()).collect();
            let change = series.change_percent().unwrap_or_default();
            println!(
                "  {:<10} {}  {}",
                series.crop,
                points.join(" → "),
                paint(PriceTrend::from_change(change), &format!("{:+.1}%", change))
            );
        }
    }

    println!();
    println!("{}", "Recommendations:".bold());
    for advice in advisories(&weather, &prices) {
        println!("  {} {}", advice.icon, advice.title.bold());
        println!("    {}", advice.text);
    }
}

fn paint(trend: PriceTrend, text: &str) -> ColoredString {
    match trend {
        PriceTrend::Up => text.green(),
        PriceTrend::Down => text.red(),
        PriceTrend::Stable => text.bright_black(),
    }
}
