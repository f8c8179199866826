use colored::{ColoredString, Colorize};

use nandi_core::directory::{FarmerFilter, FarmerStatus, demo_farmers, filter_farmers};

pub fn run(search: Option<&str>, status: Option<FarmerStatus>) {
    let farmers = demo_farmers();
    let filter = FarmerFilter::new(search.unwrap_or_default(), status);
    let found = filter_farmers(&farmers, &filter);

    if found.is_empty() {
        println!("{}", "No farmers match the filter.".bright_black());
        return;
    }

    println!(
        "{}",
        format!(
            "{:<6} {:<16} {:<17} {:<22} {:>5}  {:<10} {}",
            "ID", "Name", "Phone", "Location", "Trust", "Status", "Last activity"
        )
        .bold()
    );
    for farmer in &found {
        println!(
            "{:<6} {:<16} {:<17} {:<22} {:>5}  {:<10} {}",
            farmer.id,
            farmer.name,
            farmer.phone,
            farmer.location,
            farmer.trust_score,
            status_label(farmer.status),
            farmer.last_activity.bright_black()
        );
    }
    println!("{}", format!("{} of {} farmers", found.len(), farmers.len()).bright_black());
}

fn status_label(status: FarmerStatus) -> ColoredString {
    let label = format!("{:<10}", status.to_string());
    match status {
        FarmerStatus::Active => label.green(),
        FarmerStatus::Inactive => label.yellow(),
        FarmerStatus::Suspended => label.red(),
    }
}
