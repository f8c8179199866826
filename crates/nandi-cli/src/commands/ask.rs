use anyhow::Result;
use colored::Colorize;

use nandi_core::responder::ResponseResolver;

pub fn run(text: &str) -> Result<()> {
    let resolver = ResponseResolver::demo()?;
    tracing::debug!(topic = %resolver.resolve_topic(text), "resolved");

    for line in resolver.resolve(text).lines() {
        println!("{}", line.bright_blue());
    }
    Ok(())
}
