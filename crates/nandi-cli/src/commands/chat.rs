use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use nandi_application::{ChatSession, PendingReply, VoiceCall};
use nandi_core::Language;
use nandi_core::config::NandiConfig;
use nandi_core::quick_action::builtin_quick_actions;
use nandi_core::responder::ResponseResolver;
use nandi_core::session::ChatMode;

use crate::helper::ChatHelper;

/// Ticks shown by `/call` before hanging up.
const DEMO_CALL_TICKS: u32 = 3;

pub async fn run(config: &NandiConfig, language: Option<Language>) -> Result<()> {
    let resolver = Arc::new(ResponseResolver::demo()?);
    let mut session = ChatSession::new(resolver, &config.chat)?;
    if let Some(language) = language {
        session.set_language(language)?;
    }

    let mut rl: Editor<ChatHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ChatHelper));

    println!("{}", "=== Nandi Assistant ===".bright_magenta().bold());
    println!(
        "{}",
        "Ask about weather, prices, loans or farming. '/actions' lists shortcuts, 'quit' exits."
            .bright_black()
    );
    println!();
    if let Some(greeting) = session.snapshot().await.last() {
        print_reply(greeting.text());
    }

    loop {
        let prompt = format!("[{}] >> ", session.language().code());
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Dhanyavaad! Goodbye!".bright_green());
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                if let Err(e) = handle_line(&mut session, config, trimmed).await {
                    eprintln!("{}", format!("Error: {}", e).red());
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    let transcript = session.snapshot().await;
    tracing::info!(session = %session.id(), turns = transcript.len(), "chat ended");
    Ok(())
}

async fn handle_line(session: &mut ChatSession, config: &NandiConfig, line: &str) -> Result<()> {
    let (command, arg) = match line.split_once(' ') {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    match command {
        "/actions" => {
            for action in builtin_quick_actions() {
                println!(
                    "  {} {} {}",
                    format!("[{}]", action.id).bright_cyan(),
                    action.icon,
                    action.label
                );
            }
        }
        "/quick" => {
            let pending = session.send_quick_action(arg).await?;
            println!("{}", format!("> {}", pending.user_turn().text()).green());
            await_reply(session, pending).await?;
        }
        "/lang" => {
            let language: Language = arg.parse()?;
            session.set_language(language)?;
            println!(
                "{}",
                format!("Language set to {} ({})", language.native_label(), language).bright_black()
            );
        }
        "/call" => demo_call(session, config).await?,
        _ => {
            if let Some(pending) = session.send(line).await {
                await_reply(session, pending).await?;
            }
        }
    }
    Ok(())
}

async fn await_reply(session: &ChatSession, pending: PendingReply) -> Result<()> {
    println!("{}", "Nandi is typing...".bright_black());
    let reply = pending.wait().await?;
    tracing::debug!(session = %session.id(), turn = %reply.id(), "reply received");
    print_reply(reply.text());
    Ok(())
}

async fn demo_call(session: &mut ChatSession, config: &NandiConfig) -> Result<()> {
    let mut call = VoiceCall::new(&config.call)?;
    session.set_mode(ChatMode::Voice);
    call.start();
    println!("{}", "📞 Connected to Nandi voice assistant".bright_green());

    let tick = config.call.tick_interval();
    for _ in 0..DEMO_CALL_TICKS {
        tokio::time::sleep(tick).await;
        println!("{}", format!("   {}", call.display()).bright_black());
    }

    let duration = call.display();
    call.end();
    session.set_mode(ChatMode::Sms);
    println!("{}", format!("📴 Call ended ({})", duration).bright_green());
    Ok(())
}

fn print_reply(text: &str) {
    for line in text.lines() {
        println!("{}", line.bright_blue());
    }
    println!();
}
