use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use nandi_core::Language;
use nandi_core::quick_action::{builtin_quick_actions, find_quick_action};

/// Slash commands of the chat REPL with a short usage hint.
const SLASH_COMMANDS: [(&str, &str); 4] = [
    ("/actions", ""),
    ("/quick", " <id>"),
    ("/call", ""),
    ("/lang", " <language>"),
];

/// Completes slash commands, quick action ids and chat languages.
#[derive(Clone, Copy, Default)]
pub struct ChatHelper;

impl ChatHelper {
    /// Candidates for the text before the cursor, with the offset they replace from.
    fn candidates(&self, line: &str) -> (usize, Vec<Pair>) {
        let Some((command, arg)) = line.split_once(' ') else {
            if !line.starts_with('/') {
                return (0, Vec::new());
            }
            let pairs = SLASH_COMMANDS
                .iter()
                .filter(|(name, _)| name.starts_with(line))
                .map(|(name, usage)| Pair {
                    display: format!("{}{}", name, usage),
                    replacement: name.to_string(),
                })
                .collect();
            return (0, pairs);
        };

        let start = command.len() + 1;
        let pairs = match command {
            "/quick" => builtin_quick_actions()
                .iter()
                .filter(|action| action.id.starts_with(arg))
                .map(|action| Pair {
                    display: format!("{} {}", action.id, action.label),
                    replacement: action.id.clone(),
                })
                .collect(),
            "/lang" => {
                let typed = arg.to_lowercase();
                Language::CHAT
                    .iter()
                    .filter(|language| language.key().starts_with(&typed))
                    .map(|language| Pair {
                        display: format!("{} ({})", language.key(), language.native_label()),
                        replacement: language.key().to_string(),
                    })
                    .collect()
            }
            _ => Vec::new(),
        };
        (start, pairs)
    }
}

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(&line[..pos]))
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Borrowed(line);
        }
        let (command, rest) = line.split_at(line.find(' ').unwrap_or(line.len()));
        let known = SLASH_COMMANDS.iter().any(|(name, _)| *name == command);
        let command = if known { command.bright_cyan() } else { command.red() };
        Owned(format!("{}{}", command, rest))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    /// Completes a unique command name, or names the quick action about to be sent.
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if let Some(id) = line.strip_prefix("/quick ") {
            return find_quick_action(id.trim()).map(|action| format!("  {}", action.label));
        }

        let (_, pairs) = self.candidates(line);
        match pairs.as_slice() {
            [only] if only.replacement.len() > line.len() && !line.contains(' ') => {
                Some(only.replacement[line.len()..].to_string())
            }
            _ => None,
        }
    }
}

impl Validator for ChatHelper {}
