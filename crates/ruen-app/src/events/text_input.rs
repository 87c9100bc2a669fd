use ruen_core::input::{KeyboardInput, TextField};
use ruen_lang_russian::translate;
use ruen_types::AppEvent;

pub const HELP: &str = "Commands: :history [N], :show N, :copy N, :quit";

/// Prompt line standing in for an edit box
struct LineField {
    text: String,
    cursor: usize,
}

impl LineField {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }
}

impl TextField for LineField {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_cursor_position(&mut self, position: usize) {
        self.cursor = position;
    }
}

/// Run a typed line through the keyboard converter
pub fn convert_line(text: &str) -> String {
    let input = KeyboardInput::new(translate);
    let mut field = LineField::new(text);

    if input.on_text_changed(&mut field, text) {
        tracing::debug!("Converted '{}' -> '{}'", text, field.text);
    }

    field.text()
}

const COMMANDS: &[&str] = &["q", "quit", "h", "history", "show", "copy"];

/// Map a prompt line to an event. `None` for a known command with bad arguments.
///
/// Only a known command name after `:` makes a command, anything else is a
/// word typed with Shift+; (`Ж`) and goes to conversion.
pub fn interpret(text: &str) -> Option<AppEvent> {
    let line = text.trim();

    let command = line
        .strip_prefix(':')
        .filter(|rest| rest.split_whitespace().next().is_some_and(|name| COMMANDS.contains(&name)));

    let Some(command) = command else {
        return Some(AppEvent::Lookup(convert_line(line)));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next()?;
    let arg = parts.next();

    if parts.next().is_some() {
        return None;
    }

    match (name, arg) {
        ("q" | "quit", None) => Some(AppEvent::Quit),
        ("history" | "h", None) => Some(AppEvent::ShowHistory { limit: None }),
        ("history" | "h", Some(n)) => n
            .parse()
            .ok()
            .map(|limit| AppEvent::ShowHistory { limit: Some(limit) }),
        ("show", Some(n)) => parse_index(n).map(AppEvent::ShowHistoryEntry),
        ("copy", Some(n)) => parse_index(n).map(AppEvent::ExportHistoryEntry),
        _ => None,
    }
}

fn parse_index(value: &str) -> Option<usize> {
    value.parse().ok().filter(|&n| n > 0)
}
