use std::cell::Cell;

/// Editable single-line input as seen by the keyboard converter.
///
/// Cursor positions are counted in chars. `set_text` is allowed to notify
/// the converter again synchronously, the way toolkit change signals do.
pub trait TextField {
    fn text(&self) -> String;
    fn cursor_position(&self) -> usize;
    fn set_text(&mut self, text: &str);
    fn set_cursor_position(&mut self, position: usize);
}

/// Scoped "suppress recursive notification" token.
///
/// Holding it marks the flag busy; dropping it clears the flag on every exit path.
pub struct ReentrancyGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> ReentrancyGuard<'a> {
    /// `None` while another guard on the same flag is alive
    pub fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }

        Some(Self { flag })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Live keyboard conversion for an input field
pub struct KeyboardInput<F> {
    convert: F,
    converting: Cell<bool>,
}

impl<F> KeyboardInput<F>
where
    F: Fn(&str) -> String,
{
    pub fn new(convert: F) -> Self {
        Self {
            convert,
            converting: Cell::new(false),
        }
    }

    pub fn is_converting(&self) -> bool {
        self.converting.get()
    }

    /// Change handler. Converts the whole field content and writes it back.
    ///
    /// Returns `true` when the field was rewritten. Notifications raised by
    /// that rewrite are ignored.
    pub fn on_text_changed(&self, field: &mut dyn TextField, text: &str) -> bool {
        let Some(_guard) = ReentrancyGuard::acquire(&self.converting) else {
            tracing::trace!("Ignoring change raised by our own update");
            return false;
        };

        let cursor = field.cursor_position();
        let converted = (self.convert)(text);

        if converted == text {
            return false;
        }

        field.set_text(&converted);
        field.set_cursor_position(adjust_cursor(cursor, text, &converted));

        true
    }
}

/// Keep the caret offset, clamping it when the conversion changed the length
pub fn adjust_cursor(cursor: usize, before: &str, after: &str) -> usize {
    let after_len = after.chars().count();

    if before.chars().count() != after_len {
        cursor.min(after_len)
    } else {
        cursor
    }
}
