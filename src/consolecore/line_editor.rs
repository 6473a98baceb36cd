//! `consolecore::line_editor` submodule implements [`LineEditor`] - bounded single-line text buffer
//! with explicit cursor.
//!

/// [`LineEditor`] struct stores edited line and cursor position.
///
/// Cursor is an index in `0..=len`; every operation keeps it in that range.
/// Buffer never grows beyond its maximum length, characters that do not fit are dropped.
///
/// # Example
/// ```rust
/// # use ggui::consolecore::line_editor::LineEditor;
/// let mut editor: LineEditor = LineEditor::new(128);
/// "helo".chars().for_each(|c| { let _ = editor.insert(c); });
/// let _ = editor.move_left();
/// let _ = editor.insert('l');
/// assert_eq!(editor.text(), "hello");
/// assert_eq!(editor.cursor(), 4);
/// ```
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineEditor {
    /// Characters of the line.
    ///
    buffer: Vec<char>,
    /// Cursor position.
    ///
    cursor: usize,
    /// Maximum number of characters.
    ///
    max_length: usize,
}
impl LineEditor {
    /// Creates empty editor that holds at most `max_length` characters.
    ///
    pub fn new(max_length: usize) -> Self {
        LineEditor {
            buffer: Vec::with_capacity(max_length),
            cursor: 0,
            max_length,
        }
    }

    /// Returns edited text.
    ///
    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }
    /// Returns characters of edited text.
    ///
    pub fn chars(&self) -> &[char] {
        &self.buffer
    }
    /// Returns number of characters.
    ///
    pub fn len(&self) -> usize {
        self.buffer.len()
    }
    /// Returns whether the line is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
    /// Returns whether no more characters can be inserted.
    ///
    pub fn is_full(&self) -> bool {
        self.buffer.len() >= self.max_length
    }
    /// Returns maximum number of characters.
    ///
    pub fn max_length(&self) -> usize {
        self.max_length
    }
    /// Returns cursor position.
    ///
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts printable character (code point above `0x1F`) at the cursor and moves cursor after it.
    ///
    /// Returns whether character was inserted.
    ///
    pub fn insert(&mut self, character: char) -> bool {
        if u32::from(character) <= 0x1F || self.is_full() {
            return false;
        }
        self.buffer.insert(self.cursor, character);
        self.cursor += 1;
        true
    }
    /// Deletes character before the cursor.
    ///
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let _ = self.buffer.remove(self.cursor);
        true
    }
    /// Deletes character at the cursor.
    ///
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.buffer.len() {
            return false;
        }
        let _ = self.buffer.remove(self.cursor);
        true
    }

    /// Moves cursor one character left.
    ///
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }
    /// Moves cursor one character right.
    ///
    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.buffer.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
    /// Moves cursor to the start of the line.
    ///
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }
    /// Moves cursor to the end of the line.
    ///
    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Clears the line.
    ///
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
    /// Replaces the line with `text` (truncated to maximum length) and moves cursor to its end.
    ///
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.chars().take(self.max_length).collect();
        self.cursor = self.buffer.len();
    }

    /// Returns text that should be displayed: `glyph` (if it is given) replaces
    /// the character at the cursor, or is appended if cursor is at the end.
    ///
    /// # Example
    /// ```rust
    /// # use ggui::consolecore::line_editor::LineEditor;
    /// let mut editor: LineEditor = LineEditor::new(8);
    /// editor.set_text("abc");
    /// assert_eq!(editor.display_text(Some('|')), "abc|");
    /// editor.move_home();
    /// assert_eq!(editor.display_text(Some('|')), "|bc");
    /// assert_eq!(editor.display_text(None), "abc");
    /// assert_eq!(editor.text(), "abc");
    /// ```
    ///
    pub fn display_text(&self, glyph: Option<char>) -> String {
        let mut displayed: Vec<char> = self.buffer.clone();
        if let Some(glyph) = glyph {
            match displayed.get_mut(self.cursor) {
                Some(character) => *character = glyph,
                None => displayed.push(glyph),
            }
        }
        displayed.into_iter().collect()
    }
}
