//! Form state: editable fields, per-field input normalization, and the
//! error/success/in-flight state shared by every screen that submits.

pub mod auth;
pub mod event;
pub mod image;
pub mod strength;
pub mod validate;

/// Normalization applied to a field's value on every edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTransform {
    None,
    Trim,
    TrimLowercase,
}

impl FieldTransform {
    pub fn apply(self, value: &str) -> String {
        match self {
            FieldTransform::None => value.to_string(),
            FieldTransform::Trim => value.trim().to_string(),
            FieldTransform::TrimLowercase => value.trim().to_lowercase(),
        }
    }
}

/// A single-line text field with a byte-offset cursor.
#[derive(Debug, Clone)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
    transform: FieldTransform,
}

impl TextField {
    pub fn new(transform: FieldTransform) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            transform,
        }
    }

    pub fn plain() -> Self {
        Self::new(FieldTransform::None)
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole value, running it through the field's transform.
    pub fn set(&mut self, value: &str) {
        self.text = self.transform.apply(value);
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.normalize();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
            self.normalize();
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
            self.normalize();
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
        self.normalize();
    }

    /// Number of chars before the cursor, for rendering.
    pub fn cursor_chars(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    // Transforms can shorten the text (trimming), so the cursor is clamped
    // back onto a char boundary afterwards.
    fn normalize(&mut self) {
        if self.transform == FieldTransform::None {
            return;
        }
        let before = self.text[..self.cursor].chars().count();
        let leading_trimmed = self.text.len() - self.text.trim_start().len();
        let leading_chars = self.text[..leading_trimmed].chars().count();
        self.text = self.transform.apply(&self.text);
        let target = before.saturating_sub(leading_chars);
        self.cursor = self
            .text
            .char_indices()
            .nth(target)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::plain()
    }
}

/// Outcome and in-flight state of a screen's submit affordance.
///
/// Only one message is visible at a time: setting an error clears the success
/// message and vice versa.
#[derive(Debug, Default, Clone)]
pub struct Submission {
    pub error: Option<String>,
    pub success: Option<String>,
    pub in_flight: bool,
}

impl Submission {
    /// Clear both messages and mark the submission as in flight.
    ///
    /// Returns `false` if another submission is still outstanding, in which
    /// case nothing changes.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.reset_messages();
        self.in_flight = true;
        true
    }

    pub fn reset_messages(&mut self) {
        self.error = None;
        self.success = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.in_flight = false;
        self.success = None;
        self.error = Some(message.into());
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.in_flight = false;
        self.error = None;
        self.success = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_field_editing() {
        let mut field = TextField::plain();
        for c in "hello".chars() {
            field.insert_char(c);
        }
        field.move_left();
        field.delete_back();
        assert_eq!(field.value(), "helo");
        field.move_home();
        field.delete_forward();
        assert_eq!(field.value(), "elo");
        field.move_end();
        field.insert_char(' ');
        field.insert_char('x');
        field.delete_word_back();
        assert_eq!(field.value(), "elo ");
    }

    #[test]
    fn test_trim_lowercase_applies_on_input() {
        let mut field = TextField::new(FieldTransform::TrimLowercase);
        for c in " USER@Example.COM ".chars() {
            field.insert_char(c);
        }
        assert_eq!(field.value(), "user@example.com");
        assert_eq!(field.cursor, field.value().len());
    }

    #[test]
    fn test_set_runs_transform() {
        let mut field = TextField::new(FieldTransform::Trim);
        field.set("  Secret1!  ");
        assert_eq!(field.value(), "Secret1!");
    }

    #[test]
    fn test_submission_refuses_second_begin() {
        let mut sub = Submission::default();
        assert!(sub.begin());
        assert!(!sub.begin());
        sub.fail("Login failed.");
        assert!(!sub.in_flight);
        assert!(sub.begin());
        assert!(sub.error.is_none());
    }

    #[test]
    fn test_submission_messages_are_exclusive() {
        let mut sub = Submission::default();
        sub.fail("bad");
        sub.succeed("ok");
        assert_eq!(sub.error, None);
        assert_eq!(sub.success.as_deref(), Some("ok"));
    }
}
