use crate::forms::TextField;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

/// Rows taken by one bordered input.
pub const FIELD_HEIGHT: u16 = 3;

const MASK: char = '•';

pub struct FieldView<'a> {
    pub label: &'a str,
    pub field: &'a TextField,
    pub placeholder: &'a str,
    pub focused: bool,
    pub masked: bool,
}

pub fn render(frame: &mut Frame, area: Rect, view: &FieldView) {
    if area.height < FIELD_HEIGHT {
        return;
    }
    let block = Block::default()
        .title(format!(" {} ", view.label))
        .title_style(if view.focused {
            Theme::title()
        } else {
            Theme::label()
        })
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if view.focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if view.field.is_empty() {
        if !view.focused {
            let hint = Paragraph::new(Span::styled(view.placeholder, Theme::placeholder()));
            frame.render_widget(hint, inner);
        } else if inner.width > 0 {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let display: String = if view.masked {
        std::iter::repeat(MASK).take(view.field.text.chars().count()).collect()
    } else {
        view.field.text.clone()
    };
    let (visible, cursor_col) =
        visible_window(&display, view.field.cursor_chars(), inner.width as usize);

    frame.render_widget(
        Paragraph::new(Span::styled(visible, Theme::input_text())),
        inner,
    );
    if view.focused && inner.width > 0 {
        let x = inner.x + (cursor_col as u16).min(inner.width - 1);
        frame.set_cursor_position((x, inner.y));
    }
}

/// The slice of `text` to draw in `width` columns so the cursor (a char
/// index) stays in view, and the cursor's column within it.
pub fn visible_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    if width == 0 {
        return (String::new(), 0);
    }

    // Drop leading chars until the cursor fits, leaving room for the caret.
    let mut start = 0;
    let mut col: usize = chars[..cursor].iter().map(|c| c.width().unwrap_or(0)).sum();
    while col >= width && start < cursor {
        col -= chars[start].width().unwrap_or(0);
        start += 1;
    }

    let mut used = 0;
    let visible: String = chars[start..]
        .iter()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect();
    (visible, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unscrolled() {
        assert_eq!(visible_window("hello", 5, 20), ("hello".to_string(), 5));
        assert_eq!(visible_window("hello", 2, 20), ("hello".to_string(), 2));
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        let (visible, col) = visible_window("abcdefghij", 10, 4);
        assert_eq!(visible, "hij");
        assert_eq!(col, 3);
    }

    #[test]
    fn test_wide_chars_counted_by_width() {
        let (visible, col) = visible_window("日本語", 3, 4);
        assert_eq!(visible, "語");
        assert_eq!(col, 2);
    }

    #[test]
    fn test_tail_truncated_to_width() {
        let (visible, col) = visible_window("abcdefghij", 0, 4);
        assert_eq!(visible, "abcd");
        assert_eq!(col, 0);
    }
}
