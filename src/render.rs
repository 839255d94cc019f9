//! Plain text rendering of displayed items.
//!
//! Emphasized pieces are wrapped in configurable markers. Each item takes one
//! line with tab separated columns, and the highlighted line is prefixed with
//! `> `.

use crate::AttributedString;
use crate::cursor::{CursorPosition, MultiListCursor};
use crate::item::DisplayedItem;

/// Strings wrapped around emphasized pieces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Inserted before an emphasized piece
    pub open: String,
    /// Inserted after an emphasized piece
    pub close: String,
}

impl Markers {
    /// Creates markers
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new("[", "]")
    }
}

/// Writes `s` with its emphasized pieces wrapped in `markers`
pub fn emphasize(s: &AttributedString, markers: &Markers) -> String {
    let mut res = String::with_capacity(s.text().len());
    for (piece, emphasized) in s.segments() {
        if emphasized {
            res.push_str(&markers.open);
            res.push_str(piece);
            res.push_str(&markers.close);
        } else {
            res.push_str(piece);
        }
    }
    res
}

/// One line for `item`: title and url for a tab, name and shortcut for a command
pub fn render_item(item: &DisplayedItem, markers: &Markers) -> String {
    match item {
        DisplayedItem::Tab(tab) => format!("{}\t{}", emphasize(&tab.title, markers), emphasize(&tab.url, markers)),
        DisplayedItem::Command(cmd) if cmd.shortcut.is_empty() => emphasize(&cmd.name, markers),
        DisplayedItem::Command(cmd) => format!("{}\t{}", emphasize(&cmd.name, markers), cmd.shortcut),
    }
}

/// Every item of every list in order, one line each, the highlighted one marked
pub fn render_lines(cursor: &MultiListCursor<DisplayedItem>, markers: &Markers) -> Vec<String> {
    let current = cursor.position();
    let mut lines = Vec::new();
    for list in 0..cursor.list_count() {
        for (index, item) in cursor.list(list).unwrap_or_default().iter().enumerate() {
            let prefix = if current == Some(CursorPosition::new(list, index)) {
                "> "
            } else {
                "  "
            };
            lines.push(format!("{prefix}{}", render_item(item, markers)));
        }
    }
    lines
}

/// [`render_lines`] joined with newlines
pub fn render_lists(cursor: &MultiListCursor<DisplayedItem>, markers: &Markers) -> String {
    render_lines(cursor, markers).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EmphasisSpan;
    use crate::commands::builtin_commands;
    use crate::controller::{Action, Controller};
    use crate::event::EventBus;
    use crate::item::{ItemAction, TabItem};

    fn controller() -> Controller {
        let tabs = vec![
            TabItem::new("Rust docs", "https://doc.rust-lang.org", None, ItemAction::noop()),
            TabItem::new("Crates", "https://crates.io", None, ItemAction::noop()),
            TabItem::new("Inbox", "https://mail.example.com", None, ItemAction::noop()),
        ];
        Controller::new(tabs, builtin_commands(|_| Ok(())), EventBus::new())
    }

    #[test]
    fn emphasize_wraps_spans() {
        let s = AttributedString::new("Travis", vec![EmphasisSpan::new(2, 5)]);
        assert_eq!(emphasize(&s, &Markers::default()), "Tr[avi]s");
        assert_eq!(emphasize(&s, &Markers::new("<b>", "</b>")), "Tr<b>avi</b>s");
        assert_eq!(emphasize(&AttributedString::plain("plain"), &Markers::default()), "plain");
    }

    #[test]
    fn renders_everything_for_empty_query() {
        let controller = controller();
        insta::assert_snapshot!(render_lists(controller.cursor(), &Markers::default()), @r"
        > Rust docs	https://doc.rust-lang.org
          Crates	https://crates.io
          Inbox	https://mail.example.com
          History	Ctrl+H
          Downloads	Ctrl+J
          Extensions
          Settings
        ");
    }

    #[test]
    fn renders_filtered_lists() {
        let mut controller = controller();
        controller.handle(Action::SetQuery("rust".into())).unwrap();
        insta::assert_snapshot!(render_lists(controller.cursor(), &Markers::default()), @"> [Rust] docs	https://doc.[rust]-lang.org");
    }

    #[test]
    fn highlight_follows_cursor_into_commands() {
        let mut controller = controller();
        controller.handle(Action::SetQuery("in".into())).unwrap();
        controller.handle(Action::Down).unwrap();
        insta::assert_snapshot!(render_lists(controller.cursor(), &Markers::default()), @r"
          [In]box	https://mail.example.com
        > Sett[in]gs
          Extensions
        ");
    }

    #[test]
    fn empty_renders_nothing() {
        let mut controller = controller();
        controller.handle(Action::SetQuery("qqq".into())).unwrap();
        assert_eq!(render_lists(controller.cursor(), &Markers::default()), "");
    }
}
