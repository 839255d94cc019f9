//! Items that can be searched, and their displayed counterparts.
//!
//! The surrounding system enumerates tabs and commands; the search pipeline
//! turns each into a displayed form where the searchable strings carry their
//! emphasis spans. Everything else passes through untouched.

use std::sync::Arc;

use color_eyre::eyre::Result;

use crate::AttributedString;

type ItemActionFn = dyn Fn() -> Result<()> + Send + Sync;

/// Opaque action attached to an item, run when the item is activated.
///
/// Cloning is cheap and clones compare equal, so displayed items built from
/// the same source item stay equal.
#[derive(Clone)]
pub struct ItemAction(Arc<ItemActionFn>);

impl std::fmt::Debug for ItemAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemAction").finish()
    }
}

impl PartialEq for ItemAction {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ItemAction {}

impl ItemAction {
    /// Create a new item action from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Result<()> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// An action that does nothing
    pub fn noop() -> Self {
        Self::new(|| Ok(()))
    }

    /// Run the action.
    pub fn call(&self) -> Result<()> {
        (self.0)()
    }
}

//------------------------------------------------------------------------------
// Source items

/// An open browser tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    /// Page title, searchable
    pub title: String,
    /// Page url, searchable
    pub url: String,
    /// Favicon reference, if the page has one
    pub favicon_url: Option<String>,
    /// Switches to the tab
    pub action: ItemAction,
}

impl TabItem {
    /// Creates a tab item
    pub fn new(title: impl Into<String>, url: impl Into<String>, favicon_url: Option<String>, action: ItemAction) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            favicon_url,
            action,
        }
    }
}

/// A built-in command such as opening the history page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    /// Command name, searchable
    pub name: String,
    /// Keyboard shortcut label, shown as is
    pub shortcut: String,
    /// Runs the command
    pub action: ItemAction,
}

impl CommandItem {
    /// Creates a command item
    pub fn new(name: impl Into<String>, shortcut: impl Into<String>, action: ItemAction) -> Self {
        Self {
            name: name.into(),
            shortcut: shortcut.into(),
            action,
        }
    }
}

//------------------------------------------------------------------------------
// Displayed items

/// A [`TabItem`] whose title and url carry emphasis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedTabItem {
    /// Emphasized title
    pub title: AttributedString,
    /// Emphasized url
    pub url: AttributedString,
    /// Favicon reference, unchanged
    pub favicon_url: Option<String>,
    /// Switches to the tab
    pub action: ItemAction,
}

/// A [`CommandItem`] whose name carries emphasis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedCommandItem {
    /// Emphasized name
    pub name: AttributedString,
    /// Shortcut label, unchanged
    pub shortcut: String,
    /// Runs the command
    pub action: ItemAction,
}

/// Any displayed item, so that tabs and commands can share one cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayedItem {
    /// A tab
    Tab(DisplayedTabItem),
    /// A command
    Command(DisplayedCommandItem),
}

impl DisplayedItem {
    /// The action run on activation
    pub fn action(&self) -> &ItemAction {
        match self {
            DisplayedItem::Tab(tab) => &tab.action,
            DisplayedItem::Command(cmd) => &cmd.action,
        }
    }

    /// Main label: the tab title or the command name
    pub fn label(&self) -> &AttributedString {
        match self {
            DisplayedItem::Tab(tab) => &tab.title,
            DisplayedItem::Command(cmd) => &cmd.name,
        }
    }
}

impl From<DisplayedTabItem> for DisplayedItem {
    fn from(item: DisplayedTabItem) -> Self {
        DisplayedItem::Tab(item)
    }
}

impl From<DisplayedCommandItem> for DisplayedItem {
    fn from(item: DisplayedCommandItem) -> Self {
        DisplayedItem::Command(item)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn action_runs_and_compares_by_identity() {
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();
        let action = ItemAction::new(move || {
            counter_clone.fetch_add(1, Ordering::Relaxed);
            Ok(())
        });

        action.call().unwrap();
        action.clone().call().unwrap();
        assert_eq!(counter.load(Ordering::Relaxed), 2);

        assert_eq!(action, action.clone());
        assert_ne!(action, ItemAction::noop());
    }

    #[test]
    fn action_error_propagates() {
        let action = ItemAction::new(|| Err(color_eyre::eyre::eyre!("tab is gone")));
        assert_eq!(action.call().unwrap_err().to_string(), "tab is gone");
    }

    #[test]
    fn displayed_item_accessors() {
        let action = ItemAction::noop();
        let item: DisplayedItem = DisplayedCommandItem {
            name: AttributedString::plain("History"),
            shortcut: "Ctrl+H".into(),
            action: action.clone(),
        }
        .into();
        assert_eq!(item.label().text(), "History");
        assert_eq!(item.action(), &action);
    }
}
