//! A single highlight that moves across several lists as if they were one.
//!
//! The lists keep their own order and can be replaced independently. The
//! cursor is either positioned on an existing item or, when every list is
//! empty, nowhere at all. Every state change is announced on the
//! [`EventBus`] once the cursor is consistent again:
//!
//! - replacing a list publishes [`Notification::ListsChanged`] and moves the
//!   cursor back to the first item of the first non-empty list;
//! - a highlight change publishes [`Notification::ItemUnhighlighted`] for the
//!   previously announced position (if it still exists) followed by
//!   [`Notification::ItemHighlighted`] for the new one.
//!
//! Highlight notifications are deduplicated against the last announced
//! position, so renderers that toggle state incrementally never see the same
//! highlight twice in a row.

use crate::event::{EventBus, Notification};

/// Coordinates of an item: which list, and where in that list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CursorPosition {
    /// List index
    pub list: usize,
    /// Item index within the list
    pub item: usize,
}

impl CursorPosition {
    /// Creates a position
    pub fn new(list: usize, item: usize) -> Self {
        Self { list, item }
    }
}

/// Cursor over a fixed number of independently replaced lists
#[derive(Debug)]
pub struct MultiListCursor<T> {
    lists: Vec<Vec<T>>,
    position: Option<CursorPosition>,
    last_emitted: Option<CursorPosition>,
    bus: EventBus,
}

impl<T> MultiListCursor<T> {
    /// Creates a cursor over `list_count` empty lists, publishing on `bus`
    pub fn new(list_count: usize, bus: EventBus) -> Self {
        let mut lists = Vec::with_capacity(list_count);
        lists.resize_with(list_count, Vec::new);
        Self {
            lists,
            position: None,
            last_emitted: None,
            bus,
        }
    }

    /// The bus notifications are published on
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Number of lists, fixed at construction
    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Items of list `index`, if it exists
    pub fn list(&self, index: usize) -> Option<&[T]> {
        self.lists.get(index).map(Vec::as_slice)
    }

    /// Current position, `None` when every list is empty
    pub fn position(&self) -> Option<CursorPosition> {
        self.position
    }

    /// Whether every list is empty
    pub fn is_empty(&self) -> bool {
        self.position.is_none()
    }

    /// The highlighted item, `None` when every list is empty
    pub fn highlighted(&self) -> Option<&T> {
        self.position.and_then(|pos| self.get(pos))
    }

    /// Item at `pos`, if it exists
    pub fn get(&self, pos: CursorPosition) -> Option<&T> {
        self.lists.get(pos.list)?.get(pos.item)
    }

    fn is_valid(&self, pos: CursorPosition) -> bool {
        self.get(pos).is_some()
    }

    /// Replaces the contents of list `index` and resets the cursor to the
    /// first item of the first non-empty list.
    ///
    /// An index past the last list leaves everything untouched.
    pub fn replace_list(&mut self, index: usize, items: Vec<T>) {
        let Some(list) = self.lists.get_mut(index) else {
            debug!("replace_list: no list {index} among {}", self.lists.len());
            return;
        };
        *list = items;
        self.reset();
        self.bus.publish(Notification::ListsChanged);
        self.emit_highlight();
    }

    fn reset(&mut self) {
        self.position = self
            .lists
            .iter()
            .position(|list| !list.is_empty())
            .map(|list| CursorPosition::new(list, 0));
        trace!("cursor reset to {:?}", self.position);
    }

    /// Moves one item down, crossing into the next non-empty list at the end
    /// of the current one. Does nothing on the very last item.
    pub fn move_next(&mut self) {
        let Some(pos) = self.position else {
            return;
        };
        let next = if pos.item + 1 < self.lists[pos.list].len() {
            Some(CursorPosition::new(pos.list, pos.item + 1))
        } else {
            (pos.list + 1..self.lists.len())
                .find(|&list| !self.lists[list].is_empty())
                .map(|list| CursorPosition::new(list, 0))
        };
        self.move_to(next, "bottom");
    }

    /// Moves one item up, crossing into the last item of the previous
    /// non-empty list at the start of the current one. Does nothing on the
    /// very first item.
    pub fn move_previous(&mut self) {
        let Some(pos) = self.position else {
            return;
        };
        let previous = if pos.item > 0 {
            Some(CursorPosition::new(pos.list, pos.item - 1))
        } else {
            (0..pos.list)
                .rev()
                .find(|&list| !self.lists[list].is_empty())
                .map(|list| CursorPosition::new(list, self.lists[list].len() - 1))
        };
        self.move_to(previous, "top");
    }

    fn move_to(&mut self, target: Option<CursorPosition>, boundary: &str) {
        match target {
            Some(pos) => {
                self.position = Some(pos);
                self.emit_highlight();
            }
            None => trace!("already at the {boundary}"),
        }
    }

    /// Highlights `(list, item)` directly and returns whether it exists.
    /// Coordinates that do not point at an existing item are ignored.
    pub fn set_highlight(&mut self, list: usize, item: usize) -> bool {
        let pos = CursorPosition::new(list, item);
        if !self.is_valid(pos) {
            debug!("set_highlight: no item at {pos:?}");
            return false;
        }
        self.position = Some(pos);
        self.emit_highlight();
        true
    }

    fn emit_highlight(&mut self) {
        let Some(pos) = self.position else {
            self.last_emitted = None;
            return;
        };
        if self.last_emitted == Some(pos) {
            return;
        }

        let previous = self.last_emitted.replace(pos).filter(|&prev| self.is_valid(prev));
        if let Some(prev) = previous {
            self.bus.publish(Notification::ItemUnhighlighted {
                list: prev.list,
                item: prev.item,
            });
        }
        self.bus.publish(Notification::ItemHighlighted {
            list: pos.list,
            item: pos.item,
        });
    }
}
