//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! gototab types and traits with a single `use gototab::prelude::*;` statement.

pub use crate::commands::{BUILTIN_COMMANDS, builtin_commands};
pub use crate::controller::{Action, ActionCallback, COMMAND_LIST, TAB_LIST, parse_action_chain};
pub use crate::engine::exact::ExactLocator;
pub use crate::event::Subscription;
pub use crate::fuzzy_matcher::FuzzyMatcher;
pub use crate::fuzzy_matcher::greedy::GreedyMatcher;
pub use crate::item::{
    CommandItem, DisplayedCommandItem, DisplayedItem, DisplayedTabItem, ItemAction, TabItem,
};
pub use crate::options::GototabOptionsBuilder;
pub use crate::render::Markers;
pub use crate::search::{filter_command_items, filter_tab_items};
pub use crate::*;
pub use kanal::{Receiver, Sender};
