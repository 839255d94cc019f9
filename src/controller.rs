//! Glue between user input and the core.
//!
//! The [`Controller`] owns the full tab and command sets, re-filters them on
//! every query change and turns [`Action`]s into cursor moves or item
//! activations. Tabs live in list [`TAB_LIST`], commands in [`COMMAND_LIST`].
//!
//! Notification subscribers cannot borrow the controller while it is handling
//! an action. Those that want to react with another action send it through
//! [`Controller::sender`]; queued actions run once the current one is done.

use std::num::ParseIntError;
use std::sync::Arc;

use color_eyre::eyre::{Result, eyre};
use derive_more::{Debug, Eq, PartialEq};
use thiserror::Error;

use crate::cursor::MultiListCursor;
use crate::event::EventBus;
use crate::item::{CommandItem, DisplayedItem, TabItem};
use crate::search::{filter_command_items, filter_tab_items};

/// Cursor list holding the tabs
pub const TAB_LIST: usize = 0;
/// Cursor list holding the commands
pub const COMMAND_LIST: usize = 1;

type ActionCallbackFn = dyn Fn(&mut Controller) -> Result<Vec<Action>> + Send + Sync;

/// A custom action callback that receives a mutable reference to the controller.
///
/// The returned actions are handled right after the callback.
#[derive(Clone)]
pub struct ActionCallback(Arc<ActionCallbackFn>);

impl std::fmt::Debug for ActionCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionCallback").finish()
    }
}

impl ActionCallback {
    /// Create a new action callback from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Controller) -> Result<Vec<Action>> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    fn call(&self, controller: &mut Controller) -> Result<Vec<Action>> {
        (self.0)(controller)
    }
}

/// Things the user can do
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Action {
    /// Replace the query and re-filter
    SetQuery(String),
    /// Move the highlight down
    Down,
    /// Move the highlight up
    Up,
    /// Highlight `(list, item)`, as a pointer hovering it would
    Hover(usize, usize),
    /// Activate the highlighted item
    Accept,
    /// Highlight `(list, item)` and activate it
    Click(usize, usize),
    /// Custom action from lib
    #[debug("custom")]
    #[eq(skip)]
    #[partial_eq(skip)]
    #[serde(skip)]
    Custom(ActionCallback),
}

/// Error type for parsing actions from text
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ActionParseError {
    /// The action name is not known
    #[error("Unknown action `{0}`")]
    Unknown(String),
    /// The action takes no argument but got one
    #[error("Action `{0}` takes no argument")]
    UnexpectedArgument(String),
    /// The action needs `<list>:<item>`
    #[error("Action `{0}` expects `<list>:<item>`")]
    MissingCoordinates(String),
    /// A coordinate is not a number
    #[error("Error parsing {0}: {1:?}")]
    InvalidCoordinate(String, ParseIntError),
}

fn parse_coordinates(raw: &str, arg: Option<&str>) -> Result<(usize, usize), ActionParseError> {
    let (list, item) = arg
        .and_then(|arg| arg.split_once(':'))
        .ok_or_else(|| ActionParseError::MissingCoordinates(raw.to_string()))?;
    let parse = |value: &str| {
        value
            .parse::<usize>()
            .map_err(|e| ActionParseError::InvalidCoordinate(raw.to_string(), e))
    };
    Ok((parse(list)?, parse(item)?))
}

impl TryFrom<&str> for Action {
    type Error = ActionParseError;

    /// Parses `down`, `up`, `accept`, `query:<text>`, `hover:<list>:<item>`
    /// and `click:<list>:<item>`
    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        let (name, arg) = match raw.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (raw, None),
        };
        debug!("parse_action: action={name}, arg={arg:?}");

        let no_arg = |action: Action| match arg {
            None => Ok(action),
            Some(_) => Err(ActionParseError::UnexpectedArgument(raw.to_string())),
        };
        match name {
            "down" => no_arg(Action::Down),
            "up" => no_arg(Action::Up),
            "accept" => no_arg(Action::Accept),
            "query" => Ok(Action::SetQuery(arg.unwrap_or_default().to_string())),
            "hover" => parse_coordinates(raw, arg).map(|(list, item)| Action::Hover(list, item)),
            "click" => parse_coordinates(raw, arg).map(|(list, item)| Action::Click(list, item)),
            _ => Err(ActionParseError::Unknown(raw.to_string())),
        }
    }
}

/// Parses a comma separated chain of actions, e.g. `query:git,down,accept`
pub fn parse_action_chain(action_chain: &str) -> Result<Vec<Action>> {
    if action_chain.is_empty() {
        return Err(eyre!("Empty action chain"));
    }
    action_chain
        .split(',')
        .map(|raw| Action::try_from(raw).map_err(Into::into))
        .collect()
}

/// Owns the items, the query and the cursor.
///
/// A re-filter replaces the tab list and then the command list, so the bus
/// sees two `ListsChanged` and the highlight may be announced between them.
/// Renderers should redraw from [`Controller::cursor`] once `handle` returns
/// (e.g. after draining [`EventBus::channel`]) instead of tracking the
/// highlight from notifications alone.
#[derive(Debug)]
pub struct Controller {
    tabs: Vec<TabItem>,
    commands: Vec<CommandItem>,
    query: String,
    cursor: MultiListCursor<DisplayedItem>,
    activations: usize,
    #[debug(skip)]
    tx: kanal::Sender<Action>,
    #[debug(skip)]
    rx: kanal::Receiver<Action>,
}

impl Controller {
    /// Creates a controller showing every item, publishing on `bus`
    pub fn new(tabs: Vec<TabItem>, commands: Vec<CommandItem>, bus: EventBus) -> Self {
        let (tx, rx) = kanal::unbounded();
        let mut controller = Self {
            tabs,
            commands,
            query: String::new(),
            cursor: MultiListCursor::new(2, bus),
            activations: 0,
            tx,
            rx,
        };
        controller.refilter();
        controller
    }

    /// The current query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The cursor over the displayed tabs and commands
    pub fn cursor(&self) -> &MultiListCursor<DisplayedItem> {
        &self.cursor
    }

    /// The highlighted item, if anything is displayed
    pub fn highlighted(&self) -> Option<&DisplayedItem> {
        self.cursor.highlighted()
    }

    /// How many item actions have been run so far
    pub fn activations(&self) -> usize {
        self.activations
    }

    /// Sender for actions to run after the one being handled
    pub fn sender(&self) -> kanal::Sender<Action> {
        self.tx.clone()
    }

    /// Replaces the tab set, keeping the query
    pub fn set_tabs(&mut self, tabs: Vec<TabItem>) {
        self.tabs = tabs;
        self.refilter();
    }

    /// Handles `action`, then every action queued meanwhile.
    ///
    /// If any of them fails, the actions still queued are dropped.
    pub fn handle(&mut self, action: Action) -> Result<()> {
        let result = self.run(action);
        if result.is_err() {
            let mut dropped = 0;
            while let Ok(Some(_)) = self.rx.try_recv() {
                dropped += 1;
            }
            if dropped > 0 {
                debug!("dropped {dropped} queued actions after error");
            }
        }
        result
    }

    fn run(&mut self, action: Action) -> Result<()> {
        self.apply(action)?;
        while let Ok(Some(queued)) = self.rx.try_recv() {
            self.apply(queued)?;
        }
        Ok(())
    }

    fn apply(&mut self, action: Action) -> Result<()> {
        debug!("handle {action:?}");
        match action {
            Action::SetQuery(query) => {
                self.query = query;
                self.refilter();
            }
            Action::Down => self.cursor.move_next(),
            Action::Up => self.cursor.move_previous(),
            Action::Hover(list, item) => {
                self.cursor.set_highlight(list, item);
            }
            Action::Accept => self.accept()?,
            Action::Click(list, item) => {
                if self.cursor.set_highlight(list, item) {
                    self.accept()?;
                }
            }
            Action::Custom(callback) => {
                for follow_up in callback.call(self)? {
                    self.apply(follow_up)?;
                }
            }
        }
        Ok(())
    }

    fn refilter(&mut self) {
        let tabs = filter_tab_items(&self.tabs, &self.query);
        let commands = filter_command_items(&self.commands, &self.query);
        trace!("query {:?}: {} tabs, {} commands", self.query, tabs.len(), commands.len());
        self.cursor
            .replace_list(TAB_LIST, tabs.into_iter().map(DisplayedItem::from).collect());
        self.cursor
            .replace_list(COMMAND_LIST, commands.into_iter().map(DisplayedItem::from).collect());
    }

    fn accept(&mut self) -> Result<()> {
        match self.cursor.highlighted() {
            Some(item) => {
                debug!("accept {}", item.label());
                self.activations += 1;
                item.action().call()
            }
            None => {
                debug!("accept: nothing to activate");
                Ok(())
            }
        }
    }
}
