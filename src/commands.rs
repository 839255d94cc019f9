//! Built-in commands offered next to the tabs.
//!
//! Each one opens an internal browser page. How a url gets opened is up to
//! the embedder, which passes an `open_url` callback.

use std::sync::Arc;

use color_eyre::eyre::Result;

use crate::item::{CommandItem, ItemAction};

/// A built-in command, before it is bound to an opener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinCommand {
    /// Displayed and searchable name
    pub name: &'static str,
    /// Shortcut label, may be empty
    pub shortcut: &'static str,
    /// Page opened by the command
    pub url: &'static str,
}

/// Every built-in command, in display order
pub const BUILTIN_COMMANDS: [BuiltinCommand; 4] = [
    BuiltinCommand {
        name: "History",
        shortcut: "Ctrl+H",
        url: "chrome://history",
    },
    BuiltinCommand {
        name: "Downloads",
        shortcut: "Ctrl+J",
        url: "chrome://downloads",
    },
    BuiltinCommand {
        name: "Extensions",
        shortcut: "",
        url: "chrome://extensions",
    },
    BuiltinCommand {
        name: "Settings",
        shortcut: "",
        url: "chrome://settings",
    },
];

/// Binds every built-in command to `open_url`
pub fn builtin_commands<F>(open_url: F) -> Vec<CommandItem>
where
    F: Fn(&str) -> Result<()> + Send + Sync + 'static,
{
    let open_url = Arc::new(open_url);
    BUILTIN_COMMANDS
        .iter()
        .map(|cmd| {
            let open_url = open_url.clone();
            let url = cmd.url;
            CommandItem::new(cmd.name, cmd.shortcut, ItemAction::new(move || open_url(url)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn commands_open_their_page() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let opened_clone = opened.clone();
        let commands = builtin_commands(move |url| {
            opened_clone.lock().unwrap().push(url.to_string());
            Ok(())
        });

        let names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["History", "Downloads", "Extensions", "Settings"]);

        commands[1].action.call().unwrap();
        commands[3].action.call().unwrap();
        assert_eq!(*opened.lock().unwrap(), vec!["chrome://downloads", "chrome://settings"]);
    }
}
