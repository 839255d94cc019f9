//! Configuration options for gototab.
//!
//! This module provides the `GototabOptions` struct and builder. The binary
//! parses them from the command line, library users build them directly.

use derive_builder::Builder;

use crate::controller::Action;
use crate::render::Markers;

/// Turns `\t`, `\n`, `\r`, `\\` and `\xNN` escapes into the chars they name.
/// Unknown escapes are kept as written.
pub fn unescape_delimiter(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) if hex.len() == 2 => result.push(byte as char),
                    _ => {
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
            }
            Some('t') => result.push('\t'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

#[cfg(feature = "cli")]
fn parse_delimiter_value(s: &str) -> Result<String, String> {
    let unescaped = unescape_delimiter(s);
    if unescaped.is_empty() {
        Err(String::from("delimiter cannot be empty"))
    } else {
        Ok(unescaped)
    }
}

#[cfg(feature = "cli")]
fn parse_action_value(s: &str) -> Result<Action, crate::controller::ActionParseError> {
    Action::try_from(s)
}

/// gototab - fuzzy tab switcher
///
/// Reads `title<delimiter>url` lines from stdin, ranks them against the
/// query together with the built-in commands, and prints the result.
#[derive(Builder, Debug, Clone)]
#[builder(build_fn(name = "final_build"))]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "gototab", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct GototabOptions {
    //  --- Search ---
    /// Query to rank the tabs and commands against
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Search"))]
    pub filter: Option<String>,

    /// Separator between title and url on each input line
    ///
    /// Escape sequences like \x1f, \t are supported.
    #[cfg_attr(
        feature = "cli",
        arg(short, long, default_value = r"\t", value_parser = parse_delimiter_value, help_heading = "Search")
    )]
    pub delimiter: String,

    /// Do not list the built-in commands
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Search"))]
    pub no_commands: bool,

    //  --- Interface ---
    /// Comma-separated actions replayed after the query is set
    ///
    /// down, up, accept, query:<text>, hover:<list>:<item>, click:<list>:<item>
    /// Example: `gototab -f git --actions down,accept`
    #[cfg_attr(
        feature = "cli",
        arg(long, value_delimiter = ',', value_parser = parse_action_value, help_heading = "Interface", verbatim_doc_comment)
    )]
    pub actions: Vec<Action>,

    //  --- Display ---
    /// Inserted before each emphasized part of a title, url or command name
    #[cfg_attr(feature = "cli", arg(long, default_value = "[", help_heading = "Display"))]
    pub emphasis_open: String,

    /// Inserted after each emphasized part of a title, url or command name
    #[cfg_attr(feature = "cli", arg(long, default_value = "]", help_heading = "Display"))]
    pub emphasis_close: String,

    //  --- Output ---
    /// Only print the highlighted item instead of every list
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub select: bool,

    /// Print output delimited by ASCII NUL characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub print0: bool,
}

impl Default for GototabOptions {
    fn default() -> Self {
        Self {
            filter: None,
            delimiter: String::from("\t"),
            no_commands: false,
            actions: Vec::new(),
            emphasis_open: String::from("["),
            emphasis_close: String::from("]"),
            select: false,
            print0: false,
        }
    }
}

impl GototabOptionsBuilder {
    /// Builds the GototabOptions from the builder
    pub fn build(&mut self) -> Result<GototabOptions, GototabOptionsBuilderError> {
        self.final_build().map(|opts| opts.build())
    }
}

impl GototabOptions {
    /// Finalizes the options, restoring the default delimiter if it was cleared
    pub fn build(mut self) -> Self {
        if self.delimiter.is_empty() {
            self.delimiter = String::from("\t");
        }
        self
    }

    /// Markers wrapped around emphasized parts
    pub fn markers(&self) -> Markers {
        Markers::new(self.emphasis_open.as_str(), self.emphasis_close.as_str())
    }

    /// Ending written after each output line
    pub fn output_ending(&self) -> &'static str {
        if self.print0 { "\0" } else { "\n" }
    }

    /// The query, empty when none was given
    pub fn query(&self) -> &str {
        self.filter.as_deref().unwrap_or_default()
    }
}
