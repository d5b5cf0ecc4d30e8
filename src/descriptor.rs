//! Application and command descriptors consumed by the summary renderer.
//!
//! These are read-only inputs owned by the caller for the duration of one
//! render call. The renderer never mutates or retains them.

use serde::{Deserialize, Serialize};

/// A registered command: its invocable name and a one-line description.
///
/// Names may carry a namespace prefix separated by `:` (e.g. `db:migrate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    pub name: String,
    pub description: String,
}

impl CommandDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Namespace prefix: the substring before the first `:`, or the empty
    /// string when no separator is present. `a:b:c` has namespace `a`.
    pub fn namespace(&self) -> &str {
        match self.name.split_once(':') {
            Some((prefix, _)) => prefix,
            None => "",
        }
    }
}

/// An application as the summary screen sees it: name, version, and the
/// ordered list of registered commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDescriptor {
    pub name: String,
    pub version: String,
    pub commands: Vec<CommandDescriptor>,
}

impl ApplicationDescriptor {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            commands: Vec::new(),
        }
    }

    pub fn with_commands(mut self, commands: Vec<CommandDescriptor>) -> Self {
        self.commands = commands;
        self
    }

    /// Build a descriptor from a configured clap command: application name
    /// and version from the command metadata, one entry per visible
    /// subcommand using its `about` text. Subcommand registration order is
    /// preserved.
    pub fn from_clap(command: &clap::Command) -> Self {
        let commands = command
            .get_subcommands()
            .filter(|sub| !sub.is_hide_set())
            .map(|sub| {
                CommandDescriptor::new(
                    sub.get_name(),
                    sub.get_about().map(ToString::to_string).unwrap_or_default(),
                )
            })
            .collect();
        Self {
            name: command.get_name().to_string(),
            version: command.get_version().unwrap_or_default().to_string(),
            commands,
        }
    }
}
