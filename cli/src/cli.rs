//! Command-line definition for the `todo` binary.

use clap::{Parser, Subcommand};
use todo_core::{ItemId, ItemKind};

pub const DEFAULT_URL: &str = "http://localhost:3000";

/// Manage tasks and todos on a todo server.
#[derive(Parser, Debug)]
#[command(name = "todo", version, about)]
pub struct Cli {
    /// Base URL of the server
    #[arg(long, global = true, env = "TODO_API_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Collection to operate on: `tasks` or `todos`
    #[arg(long, global = true, default_value_t = ItemKind::Task)]
    pub kind: ItemKind,

    /// Log HTTP traffic to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List items, open ones first
    List,
    /// Show one item
    Show { id: ItemId },
    /// Add a new item
    Add {
        /// Title, at most 100 characters; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Mark an item as completed
    Done { id: ItemId },
    /// Mark an item as not completed
    Undo { id: ItemId },
    /// Change an item's title
    Rename {
        id: ItemId,
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Delete an item
    #[command(visible_alias = "delete")]
    Rm { id: ItemId },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_tasks_on_localhost() {
        let cli = Cli::try_parse_from(["todo", "list"]).unwrap();
        assert_eq!(cli.kind, ItemKind::Task);
        assert!(!cli.verbose);
        assert_eq!(cli.command, Command::List);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["todo", "done", "3", "--kind", "todos", "--url", "http://h:1"])
            .unwrap();
        assert_eq!(cli.kind, ItemKind::Todo);
        assert_eq!(cli.url, "http://h:1");
        assert_eq!(cli.command, Command::Done { id: 3 });
    }

    #[test]
    fn add_joins_words() {
        let cli = Cli::try_parse_from(["todo", "add", "Buy", "milk"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Add {
                title: vec!["Buy".to_string(), "milk".to_string()]
            }
        );
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["todo", "list", "--kind", "chores"]).is_err());
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["todo", "rm", "abc"]).is_err());
    }
}
