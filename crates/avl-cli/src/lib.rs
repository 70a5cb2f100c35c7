//! Command parsing and session state for the `avl-repl` shell.
//!
//! The shell is a thin collaborator around one [`AvlTree`]: it parses a
//! line into a [`Command`], lets [`Session::eval`] run it against the
//! tree and prints the reply. Parsing fails before any tree operation
//! runs, so a malformed key can never leave the tree half-mutated.

use std::num::ParseIntError;

use avl_forest::{AvlTree, Traversal};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing key for `{0}`")]
    MissingKey(&'static str),
    #[error("invalid key `{key}`: {source}")]
    InvalidKey { key: String, source: ParseIntError },
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// One parsed shell command. Keys are `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(i64),
    Delete(i64),
    Search(i64),
    InOrder,
    PreOrder,
    PostOrder,
    Height,
    Size,
    Empty,
    Print,
    Help,
    Quit,
}

fn parse_key(cmd: &'static str, arg: Option<&str>) -> Result<i64, CliError> {
    let raw = arg.ok_or(CliError::MissingKey(cmd))?;
    raw.parse().map_err(|source| CliError::InvalidKey {
        key: raw.to_string(),
        source,
    })
}

impl Command {
    /// Parses one input line. Command words are case-insensitive;
    /// anything after the expected arguments is rejected.
    pub fn parse(line: &str) -> Result<Self, CliError> {
        let mut words = line.split_whitespace();
        let word = words.next().ok_or(CliError::Empty)?;

        let cmd = match word.to_ascii_lowercase().as_str() {
            "insert" => Self::Insert(parse_key("insert", words.next())?),
            "delete" => Self::Delete(parse_key("delete", words.next())?),
            "search" => Self::Search(parse_key("search", words.next())?),
            "inorder" => Self::InOrder,
            "preorder" => Self::PreOrder,
            "postorder" => Self::PostOrder,
            "height" => Self::Height,
            "size" => Self::Size,
            "empty" => Self::Empty,
            "print" => Self::Print,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };

        match words.next() {
            Some(extra) => Err(CliError::UnexpectedArgument(extra.to_string())),
            None => Ok(cmd),
        }
    }
}

pub const HELP: &str = "\
commands:
  insert <k>     add key k
  delete <k>     remove key k
  search <k>     report whether k is present
  inorder        keys in ascending order
  preorder       parenthesized pre-order rendering
  postorder      keys in post-order
  height         tree height (0 when empty)
  size           number of keys
  empty          report whether the tree is empty
  print          node-level debug dump
  help           this text
  quit           leave the shell";

/// Holds the one tree instance for the process lifetime.
#[derive(Default)]
pub struct Session {
    tree: AvlTree<i64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> &AvlTree<i64> {
        &self.tree
    }

    fn join(&self, order: Traversal) -> String {
        let keys: Vec<String> = self.tree.traverse(order).map(|k| k.to_string()).collect();
        keys.join(" ")
    }

    /// Runs a command against the tree and produces the reply text.
    /// [`Command::Quit`] is the caller's concern and yields no reply.
    pub fn eval(&mut self, cmd: Command) -> String {
        match cmd {
            Command::Insert(k) => {
                if self.tree.insert(k) {
                    format!("inserted {k}")
                } else {
                    format!("duplicate key {k} ignored")
                }
            }
            Command::Delete(k) => {
                if self.tree.remove(&k) {
                    format!("deleted {k}")
                } else {
                    format!("key {k} not found")
                }
            }
            Command::Search(k) => {
                if self.tree.contains(&k) {
                    format!("found {k}")
                } else {
                    format!("key {k} not found")
                }
            }
            Command::InOrder => self.join(Traversal::InOrder),
            Command::PreOrder => self.tree.pre_order_string(),
            Command::PostOrder => self.join(Traversal::PostOrder),
            Command::Height => self.tree.height().to_string(),
            Command::Size => self.tree.len().to_string(),
            Command::Empty => self.tree.is_empty().to_string(),
            Command::Print => self.tree.print(),
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("insert 10"), Ok(Command::Insert(10)));
        assert_eq!(Command::parse("  DELETE -3 "), Ok(Command::Delete(-3)));
        assert_eq!(Command::parse("search 7"), Ok(Command::Search(7)));
        assert_eq!(Command::parse("inorder"), Ok(Command::InOrder));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(Command::parse(""), Err(CliError::Empty));
        assert_eq!(
            Command::parse("frobnicate"),
            Err(CliError::UnknownCommand("frobnicate".to_string()))
        );
        assert_eq!(
            Command::parse("insert"),
            Err(CliError::MissingKey("insert"))
        );
        assert!(matches!(
            Command::parse("insert ten"),
            Err(CliError::InvalidKey { .. })
        ));
        assert_eq!(
            Command::parse("height 4"),
            Err(CliError::UnexpectedArgument("4".to_string()))
        );
    }

    #[test]
    fn invalid_key_never_touches_the_tree() {
        let mut session = Session::new();
        session.eval(Command::Insert(1));
        assert!(Command::parse("insert 2x").is_err());
        assert_eq!(session.tree().len(), 1);
        session.tree().assert_valid().unwrap();
    }

    #[test]
    fn eval_mutations_and_queries() {
        let mut session = Session::new();
        assert_eq!(session.eval(Command::Insert(10)), "inserted 10");
        assert_eq!(session.eval(Command::Insert(10)), "duplicate key 10 ignored");
        assert_eq!(session.eval(Command::Insert(5)), "inserted 5");
        assert_eq!(session.eval(Command::Insert(20)), "inserted 20");

        assert_eq!(session.eval(Command::Search(5)), "found 5");
        assert_eq!(session.eval(Command::Search(6)), "key 6 not found");
        assert_eq!(session.eval(Command::InOrder), "5 10 20");
        assert_eq!(session.eval(Command::PreOrder), "(10 (5) (20))");
        assert_eq!(session.eval(Command::PostOrder), "5 20 10");
        assert_eq!(session.eval(Command::Height), "2");
        assert_eq!(session.eval(Command::Size), "3");
        assert_eq!(session.eval(Command::Empty), "false");

        assert_eq!(session.eval(Command::Delete(5)), "deleted 5");
        assert_eq!(session.eval(Command::Delete(5)), "key 5 not found");
        assert_eq!(session.eval(Command::Size), "2");
        session.tree().assert_valid().unwrap();
    }

    #[test]
    fn eval_on_empty_tree() {
        let mut session = Session::new();
        assert_eq!(session.eval(Command::InOrder), "");
        assert_eq!(session.eval(Command::PreOrder), "");
        assert_eq!(session.eval(Command::Height), "0");
        assert_eq!(session.eval(Command::Empty), "true");
        assert_eq!(session.eval(Command::Delete(1)), "key 1 not found");
    }
}
