//! Core logic of the `json-dot` command-line tool.
//!
//! The binary reads a JSON document from stdin, parses its arguments into a
//! [`Command`] and prints whatever [`execute`] returns.

use json_arr_path::{forget, get, has, set, validate_path};
use serde_json::Value;
use tracing::debug;

use crate::error::ArrError;
use crate::query::query;
use crate::structure::{dot, undot};

pub const USAGE: &str = "\
usage: json-dot <command> [args...] < document.json

commands:
  get <path>           print the value at a dotted path
  has <path>...        print whether every path exists
  forget <path>...     remove paths and print the document
  set <path> <json>    assign a JSON value and print the document
  dot                  flatten to a mapping of dotted keys
  undot                expand a mapping of dotted keys
  query                encode as a URL query string";

/// One invocation of `json-dot`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Get(String),
    Has(Vec<String>),
    Forget(Vec<String>),
    Set { path: String, value: Value },
    Dot,
    Undot,
    Query,
}

impl Command {
    /// Parse command-line arguments, program name excluded.
    pub fn parse(args: &[String]) -> Result<Self, ArrError> {
        let Some((name, rest)) = args.split_first() else {
            return Err(ArrError::Usage(USAGE.to_string()));
        };

        let command = match (name.as_str(), rest) {
            ("get", [path]) => Command::Get(path.clone()),
            ("has", paths) if !paths.is_empty() => Command::Has(paths.to_vec()),
            ("forget", paths) if !paths.is_empty() => Command::Forget(paths.to_vec()),
            ("set", [path, raw]) => Command::Set {
                path: path.clone(),
                value: serde_json::from_str(raw)?,
            },
            ("dot", []) => Command::Dot,
            ("undot", []) => Command::Undot,
            ("query", []) => Command::Query,
            _ => return Err(ArrError::Usage(USAGE.to_string())),
        };

        for path in command.paths() {
            validate_path(path)?;
        }
        Ok(command)
    }

    fn paths(&self) -> Vec<&str> {
        match self {
            Command::Get(path) | Command::Set { path, .. } => vec![path.as_str()],
            Command::Has(paths) | Command::Forget(paths) => {
                paths.iter().map(String::as_str).collect()
            }
            Command::Dot | Command::Undot | Command::Query => Vec::new(),
        }
    }
}

/// Run a command against a JSON document.
pub fn execute(command: &Command, input: &str) -> Result<String, ArrError> {
    let mut doc: Value = serde_json::from_str(input)?;
    debug!(?command, "running json-dot");

    let output = match command {
        Command::Get(path) => {
            let found = get(&doc, Some(path.as_str()))
                .ok_or_else(|| ArrError::NotFound(path.clone()))?;
            serde_json::to_string_pretty(found)?
        }
        Command::Has(paths) => has(&doc, paths.as_slice()).to_string(),
        Command::Forget(paths) => {
            forget(&mut doc, paths.as_slice());
            serde_json::to_string_pretty(&doc)?
        }
        Command::Set { path, value } => {
            set(&mut doc, Some(path.as_str()), value.clone());
            serde_json::to_string_pretty(&doc)?
        }
        Command::Dot => serde_json::to_string_pretty(&dot(&doc, ""))?,
        Command::Undot => match &doc {
            Value::Object(flat) => serde_json::to_string_pretty(&undot(flat))?,
            _ => return Err(ArrError::Usage("undot expects a JSON object".to_string())),
        },
        Command::Query => query(&doc, None),
    };
    Ok(output)
}
