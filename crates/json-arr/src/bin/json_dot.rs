//! `json-dot` - query and edit a JSON document with dotted paths.
//!
//! Usage:
//!   json-dot get 'a.b.0' < doc.json
//!   json-dot set 'a.b' '{"c": 1}' < doc.json
//!
//! The document is read from stdin. Run without arguments for the command list.
//! Set `RUST_LOG=json_arr=debug` to see which paths were skipped.

use json_arr::json_cli::{execute, Command};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("json_arr=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match execute(&command, buf.trim()) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{output}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
