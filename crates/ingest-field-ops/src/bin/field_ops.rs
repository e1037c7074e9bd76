//! `field-ops`: apply field operations to a JSON document.
//!
//! Usage:
//!   field-ops '<ops-array-json>'
//!
//! The document is read from stdin and must be a JSON object. The operations
//! are the first argument, e.g.
//! `[{"op": "rename", "field": "a", "target_field": "b"}]`.
//! Set `RUST_LOG=debug` to trace each operation on stderr.

use ingest_field_ops::cli::apply_field_ops;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let ops = match args.get(1) {
        Some(o) => o.clone(),
        None => {
            eprintln!("First argument must be a JSON array of field operations.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match apply_field_ops(buf.trim(), &ops) {
        Ok(result) => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{result}") {
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
