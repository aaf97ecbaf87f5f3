//! # qrdaily CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/qrdaily/src/cli/)                        │
//! │  - clap argument parsing (args.rs)                          │
//! │  - Context wiring + dispatch (mod.rs)                       │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  qrdailyapp (API → commands → store)                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each subcommand stands in for one screen of the mobile app: `puzzle` and
//! `solve` for the puzzle screen, `archive` for the archive, `profile` for the
//! profile, `scan` and `history` for the scanner's history list.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. The default level is `warn`;
//! `-v` raises it to `debug`, and `RUST_LOG` overrides both.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
