//! # qrdaily Architecture
//!
//! qrdaily is the state behind a QR scanner app's **daily puzzle** and **scan
//! history** screens, as a UI-agnostic library. Scanning, QR rendering and
//! notification scheduling belong to the platform; this crate owns the
//! bookkeeping that sits between them and the screens.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the qrdaily CLI, or any other UI)                  │
//! │  - Parses input, renders output, owns terminal I/O          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning store, clock and catalog              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Streak rules, scan log bounding, fail-soft defaults      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore: typed values, explicit errors                 │
//! │  - StorageBackend: flat key-value (files or memory)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Source of Truth
//!
//! Nothing is cached between calls. Every operation reads the current values
//! from the store, computes, and writes back. Concurrent writers are not
//! coordinated; the last write wins.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests against
//!    `InMemoryStore` and `FixedClock`. Most tests live here.
//! 2. **Store** (`store/`): Encodings, absent-vs-corrupt, simulated failures;
//!    filesystem behavior in `tests/`.
//! 3. **API** (`api.rs`): Dispatch and the glue between answer checking,
//!    solving and scanning.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types
//! - [`catalog`]: Puzzle catalog
//! - [`clock`]: Time source abstraction
//! - [`scan`]: Scan payload classification
//! - [`config`]: Configuration management
//! - [`init`]: Production wiring
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod scan;
pub mod store;
