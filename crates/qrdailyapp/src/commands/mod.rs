//! # Command Layer
//!
//! This module contains the **core business logic** of qrdaily. Each concern
//! lives in its own submodule as plain functions over a [`DataStore`] and,
//! where time matters, a [`Clock`].
//!
//! ## Fail-Soft Boundary
//!
//! The store reports every failure explicitly. Commands are where those
//! results are collapsed:
//! - **Read failures** become safe defaults (zero streak, empty lists, index 0,
//!   notifications off) and are logged with `tracing::warn!`.
//! - **Write failures** are logged and otherwise ignored; the caller still gets
//!   the value that was computed, even though it may not have been persisted.
//!
//! Callers therefore never see a storage error from a tracker or log
//! operation. Tests that need to tell "never stored" from "read failed" talk to
//! the store directly.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: No stdout, stderr, colours
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return values, let the caller decide
//!
//! ## Command Modules
//!
//! - [`streak`]: Streak state, solved archive, daily gating, marking solved
//! - [`puzzle`]: Current puzzle index and selection
//! - [`history`]: Bounded scan history log
//! - [`notifications`]: Reminder opt-in flag
//! - [`profile`]: Aggregate summary for the profile screen
//! - [`config`]: Manage configuration
//!
//! [`DataStore`]: crate::store::DataStore
//! [`Clock`]: crate::clock::Clock

use crate::config::QrDailyConfig;

pub mod config;
pub mod helpers;
pub mod history;
pub mod notifications;
pub mod profile;
pub mod puzzle;
pub mod streak;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub config: Option<QrDailyConfig>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_config(mut self, config: QrDailyConfig) -> Self {
        self.config = Some(config);
        self
    }
}
