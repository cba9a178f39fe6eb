//! Centralized configuration for a front-desk session.
//!
//! Goals:
//! - Single place for tunables instead of scattering env lookups.
//! - DeskConfig::from_env() reads FD_* environment variables.
//! - Fluent with_* setters for programmatic overrides (tests, embedding).
//!
//! The relational mirror is opt-in: with `mirror_path = None` every mirror
//! call is a no-op. A path that fails to open only downgrades the mirror to
//! disabled — it never fails the session.

use std::fmt;

#[derive(Clone, Debug)]
pub struct DeskConfig {
    /// Snapshot file name under the data root, fully rewritten at shutdown
    /// with the still-active rooms.
    /// Env: FD_SNAPSHOT_FILE (default "occupied_rooms.dat")
    pub snapshot_file: String,

    /// Append-only archive file name under the data root, accumulating
    /// checked-out rooms across runs.
    /// Env: FD_ARCHIVE_FILE (default "checked_out_rooms.dat")
    pub archive_file: String,

    /// Path of the relational mirror database; None disables the mirror.
    /// Env: FD_MIRROR_PATH (unset or empty => disabled)
    pub mirror_path: Option<String>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            snapshot_file: "occupied_rooms.dat".to_string(),
            archive_file: "checked_out_rooms.dat".to_string(),
            mirror_path: None,
        }
    }
}

impl DeskConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("FD_SNAPSHOT_FILE") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.snapshot_file = s.to_string();
            }
        }

        if let Ok(v) = std::env::var("FD_ARCHIVE_FILE") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.archive_file = s.to_string();
            }
        }

        if let Ok(v) = std::env::var("FD_MIRROR_PATH") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.mirror_path = Some(s.to_string());
            }
        }

        cfg
    }

    /// Fluent setters (builder-style) to override specific fields.

    pub fn with_snapshot_file<S: Into<String>>(mut self, name: S) -> Self {
        self.snapshot_file = name.into();
        self
    }

    pub fn with_archive_file<S: Into<String>>(mut self, name: S) -> Self {
        self.archive_file = name.into();
        self
    }

    pub fn with_mirror_path<S: Into<String>>(mut self, path: Option<S>) -> Self {
        self.mirror_path = path.map(Into::into);
        self
    }
}

impl fmt::Display for DeskConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DeskConfig {{ snapshot_file: {}, archive_file: {}, mirror_path: {} }}",
            self.snapshot_file,
            self.archive_file,
            self.mirror_path.as_deref().unwrap_or("<disabled>"),
        )
    }
}
