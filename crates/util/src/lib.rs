//! Persistence stores and small helpers shared across the console.

use std::path::PathBuf;

use dirs_next::home_dir;

pub mod nav_state;
pub mod session_state;

/// Expands a leading `~` or `~/` in the provided path to the user's home
/// directory. Paths without a tilde pass through unchanged.
pub fn expand_tilde(input: &str) -> PathBuf {
    let trimmed = input.trim();

    if trimmed == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }

    if let Some(rest) = trimmed.strip_prefix("~/") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }

    if let Some(rest) = trimmed.strip_prefix("~\\") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }

    PathBuf::from(trimmed)
}
