//! Chart data loading.
//!
//! The metrics feed is optional: a missing, unreadable, malformed, or empty
//! feed simply means the dashboard skips chart construction. Nothing here is
//! an error the user can observe.

use std::fs;
use std::path::Path;

use landlord_types::metrics::{self, PeriodRecord};
use tracing::warn;

/// Loaded metrics records, when a usable feed was found.
#[derive(Debug, Default)]
pub struct ChartState {
    records: Option<Vec<PeriodRecord>>,
}

impl ChartState {
    /// Reads and parses the feed at `path`. Every failure mode degrades to
    /// "no charts".
    pub fn load(path: Option<&Path>) -> Self {
        let records = path.and_then(|path| match fs::read_to_string(path) {
            Ok(raw) => match metrics::parse_feed(&raw) {
                Ok(records) if !records.is_empty() => Some(records),
                Ok(_) => None,
                Err(error) => {
                    warn!(path = %path.display(), error = %error, "Malformed metrics feed; skipping charts");
                    None
                }
            },
            Err(error) => {
                warn!(path = %path.display(), error = %error, "Unreadable metrics feed; skipping charts");
                None
            }
        });
        Self { records }
    }

    pub fn records(&self) -> Option<&[PeriodRecord]> {
        self.records.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn absent_path_means_no_charts() {
        assert!(ChartState::load(None).records().is_none());
    }

    #[test]
    fn missing_file_means_no_charts() {
        assert!(ChartState::load(Some(Path::new("/nonexistent/metrics.json"))).records().is_none());
    }

    #[test]
    fn malformed_feed_means_no_charts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(ChartState::load(Some(file.path())).records().is_none());
    }

    #[test]
    fn empty_feed_means_no_charts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        assert!(ChartState::load(Some(file.path())).records().is_none());
    }

    #[test]
    fn valid_feed_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"month": "Jan", "revenue": 1000.0, "expenses": 420.0, "occupancy": 92.0}}]"#
        )
        .unwrap();
        let state = ChartState::load(Some(file.path()));
        assert!(state.records().is_some());
        assert_eq!(state.records().unwrap()[0].month, "Jan");
    }
}
