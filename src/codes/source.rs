//! Enumeration providers backing the code-set endpoints.
//!
//! Validation rules name logical endpoints such as `codes/srodow`; an
//! [`EnumSource`] resolves an endpoint to its full code map. The bundled
//! [`StaticEnumSource`] serves maps registered up front, either
//! programmatically or from a JSON catalogue file.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::endpoints;

/// Errors from constructing a code catalogue.
#[derive(Debug, Error)]
pub enum CodesError {
    /// Catalogue file could not be read.
    #[error("failed to read code catalogue {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Catalogue document is not JSON of the expected shape.
    #[error("malformed code catalogue: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Resolves a logical endpoint to its ordered `(code, label)` pairs.
///
/// Unknown endpoints yield an empty map rather than an error; the rules
/// treat an empty map as "no admissible values".
pub trait EnumSource {
    fn code_map(&self, endpoint: &str) -> Vec<(String, String)>;
}

impl<S: EnumSource + ?Sized> EnumSource for &S {
    fn code_map(&self, endpoint: &str) -> Vec<(String, String)> {
        (**self).code_map(endpoint)
    }
}

/// In-memory enum source with registration-order code maps.
#[derive(Debug, Clone, Default)]
pub struct StaticEnumSource {
    maps: HashMap<String, Vec<(String, String)>>,
}

impl StaticEnumSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the code map for one endpoint.
    pub fn register<E, C, L>(&mut self, endpoint: E, entries: impl IntoIterator<Item = (C, L)>)
    where
        E: Into<String>,
        C: Into<String>,
        L: Into<String>,
    {
        self.maps.insert(
            endpoint.into(),
            entries
                .into_iter()
                .map(|(code, label)| (code.into(), label.into()))
                .collect(),
        );
    }

    /// Parses a catalogue document of the form
    /// `{"codes/srodow": [["Mon", "Monday"], ...], ...}`.
    pub fn from_json_str(text: &str) -> Result<Self, CodesError> {
        let maps: HashMap<String, Vec<(String, String)>> = serde_json::from_str(text)?;
        Ok(Self { maps })
    }

    /// Reads and parses a catalogue file.
    pub fn from_path(path: &Path) -> Result<Self, CodesError> {
        let text = fs::read_to_string(path).map_err(|source| CodesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalogue = Self::from_json_str(&text)?;
        debug!(
            path = %path.display(),
            endpoints = catalogue.maps.len(),
            "loaded code catalogue"
        );
        Ok(catalogue)
    }

    /// Catalogue of the standard scheduler endpoints. Deployments with
    /// customized code sets register their own maps instead.
    pub fn scheduler_defaults() -> Self {
        let mut source = Self::new();
        source.register(
            endpoints::FREQUENCY,
            [
                ("Hourly", "Hourly"),
                ("Daily", "Daily"),
                ("Weekly", "Weekly"),
                ("Bi-Monthly", "Bi-Monthly"),
                ("Monthly", "Monthly"),
                ("Quarterly", "Quarterly"),
                ("Semi-Annually", "Semi-Annually"),
                ("Yearly", "Yearly"),
            ],
        );
        source.register(
            endpoints::FREQUENCY_OPTION,
            [
                ("hour_of_day", "Hour of day"),
                ("weekdays_only", "Weekdays only"),
                ("day_of_week", "Day of week"),
                ("day_of_month", "Day of month"),
                ("week_of_month", "Week of month"),
                ("month_of_year", "Month of year"),
            ],
        );
        source.register(
            endpoints::HOUR_OF_DAY,
            (0..24).map(|hour| (hour.to_string(), format!("{hour}:00"))),
        );
        source.register(
            endpoints::DAY_OF_WEEK,
            [
                ("Mon", "Monday"),
                ("Tue", "Tuesday"),
                ("Wed", "Wednesday"),
                ("Thu", "Thursday"),
                ("Fri", "Friday"),
                ("Sat", "Saturday"),
                ("Sun", "Sunday"),
            ],
        );
        source.register(
            endpoints::WEEK_OF_MONTH,
            [
                ("1", "First"),
                ("2", "Second"),
                ("3", "Third"),
                ("4", "Fourth"),
                ("5", "Fifth"),
            ],
        );
        source.register(
            endpoints::MONTH_OF_YEAR,
            [
                ("Jan", "January"),
                ("Feb", "February"),
                ("Mar", "March"),
                ("Apr", "April"),
                ("May", "May"),
                ("Jun", "June"),
                ("Jul", "July"),
                ("Aug", "August"),
                ("Sep", "September"),
                ("Oct", "October"),
                ("Nov", "November"),
                ("Dec", "December"),
            ],
        );
        source
    }
}

impl EnumSource for StaticEnumSource {
    fn code_map(&self, endpoint: &str) -> Vec<(String, String)> {
        self.maps.get(endpoint).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_register_preserves_order() {
        let mut source = StaticEnumSource::new();
        source.register("codes/x", [("b", "B"), ("a", "A")]);
        let map = source.code_map("codes/x");
        assert_eq!(map[0].0, "b");
        assert_eq!(map[1].0, "a");
    }

    #[test]
    fn test_unknown_endpoint_is_empty() {
        let source = StaticEnumSource::new();
        assert!(source.code_map("codes/missing").is_empty());
    }

    #[test]
    fn test_from_json_str() {
        let source = StaticEnumSource::from_json_str(
            r#"{"codes/srodow": [["Mon", "Monday"], ["Tue", "Tuesday"]]}"#,
        )
        .unwrap();
        let map = source.code_map(endpoints::DAY_OF_WEEK);
        assert_eq!(map.len(), 2);
        assert_eq!(map[0], ("Mon".to_string(), "Monday".to_string()));
    }

    #[test]
    fn test_from_json_str_rejects_malformed() {
        let result = StaticEnumSource::from_json_str("{not json");
        assert!(matches!(result, Err(CodesError::Malformed(_))));
    }

    #[test]
    fn test_from_path_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalogue.json");
        fs::write(&path, r#"{"codes/srowom": [["1", "First"]]}"#).unwrap();

        let source = StaticEnumSource::from_path(&path).unwrap();
        assert_eq!(source.code_map(endpoints::WEEK_OF_MONTH).len(), 1);
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = StaticEnumSource::from_path(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(CodesError::Io { .. })));
    }

    #[test]
    fn test_scheduler_defaults_cover_the_standard_endpoints() {
        let source = StaticEnumSource::scheduler_defaults();
        assert_eq!(source.code_map(endpoints::FREQUENCY).len(), 8);
        assert_eq!(source.code_map(endpoints::FREQUENCY_OPTION).len(), 6);
        assert_eq!(source.code_map(endpoints::HOUR_OF_DAY).len(), 24);
        assert_eq!(source.code_map(endpoints::DAY_OF_WEEK).len(), 7);
        assert_eq!(source.code_map(endpoints::WEEK_OF_MONTH).len(), 5);
        assert_eq!(source.code_map(endpoints::MONTH_OF_YEAR).len(), 12);
    }

    #[test]
    fn test_shared_reference_is_a_source() {
        let source = StaticEnumSource::scheduler_defaults();
        let by_ref: &StaticEnumSource = &source;
        assert_eq!(by_ref.code_map(endpoints::DAY_OF_WEEK).len(), 7);
    }
}
