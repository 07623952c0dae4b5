//! Per-validator memoization of fetched code sets.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use super::source::EnumSource;

/// Caches the admissible-code set per endpoint for one validator instance.
///
/// Each endpoint is fetched from the source at most once, including when the
/// fetch comes back empty. Only the codes are kept; labels are dropped, and
/// empty codes are filtered out so they can never satisfy a membership
/// check.
#[derive(Debug)]
pub struct CodeSetCache<S> {
    source: S,
    sets: HashMap<String, Vec<String>>,
}

impl<S: EnumSource> CodeSetCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            sets: HashMap::new(),
        }
    }

    /// Returns the code set for `endpoint`, fetching it on first use.
    pub fn lookup(&mut self, endpoint: &str) -> &[String] {
        match self.sets.entry(endpoint.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let codes: Vec<String> = self
                    .source
                    .code_map(endpoint)
                    .into_iter()
                    .map(|(code, _label)| code)
                    .filter(|code| !code.is_empty())
                    .collect();
                debug!(endpoint, count = codes.len(), "fetched code set");
                entry.insert(codes)
            }
        }
    }
}
