//! The navigable location the explorer mirrors its filters into.

/// A page location whose query string can be read and replaced in place.
///
/// `replace` overwrites the current entry instead of pushing a new one, so
/// repeated filter submissions never grow the navigation history.
pub trait Location {
    /// Current query string, without the leading `?`.
    fn query(&self) -> &str;

    /// Replaces the current location with `target`: either `?<query>` or `/`.
    fn replace(&mut self, target: &str);
}

/// In-memory location used by the CLI and tests.
///
/// Records how often it was replaced so callers can assert no history was
/// pushed and no navigation happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLocation {
    path: String,
    query: String,
    replacements: usize,
}

impl MemoryLocation {
    /// Parses `href` as a path with an optional `?query` part.
    #[must_use]
    pub fn new(href: &str) -> Self {
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        let path = if path.is_empty() { "/" } else { path };
        Self {
            path: path.to_owned(),
            query: query.to_owned(),
            replacements: 0,
        }
    }

    /// Path plus query, as it would appear in an address bar.
    #[must_use]
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }

    #[must_use]
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Location for MemoryLocation {
    fn query(&self) -> &str {
        &self.query
    }

    fn replace(&mut self, target: &str) {
        self.replacements += 1;
        match target.strip_prefix('?') {
            Some(query) => query.clone_into(&mut self.query),
            None => {
                self.path = target.to_owned();
                self.query.clear();
            }
        }
    }
}
