use serde_json::Value;

/// Maximum number of identifiers the browsing history retains
pub const HISTORY_CAPACITY: usize = 10;

/// Most-recent-first record of viewed item identifiers.
///
/// Holds at most [`HISTORY_CAPACITY`] entries and never the same identifier
/// twice. Identifiers are opaque: whether they resolve in the catalog is the
/// selector's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowsingHistory {
    ids: Vec<String>,
}

impl BrowsingHistory {
    /// Creates an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from ids ordered most-recent-first.
    ///
    /// Later duplicates are dropped and the tail past capacity is cut off.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::new();
        for id in ids {
            let id = id.into();
            if history.ids.len() == HISTORY_CAPACITY {
                break;
            }
            if !history.contains(&id) {
                history.ids.push(id);
            }
        }
        history
    }

    /// Moves `id` to the front, evicting the oldest entries past capacity
    pub fn record(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
        self.ids.insert(0, id.to_string());
        self.ids.truncate(HISTORY_CAPACITY);
    }

    /// The most recently viewed identifier
    pub fn most_recent(&self) -> Option<&str> {
        self.ids.first().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Persisted form: a JSON array of strings, most-recent-first
    pub fn to_json(&self) -> String {
        Value::from(self.ids.clone()).to_string()
    }

    /// Parses the persisted form.
    ///
    /// Returns `None` for anything other than a JSON array whose elements are
    /// all strings.
    pub fn from_json(payload: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(payload).ok()?;
        let elements = value.as_array()?;
        let ids = elements
            .iter()
            .map(|element| element.as_str().map(str::to_string))
            .collect::<Option<Vec<String>>>()?;
        Some(Self::from_ids(ids))
    }
}
