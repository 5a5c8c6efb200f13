// history.rs

/// Append-only, chronological log of operation records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
    /// Owned copy of the log; later pushes never show up in it.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.clone()
    }
    /// The trailing `n` entries paired with their 1-based positions.
    pub fn last_n(&self, n: usize) -> impl Iterator<Item = (usize, &str)> {
        let start = self.entries.len().saturating_sub(n);
        self.iter().enumerate().skip(start).map(|(i, e)| (i + 1, e))
    }
}
