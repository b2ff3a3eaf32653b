use indexmap::IndexSet;

/// Collects surviving values, dropping repeats in first-seen order, and
/// hands them back sorted once the input is exhausted.
#[derive(Debug, Default, Clone)]
pub struct UniqueSorted {
    seen: IndexSet<String>,
}

impl UniqueSorted {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the value was already collected
    pub fn insert(&mut self, value: String) -> bool {
        self.seen.insert(value)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Values in the order they were first seen
    pub fn first_seen(&self) -> impl Iterator<Item = &str> {
        self.seen.iter().map(String::as_str)
    }

    pub fn into_sorted(self) -> Vec<String> {
        let mut values: Vec<String> = self.seen.into_iter().collect();
        values.sort();
        values
    }
}

impl FromIterator<String> for UniqueSorted {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        UniqueSorted {
            seen: iter.into_iter().collect(),
        }
    }
}
