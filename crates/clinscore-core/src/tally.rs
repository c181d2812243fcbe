use serde_json::{Map, Value};

/// Running total for a weighted-sum score that remembers each criterion's
/// contribution, so the breakdown always agrees with the total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    items: Vec<(&'static str, i64)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `points` for `criterion` unconditionally (may be zero or negative).
    pub fn add(&mut self, criterion: &'static str, points: i64) -> &mut Self {
        self.items.push((criterion, points));
        self
    }

    /// Record `points` when `present`, otherwise zero.
    pub fn flag(&mut self, criterion: &'static str, present: bool, points: i64) -> &mut Self {
        self.add(criterion, if present { points } else { 0 })
    }

    pub fn total(&self) -> i64 {
        self.items.iter().map(|(_, p)| p).sum()
    }

    pub fn points(&self, criterion: &str) -> Option<i64> {
        self.items
            .iter()
            .find(|(c, _)| *c == criterion)
            .map(|(_, p)| *p)
    }

    /// Highest single-criterion contribution.
    pub fn max_item(&self) -> Option<i64> {
        self.items.iter().map(|(_, p)| *p).max()
    }

    /// Number of criteria that contributed a non-zero amount.
    pub fn nonzero_count(&self) -> usize {
        self.items.iter().filter(|(_, p)| *p != 0).count()
    }

    /// `{ criterion: points }`.
    pub fn breakdown(&self) -> Value {
        let map: Map<String, Value> = self
            .items
            .iter()
            .map(|(c, p)| (c.to_string(), Value::from(*p)))
            .collect();
        Value::Object(map)
    }
}
