use std::slice;

use crate::{format::render, runtime::eval::evaluate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    input: String,
    result: String,
}

impl HistoryEntry {
    pub fn new(input: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            result: result.into(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn result(&self) -> &str {
        &self.result
    }
}

/// Append-only record of evaluations, oldest first.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Failed evaluations are recorded as well.
    pub fn record(&mut self, expression: &str, precision: usize) -> &HistoryEntry {
        let result = render(&evaluate(expression), precision);
        self.push(HistoryEntry::new(expression, result))
    }

    pub fn push(&mut self, entry: HistoryEntry) -> &HistoryEntry {
        log::trace!("history[{}] = {entry:?}", self.entries.len());
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
