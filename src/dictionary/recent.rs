// Recently added pairs, newest first, for display next to the add form

use std::collections::VecDeque;

/// Default number of recent pairs kept
pub const DEFAULT_RECENT_LIMIT: usize = 15;

/// Bounded list of "source – target" display strings
#[derive(Debug, Clone)]
pub struct RecentList {
    items: VecDeque<String>,
    limit: usize,
}

impl Default for RecentList {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_LIMIT)
    }
}

impl RecentList {
    pub fn new(limit: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Record a successful insert, dropping the oldest item past the limit
    pub fn push(&mut self, source: &str, target: &str) {
        if self.limit == 0 {
            return;
        }
        self.items.push_front(format!("{} – {}", source, target));
        self.items.truncate(self.limit);
    }

    /// Items, newest first
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
#[path = "recent_test.rs"]
mod tests;
