//! Capped recent-capture list, most recent first.

use std::collections::VecDeque;

use inspect_style::ElementSnapshot;

pub const HISTORY_CAP: usize = 10;

#[derive(Clone, Debug, Default)]
pub struct History {
    items: VecDeque<ElementSnapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a capture, evicting the oldest entry past the cap.
    pub fn push(&mut self, snapshot: ElementSnapshot) {
        self.items.push_front(snapshot);
        self.items.truncate(HISTORY_CAP);
    }

    pub fn items(&self) -> impl Iterator<Item = &ElementSnapshot> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn snapshot(tag: &str) -> ElementSnapshot {
        ElementSnapshot {
            tag: tag.to_owned(),
            ..ElementSnapshot::default()
        }
    }

    #[test]
    fn newest_first_and_capped() {
        let mut history = History::new();
        for index in 0..12 {
            history.push(snapshot(&format!("tag{index}")));
        }
        assert_eq!(history.len(), HISTORY_CAP);
        let tags: Vec<&str> = history.items().map(|item| item.tag.as_str()).collect();
        assert_eq!(tags.first(), Some(&"tag11"));
        assert_eq!(tags.last(), Some(&"tag2"));
    }
}
