//! Linear undo/redo history over full snapshots.

/// A linear stack of snapshots with a cursor pointing at the current one.
///
/// The first entry is the state the history was created with. Pushing while
/// the cursor is behind the newest entry discards the redo tail. Without a
/// limit every snapshot is kept, so any number of undos walks back to the
/// initial state.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: usize,
    limit: Option<usize>,
}

impl<T: Clone> History<T> {
    /// Create an unbounded history holding `initial` as its only entry.
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            limit: None,
        }
    }

    /// Create a history keeping at most `limit` entries (at least 1). Once
    /// full, the oldest entry is dropped and can no longer be undone to.
    pub fn bounded(initial: T, limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::new(initial)
        }
    }

    /// Record `state` after the cursor, dropping redo entries and, when over
    /// the limit, the oldest entry.
    pub fn push(&mut self, state: T) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);
        if let Some(limit) = self.limit.filter(|limit| self.entries.len() > *limit) {
            let overflow = self.entries.len() - limit;
            self.entries.drain(..overflow);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry and return it, or `None` at the earliest entry.
    pub fn undo(&mut self) -> Option<&T> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward one entry and return it, or `None` at the latest entry.
    pub fn redo(&mut self) -> Option<&T> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Forget everything and start over from `state`.
    pub fn reset(&mut self, state: T) {
        self.entries.clear();
        self.entries.push(state);
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo_walk() {
        let mut history = History::new(0);
        history.push(1);
        history.push(2);

        assert_eq!(history.undo(), Some(&1));
        assert_eq!(history.undo(), Some(&0));
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), Some(&1));
        assert_eq!(history.redo(), Some(&2));
        assert_eq!(history.redo(), None);
        assert_eq!(*history.current(), 2);
    }

    #[test]
    fn test_push_truncates_redo() {
        let mut history = History::new("a");
        history.push("b");
        history.push("c");
        history.undo();
        history.undo();
        history.push("d");

        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(history.undo(), Some(&"a"));
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::bounded(0, 3);
        for i in 1..=5 {
            history.push(i);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(*history.current(), 5);
        assert_eq!(history.undo(), Some(&4));
        assert_eq!(history.undo(), Some(&3));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn test_empty_history_boundaries() {
        let mut history = History::bounded((), 0);
        assert_eq!(history.limit(), Some(1));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_unbounded_keeps_every_entry() {
        let mut history = History::new(0);
        for i in 1..=500 {
            history.push(i);
        }
        assert_eq!(history.limit(), None);
        let mut steps = 0;
        while history.undo().is_some() {
            steps += 1;
        }
        assert_eq!(steps, 500);
        assert_eq!(*history.current(), 0);
    }

    #[test]
    fn test_reset() {
        let mut history = History::new(1);
        history.push(2);
        history.reset(9);
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(*history.current(), 9);
    }
}
