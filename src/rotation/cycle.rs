/// An append-only sequence with a wrapping cursor.
///
/// Each rotating value stream (frames, X offsets, Y offsets, surface
/// selector) is one `CyclicList`; the cursor advances once per tick and
/// wraps back to the start after the last element. An empty list simply
/// yields no value, it is not an error.
#[derive(Clone, Debug, Default)]
pub struct CyclicList<T> {
    items: Vec<T>,
    cursor: usize,
}

impl<T> CyclicList<T> {
    /// Create an empty list with the cursor at the start.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
        }
    }

    /// Append a value at the end. The cursor is untouched.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// The element under the cursor, or `None` when the list is empty.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    /// Move the cursor one step forward, wrapping modulo the length.
    /// No-op on an empty list.
    ///
    /// Only the tick routine advances cursors, once per completed tick, so
    /// the cursor is always in `[0, len)` for a non-empty list.
    pub fn advance(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.items.len();
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cursor position. Meaningful only for non-empty lists.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<T> Extend<T> for CyclicList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rotation/cycle.rs"]
mod tests;
