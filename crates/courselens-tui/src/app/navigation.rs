//! Cursor over a button column.

/// Position in a list whose length changes between snapshots.
///
/// The index always stays within the list; an empty list pins it to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    pub fn index(&self) -> usize {
        self.index
    }

    fn last(&self) -> usize {
        self.len.saturating_sub(1)
    }

    /// Follow a change of list length, keeping the index if it still fits.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(self.last());
    }

    pub fn select(&mut self, index: usize) {
        self.index = index.min(self.last());
    }

    pub fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.select(self.index + 1);
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn end(&mut self) {
        self.index = self.last();
    }
}
