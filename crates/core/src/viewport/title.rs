/// Rotating index over a fixed number of hero titles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TitleCycle {
    index: usize,
    len: usize,
}

impl TitleCycle {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Step to the next title, wrapping at the end. Returns the new index.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }
}
