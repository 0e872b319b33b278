//! Pager state tracking

use crate::types::Since;

/// Where a retrieval currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    /// Requesting the page at `offset`
    Fetching {
        /// Offset of the page being requested
        offset: u32,
    },
    /// A page was decoded
    PageParsed {
        /// Raw entries listed on the page
        entries: usize,
    },
    /// No more data; success
    Exhausted,
    /// Aborted by an error
    Failed,
}

impl PagerState {
    /// Check if another page will be requested
    pub fn is_fetching(&self) -> bool {
        matches!(self, Self::Fetching { .. })
    }

    /// Check if the retrieval has ended, either way
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exhausted | Self::Failed)
    }
}

/// Per-call progress of one retrieval
#[derive(Debug, Clone)]
pub struct Progress {
    /// Current state
    pub state: PagerState,
    /// Offset of the next (or current) page
    pub offset: u32,
    /// Cursor sent with every page of this call
    pub requested_since: Since,
    /// Newest cursor reported so far
    pub since: Since,
    /// Pages decoded successfully
    pub pages: u32,
    /// Raw entries seen across pages
    pub entries: u64,
    /// Items kept by the projection
    pub kept: u64,
}

impl Progress {
    /// Start a retrieval at `since`
    pub fn new(since: Since, initial_offset: u32) -> Self {
        Self {
            state: PagerState::Fetching {
                offset: initial_offset,
            },
            offset: initial_offset,
            requested_since: since,
            since,
            pages: 0,
            entries: 0,
            kept: 0,
        }
    }

    /// Adopt a cursor if the page reported one
    pub fn observe_cursor(&mut self, since: Option<Since>) {
        if let Some(since) = since {
            self.since = since;
        }
    }

    /// Record a decoded page
    pub fn parsed(&mut self, entries: usize, kept: usize) {
        self.pages += 1;
        self.entries += entries as u64;
        self.kept += kept as u64;
        self.state = PagerState::PageParsed { entries };
    }

    /// Record a page carrying the completion signal
    pub fn complete(&mut self) {
        self.pages += 1;
        self.state = PagerState::Exhausted;
    }

    /// Move on after a parsed page: next offset, or done on an empty page.
    ///
    /// Returns `false` if the next offset does not fit.
    pub fn advance(&mut self, count: u32) -> bool {
        match self.state {
            PagerState::PageParsed { entries: 0 } => {
                self.state = PagerState::Exhausted;
                true
            }
            PagerState::PageParsed { .. } => match self.offset.checked_add(count) {
                Some(offset) => {
                    self.offset = offset;
                    self.state = PagerState::Fetching { offset };
                    true
                }
                None => false,
            },
            _ => true,
        }
    }

    /// Mark the retrieval as failed
    pub fn fail(&mut self) {
        self.state = PagerState::Failed;
    }
}
