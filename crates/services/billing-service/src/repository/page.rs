//! Zero-based paging for list queries.

use domain::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Which slice of a collection to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub number: u64,
    /// Items per page, always in `1..=MAX_PAGE_SIZE`
    pub size: u64,
}

impl PageRequest {
    /// Build from optional client input. A missing or zero size falls back to
    /// the default, an oversized one is capped.
    pub fn new(number: Option<u64>, size: Option<u64>) -> Self {
        let size = match size {
            Some(0) | None => DEFAULT_PAGE_SIZE,
            Some(s) => s.min(MAX_PAGE_SIZE),
        };

        Self {
            number: number.unwrap_or(0),
            size,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results plus the totals needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            items,
            number: request.number,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size > 0 {
            self.total_elements.div_ceil(self.size)
        } else {
            0
        }
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
