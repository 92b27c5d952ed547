use std::collections::BTreeMap;

/// Cells per page. Offsets are `u16` so every offset is in range.
pub const PAGE_SIZE: usize = 0x10000;

/// ## One page of cells

#[derive(Clone, PartialEq, Eq)]
pub struct Page {
    cells: Box<[u16]>,
}

impl Page {
    fn new() -> Page {
        Page {
            cells: vec![0; PAGE_SIZE].into_boxed_slice(),
        }
    }

    pub fn get(&self, offset: u16) -> u16 {
        self.cells[usize::from(offset)]
    }

    fn set(&mut self, offset: u16, value: u16) {
        self.cells[usize::from(offset)] = value;
    }

    pub fn cells(&self) -> &[u16] {
        &self.cells
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.cells.iter().filter(|c| **c != 0).count();
        write!(f, "Page {{ {} nonzero cells }}", used)
    }
}

/// ## Paged data memory
///
/// Up to 65536 pages of 65536 cells. A page is only allocated the first
/// time something is written to it; reading an absent page yields zero
/// without allocating. Both operations are total.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    pages: BTreeMap<u16, Page>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    pub fn read(&self, page: u16, offset: u16) -> u16 {
        match self.pages.get(&page) {
            Some(p) => p.get(offset),
            None => 0,
        }
    }

    pub fn write(&mut self, page: u16, offset: u16, value: u16) {
        self.pages
            .entry(page)
            .or_insert_with(Page::new)
            .set(offset, value);
    }

    /// Number of materialized pages.
    pub fn pages(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, page: u16) -> Option<&Page> {
        self.pages.get(&page)
    }

    /// Indexes of materialized pages in ascending order.
    pub fn page_indexes(&self) -> impl Iterator<Item = u16> + '_ {
        self.pages.keys().copied()
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }
}
