use super::memory::PAGE_SIZE;

/// ## Machine options
///
/// Cell and address widths are fixed at 16 bits. What can be tuned is how
/// many pages a program may touch, how far `~` rotates, and whether the
/// output tape journals writes for streaming.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    max_pages: u32,
    rotate: u32,
    journal: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            max_pages: PAGE_SIZE as u32,
            rotate: 1,
            journal: false,
        }
    }
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    /// Pages `0..max_pages` are usable. Touching a cell on any other page
    /// faults. Values above 65536 are clamped.
    pub fn with_max_pages(mut self, max_pages: u32) -> Config {
        self.max_pages = max_pages.min(PAGE_SIZE as u32);
        self
    }

    /// Bits `~` rotates right by. Taken modulo 16.
    pub fn with_rotate(mut self, rotate: u32) -> Config {
        self.rotate = rotate % 16;
        self
    }

    pub fn with_journal(mut self, journal: bool) -> Config {
        self.journal = journal;
        self
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    pub fn rotate(&self) -> u32 {
        self.rotate
    }

    pub fn journal(&self) -> bool {
        self.journal
    }
}
