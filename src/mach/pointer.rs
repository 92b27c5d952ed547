/// ## Data pointer
///
/// Page and in-page offset of the current cell. All movement wraps:
/// `>` and `<` stay on the same page, `}` and `{` walk the page index.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pointer {
    pub page: u16,
    pub offset: u16,
}

impl Pointer {
    pub fn new(page: u16, offset: u16) -> Pointer {
        Pointer { page, offset }
    }

    pub fn right(&mut self) {
        self.offset = self.offset.wrapping_add(1);
    }

    pub fn left(&mut self) {
        self.offset = self.offset.wrapping_sub(1);
    }

    pub fn next_page(&mut self) {
        self.page = self.page.wrapping_add(1);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.wrapping_sub(1);
    }

    pub fn jump(&mut self, offset: u16) {
        self.offset = offset;
    }

    pub fn switch_page(&mut self, page: u16) {
        self.page = page;
    }
}

impl std::fmt::Display for Pointer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.page, self.offset)
    }
}
