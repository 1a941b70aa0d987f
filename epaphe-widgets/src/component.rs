//! Component identity
//!
//! Each widget placed in the panel's design tool gets a page id, a
//! component id and a name. The name addresses properties in
//! instructions; the (page, id) pair identifies touch events.

/// Identity of one widget on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Component {
    page: u8,
    id: u8,
    name: &'static str,
}

impl Component {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        Component { page, id, name }
    }

    pub const fn page(&self) -> u8 {
        self.page
    }

    pub const fn id(&self) -> u8 {
        self.id
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}
