//! Static and scrolling text widgets

use epaphe_driver::{Clock, Panel, Transport};
use epaphe_protocol::types::ScrollDirection;

use crate::capability::{Colourable, FontStyleable, Object, StringValued, Touchable};
use crate::component::Component;

/// A static text label.
#[derive(Debug, Clone, Copy)]
pub struct Text {
    component: Component,
}

impl Text {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        Text {
            component: Component::new(page, id, name),
        }
    }
}

impl Object for Text {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for Text {}
impl Colourable for Text {}
impl StringValued for Text {}
impl FontStyleable for Text {}

/// A marquee label that scrolls its text across its bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SlidingText {
    component: Component,
}

impl SlidingText {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        SlidingText {
            component: Component::new(page, id, name),
        }
    }

    /// Start or stop the scroll animation.
    pub fn set_scrolling(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        scrolling: bool,
    ) -> bool {
        panel.set_number_property(self.component.name(), "en", scrolling as u32)
    }

    pub fn is_scrolling(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<bool> {
        panel
            .get_number_property(self.component.name(), "en")
            .map(|value| value != 0)
    }

    pub fn set_scroll_direction(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        direction: ScrollDirection,
    ) -> bool {
        panel.set_number_property(self.component.name(), "dir", direction as u32)
    }

    pub fn scroll_direction(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
    ) -> Option<ScrollDirection> {
        panel
            .get_number_property(self.component.name(), "dir")
            .and_then(ScrollDirection::from_value)
    }

    /// Pixels moved per animation step.
    pub fn set_scroll_distance(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        distance: u32,
    ) -> bool {
        panel.set_number_property(self.component.name(), "dis", distance)
    }

    pub fn scroll_distance(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<u32> {
        panel.get_number_property(self.component.name(), "dis")
    }

    /// Milliseconds between animation steps.
    pub fn set_scroll_delay(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        delay: u32,
    ) -> bool {
        panel.set_number_property(self.component.name(), "tim", delay)
    }

    pub fn scroll_delay(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<u32> {
        panel.get_number_property(self.component.name(), "tim")
    }
}

impl Object for SlidingText {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for SlidingText {}
impl Colourable for SlidingText {}
impl StringValued for SlidingText {}
impl FontStyleable for SlidingText {}
