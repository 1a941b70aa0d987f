//! Buttons and touch areas

use epaphe_driver::{Clock, Panel, Transport};

use crate::capability::{
    BooleanValued, Colourable, FontStyleable, NumericValued, Object, StringValued, Touchable,
};
use crate::component::Component;

/// A momentary push button with a text caption.
#[derive(Debug, Clone, Copy)]
pub struct Button {
    component: Component,
}

impl Button {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        Button {
            component: Component::new(page, id, name),
        }
    }

    /// Id of the picture shown as the button face.
    pub fn picture_id(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<u16> {
        panel
            .get_number_property(self.component.name(), "pic")
            .map(|value| value as u16)
    }

    pub fn set_picture_id(&self, panel: &mut Panel<impl Transport, impl Clock>, id: u16) -> bool {
        panel.set_number_property(self.component.name(), "pic", id as u32)
    }
}

impl Object for Button {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for Button {}
impl Colourable for Button {}
impl StringValued for Button {}
impl FontStyleable for Button {}

/// A latching button that toggles between two states on each press.
#[derive(Debug, Clone, Copy)]
pub struct DualStateButton {
    component: Component,
}

impl DualStateButton {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        DualStateButton {
            component: Component::new(page, id, name),
        }
    }
}

impl Object for DualStateButton {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for DualStateButton {}
impl Colourable for DualStateButton {}
impl NumericValued for DualStateButton {}
impl BooleanValued for DualStateButton {}

/// An invisible touch-sensitive region.
#[derive(Debug, Clone, Copy)]
pub struct Hotspot {
    component: Component,
}

impl Hotspot {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        Hotspot {
            component: Component::new(page, id, name),
        }
    }
}

impl Object for Hotspot {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for Hotspot {}
