//! Picture widgets

use epaphe_driver::{Clock, Panel, Transport};

use crate::capability::{Object, Touchable};
use crate::component::Component;

/// A full-size pre-uploaded picture.
#[derive(Debug, Clone, Copy)]
pub struct Picture {
    component: Component,
}

impl Picture {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        Picture {
            component: Component::new(page, id, name),
        }
    }

    /// Id of the displayed picture.
    pub fn picture_id(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<u16> {
        panel
            .get_number_property(self.component.name(), "pic")
            .map(|value| value as u16)
    }

    pub fn set_picture_id(&self, panel: &mut Panel<impl Transport, impl Clock>, id: u16) -> bool {
        panel.set_number_property(self.component.name(), "pic", id as u32)
    }
}

impl Object for Picture {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for Picture {}

/// A widget showing a window into a larger background picture.
#[derive(Debug, Clone, Copy)]
pub struct Crop {
    component: Component,
}

impl Crop {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        Crop {
            component: Component::new(page, id, name),
        }
    }

    /// Id of the picture the window is cut from.
    pub fn picture_id(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<u16> {
        panel
            .get_number_property(self.component.name(), "pic")
            .map(|value| value as u16)
    }

    pub fn set_picture_id(&self, panel: &mut Panel<impl Transport, impl Clock>, id: u16) -> bool {
        panel.set_number_property(self.component.name(), "pic", id as u32)
    }
}

impl Object for Crop {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for Crop {}
