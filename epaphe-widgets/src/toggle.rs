//! Two-state selection widgets

use crate::capability::{BooleanValued, Colourable, NumericValued, Object, Touchable};
use crate::component::Component;

/// A checkbox.
#[derive(Debug, Clone, Copy)]
pub struct Checkbox {
    component: Component,
}

impl Checkbox {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        Checkbox {
            component: Component::new(page, id, name),
        }
    }
}

impl Object for Checkbox {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for Checkbox {}
impl Colourable for Checkbox {}
impl NumericValued for Checkbox {}
impl BooleanValued for Checkbox {}

/// A radio button; grouping is handled panel-side.
#[derive(Debug, Clone, Copy)]
pub struct RadioButton {
    component: Component,
}

impl RadioButton {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        RadioButton {
            component: Component::new(page, id, name),
        }
    }
}

impl Object for RadioButton {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for RadioButton {}
impl Colourable for RadioButton {}
impl NumericValued for RadioButton {}
impl BooleanValued for RadioButton {}
