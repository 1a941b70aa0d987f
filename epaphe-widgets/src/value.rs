//! Numeric display and input widgets

use epaphe_driver::{Clock, Panel, Transport};

use crate::capability::{Colourable, FontStyleable, NumericValued, Object, Touchable};
use crate::component::Component;

/// A numeric read-out field.
#[derive(Debug, Clone, Copy)]
pub struct Number {
    component: Component,
}

impl Number {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        Number {
            component: Component::new(page, id, name),
        }
    }
}

impl Object for Number {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for Number {}
impl Colourable for Number {}
impl NumericValued for Number {}
impl FontStyleable for Number {}

/// A draggable slider with a bounded value range.
#[derive(Debug, Clone, Copy)]
pub struct Slider {
    component: Component,
}

impl Slider {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        Slider {
            component: Component::new(page, id, name),
        }
    }

    pub fn min_value(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<u32> {
        panel.get_number_property(self.component.name(), "minval")
    }

    pub fn set_min_value(&self, panel: &mut Panel<impl Transport, impl Clock>, value: u32) -> bool {
        panel.set_number_property(self.component.name(), "minval", value)
    }

    pub fn max_value(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<u32> {
        panel.get_number_property(self.component.name(), "maxval")
    }

    pub fn set_max_value(&self, panel: &mut Panel<impl Transport, impl Clock>, value: u32) -> bool {
        panel.set_number_property(self.component.name(), "maxval", value)
    }
}

impl Object for Slider {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for Slider {}
impl Colourable for Slider {}
impl NumericValued for Slider {}

/// A needle gauge (0-360 degrees).
#[derive(Debug, Clone, Copy)]
pub struct Gauge {
    component: Component,
}

impl Gauge {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        Gauge {
            component: Component::new(page, id, name),
        }
    }
}

impl Object for Gauge {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for Gauge {}
impl Colourable for Gauge {}
impl NumericValued for Gauge {}

/// A horizontal or vertical progress bar (0-100).
#[derive(Debug, Clone, Copy)]
pub struct ProgressBar {
    component: Component,
}

impl ProgressBar {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        ProgressBar {
            component: Component::new(page, id, name),
        }
    }
}

impl Object for ProgressBar {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for ProgressBar {}
impl Colourable for ProgressBar {}
impl NumericValued for ProgressBar {}

#[cfg(test)]
mod tests {
    use super::*;
    use epaphe_driver::mock::{MockClock, MockPort};

    #[test]
    fn test_slider_range() {
        let mut port = MockPort::new();
        port.queue_reply(&[0x71, 100, 0, 0, 0]);
        let mut panel = Panel::new(port, MockClock::stepping(100));

        let slider = Slider::new(1, 7, "h0");
        assert!(slider.set_min_value(&mut panel, 10));
        assert_eq!(slider.max_value(&mut panel), Some(100));

        let (port, _) = panel.release();
        assert_eq!(
            port.sent(),
            b"h0.minval=10\xFF\xFF\xFFget h0.maxval\xFF\xFF\xFF"
        );
    }

    #[test]
    fn test_progress_value() {
        let mut panel = Panel::new(MockPort::new(), MockClock::stepping(100));
        let bar = ProgressBar::new(0, 9, "j0");

        assert!(bar.set_value(&mut panel, 75));
        let (port, _) = panel.release();
        assert_eq!(port.sent(), b"j0.val=75\xFF\xFF\xFF");
    }
}
