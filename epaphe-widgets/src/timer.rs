//! Panel-side timer widget

use epaphe_driver::{Clock, Panel, Transport};

use crate::capability::{Object, Touchable};
use crate::component::Component;

/// Shortest cycle the panel firmware accepts, in milliseconds.
const MIN_CYCLE_MS: u32 = 50;

/// A periodic trigger running on the panel itself. Its firings execute
/// panel-side event code; the host only configures it.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    component: Component,
}

impl Timer {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        Timer {
            component: Component::new(page, id, name),
        }
    }

    /// Cycle time in milliseconds.
    pub fn cycle(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<u32> {
        panel.get_number_property(self.component.name(), "tim")
    }

    /// Set the cycle time. Values below the panel's 50 ms floor are
    /// rejected without touching the link.
    pub fn set_cycle(&self, panel: &mut Panel<impl Transport, impl Clock>, cycle_ms: u32) -> bool {
        if cycle_ms < MIN_CYCLE_MS {
            return false;
        }
        panel.set_number_property(self.component.name(), "tim", cycle_ms)
    }

    pub fn enable(&self, panel: &mut Panel<impl Transport, impl Clock>) -> bool {
        panel.set_number_property(self.component.name(), "en", 1)
    }

    pub fn disable(&self, panel: &mut Panel<impl Transport, impl Clock>) -> bool {
        panel.set_number_property(self.component.name(), "en", 0)
    }
}

impl Object for Timer {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for Timer {}

#[cfg(test)]
mod tests {
    use super::*;
    use epaphe_driver::mock::{MockClock, MockPort};

    #[test]
    fn test_cycle_floor() {
        let mut panel = Panel::new(MockPort::new(), MockClock::stepping(100));
        let timer = Timer::new(0, 8, "tm0");

        assert!(!timer.set_cycle(&mut panel, 49));
        assert!(timer.set_cycle(&mut panel, 50));

        let (port, _) = panel.release();
        assert_eq!(port.sent(), b"tm0.tim=50\xFF\xFF\xFF");
    }

    #[test]
    fn test_enable_disable() {
        let mut panel = Panel::new(MockPort::new(), MockClock::stepping(100));
        let timer = Timer::new(0, 8, "tm0");

        assert!(timer.enable(&mut panel));
        assert!(timer.disable(&mut panel));

        let (port, _) = panel.release();
        assert_eq!(port.sent(), b"tm0.en=1\xFF\xFF\xFFtm0.en=0\xFF\xFF\xFF");
    }
}
