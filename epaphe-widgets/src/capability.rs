//! Widget capability traits
//!
//! The panel's widget types share orthogonal behaviours: colours, fonts,
//! a numeric or string value, touchability. Each behaviour is a trait
//! with default methods over the widget's [`Component`] identity, and a
//! concrete widget opts into exactly the set its panel-side counterpart
//! supports. There is no base-class hierarchy and no implicit
//! registration anywhere.

use epaphe_driver::{Clock, Panel, TouchEvent, TouchListener, Transport};
use epaphe_protocol::types::{Alignment, Colour};

use crate::component::Component;

/// Root capability: anything addressable on the panel.
pub trait Object {
    /// The widget's identity.
    fn component(&self) -> &Component;

    /// Show or hide the widget (`vis`). Hidden widgets reappear on the
    /// next page refresh only if shown again.
    fn set_visible(&self, panel: &mut Panel<impl Transport, impl Clock>, visible: bool) -> bool {
        panel.set_property_command("vis", self.component().name(), visible as u32)
    }

    /// Enable or disable touch processing for the widget (`tsw`).
    fn set_touch_enabled(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        enabled: bool,
    ) -> bool {
        panel.set_property_command("tsw", self.component().name(), enabled as u32)
    }
}

/// Widgets with configurable foreground and background colours.
pub trait Colourable: Object {
    fn foreground_colour(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<Colour> {
        self.colour(panel, "pco")
    }

    fn set_foreground_colour(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        colour: Colour,
        refresh: bool,
    ) -> bool {
        self.set_colour(panel, "pco", colour, refresh)
    }

    /// Foreground colour while a touch is active.
    fn event_foreground_colour(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
    ) -> Option<Colour> {
        self.colour(panel, "pco2")
    }

    fn set_event_foreground_colour(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        colour: Colour,
        refresh: bool,
    ) -> bool {
        self.set_colour(panel, "pco2", colour, refresh)
    }

    fn background_colour(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<Colour> {
        self.colour(panel, "bco")
    }

    fn set_background_colour(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        colour: Colour,
        refresh: bool,
    ) -> bool {
        self.set_colour(panel, "bco", colour, refresh)
    }

    /// Background colour while a touch is active.
    fn event_background_colour(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
    ) -> Option<Colour> {
        self.colour(panel, "bco2")
    }

    fn set_event_background_colour(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        colour: Colour,
        refresh: bool,
    ) -> bool {
        self.set_colour(panel, "bco2", colour, refresh)
    }

    /// Read a colour property by name.
    fn colour(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        property: &str,
    ) -> Option<Colour> {
        panel
            .get_number_property(self.component().name(), property)
            .map(|value| Colour::new(value as u16))
    }

    /// Write a colour property by name, optionally redrawing the widget
    /// so the change becomes visible immediately.
    fn set_colour(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        property: &str,
        colour: Colour,
        refresh: bool,
    ) -> bool {
        let name = self.component().name();
        if !panel.set_number_property(name, property, colour.value() as u32) {
            return false;
        }
        if refresh {
            panel.refresh_component(name)
        } else {
            true
        }
    }
}

/// Widgets that render text in a selectable font.
pub trait FontStyleable: Object {
    fn font(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<u8> {
        panel
            .get_number_property(self.component().name(), "font")
            .map(|value| value as u8)
    }

    fn set_font(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        id: u8,
        refresh: bool,
    ) -> bool {
        let name = self.component().name();
        if !panel.set_number_property(name, "font", id as u32) {
            return false;
        }
        if refresh {
            panel.refresh_component(name)
        } else {
            true
        }
    }

    fn horizontal_alignment(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
    ) -> Option<Alignment> {
        panel
            .get_number_property(self.component().name(), "xcen")
            .and_then(Alignment::from_value)
    }

    fn set_horizontal_alignment(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        alignment: Alignment,
    ) -> bool {
        panel.set_number_property(self.component().name(), "xcen", alignment as u32)
    }

    fn vertical_alignment(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
    ) -> Option<Alignment> {
        panel
            .get_number_property(self.component().name(), "ycen")
            .and_then(Alignment::from_value)
    }

    fn set_vertical_alignment(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        alignment: Alignment,
    ) -> bool {
        panel.set_number_property(self.component().name(), "ycen", alignment as u32)
    }
}

/// Widgets whose state is a number in the `val` property.
pub trait NumericValued: Object {
    fn value(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<u32> {
        panel.get_number_property(self.component().name(), "val")
    }

    fn set_value(&self, panel: &mut Panel<impl Transport, impl Clock>, value: u32) -> bool {
        panel.set_number_property(self.component().name(), "val", value)
    }
}

/// Widgets whose `val` property is a 0/1 flag.
pub trait BooleanValued: NumericValued {
    fn is_active(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<bool> {
        self.value(panel).map(|value| value != 0)
    }

    fn set_active(&self, panel: &mut Panel<impl Transport, impl Clock>, active: bool) -> bool {
        self.set_value(panel, active as u32)
    }
}

/// Widgets whose state is text in the `txt` property.
pub trait StringValued: Object {
    /// Read the text into `out`, returning the stored length. The value
    /// is raw codepage bytes, not guaranteed UTF-8.
    fn text<const N: usize>(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        out: &mut heapless::Vec<u8, N>,
    ) -> usize {
        panel.get_string_property(self.component().name(), "txt", out)
    }

    fn set_text(&self, panel: &mut Panel<impl Transport, impl Clock>, text: &str) -> bool {
        panel.set_string_property(self.component().name(), "txt", text)
    }

    /// Set the text to the decimal rendering of a number.
    fn set_text_from_number(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        value: u32,
    ) -> bool {
        let mut rendered = heapless::String::<10>::new();
        // Ten digits always fit a u32
        let _ = core::fmt::write(&mut rendered, format_args!("{}", value));
        self.set_text(panel, &rendered)
    }

    /// Read the text and parse it as a decimal number.
    fn text_as_number(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<u32> {
        let mut raw = heapless::Vec::<u8, 12>::new();
        if self.text(panel, &mut raw) == 0 {
            return None;
        }
        core::str::from_utf8(&raw).ok()?.trim().parse().ok()
    }
}

/// Widgets the panel reports touch events for.
pub trait Touchable: Object {
    /// The listener record for this widget's identity.
    fn listener(&self, callback: fn(TouchEvent)) -> TouchListener {
        let component = self.component();
        TouchListener {
            page: component.page(),
            component: component.id(),
            callback,
        }
    }

    /// Register interest in this widget's press/release events.
    /// Deliberately explicit: nothing connects on construction and
    /// nothing disconnects on drop.
    fn connect(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        callback: fn(TouchEvent),
    ) -> bool {
        panel.register_touchable(self.listener(callback))
    }

    /// Remove a previously connected callback.
    fn disconnect(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        callback: fn(TouchEvent),
    ) -> bool {
        panel.unregister_touchable(&self.listener(callback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicUsize, Ordering};
    use epaphe_driver::mock::{MockClock, MockPort};
    use epaphe_driver::TouchKind;

    struct Probe {
        component: Component,
    }

    impl Object for Probe {
        fn component(&self) -> &Component {
            &self.component
        }
    }

    impl Colourable for Probe {}
    impl Touchable for Probe {}
    impl StringValued for Probe {}

    fn probe() -> Probe {
        Probe {
            component: Component::new(1, 5, "b0"),
        }
    }

    fn panel() -> Panel<MockPort, MockClock> {
        Panel::new(MockPort::new(), MockClock::stepping(100))
    }

    #[test]
    fn test_visibility_commands() {
        let mut panel = panel();
        let probe = probe();

        assert!(probe.set_visible(&mut panel, false));
        assert!(probe.set_touch_enabled(&mut panel, true));
        let (port, _) = panel.release();
        assert_eq!(port.sent(), b"vis b0,0\xFF\xFF\xFFtsw b0,1\xFF\xFF\xFF");
    }

    #[test]
    fn test_set_colour_with_refresh() {
        let mut panel = panel();
        let probe = probe();

        assert!(probe.set_foreground_colour(&mut panel, Colour::GREEN, true));
        let (port, _) = panel.release();
        assert_eq!(port.sent(), b"b0.pco=2016\xFF\xFF\xFFref b0\xFF\xFF\xFF");
    }

    #[test]
    fn test_set_colour_without_refresh() {
        let mut panel = panel();
        let probe = probe();

        assert!(probe.set_background_colour(&mut panel, Colour::BLACK, false));
        let (port, _) = panel.release();
        assert_eq!(port.sent(), b"b0.bco=0\xFF\xFF\xFF");
    }

    #[test]
    fn test_get_colour() {
        let mut port = MockPort::new();
        // 2016 = 0x07E0 little-endian
        port.queue_reply(&[0x71, 0xE0, 0x07, 0x00, 0x00]);
        let mut panel = Panel::new(port, MockClock::stepping(100));
        let probe = probe();

        assert_eq!(probe.foreground_colour(&mut panel), Some(Colour::GREEN));
        let (port, _) = panel.release();
        assert_eq!(port.sent(), b"get b0.pco\xFF\xFF\xFF");
    }

    #[test]
    fn test_connect_routes_touch_events() {
        static PRESSES: AtomicUsize = AtomicUsize::new(0);
        fn on_touch(event: TouchEvent) {
            assert_eq!(event.kind, TouchKind::Press);
            PRESSES.fetch_add(1, Ordering::Relaxed);
        }
        PRESSES.store(0, Ordering::Relaxed);

        let mut port = MockPort::new();
        port.queue_reply(&[0x65, 1, 5, 1]);
        let mut panel = Panel::new(port, MockClock::stepping(100));
        let probe = probe();

        assert!(probe.connect(&mut panel, on_touch));
        panel.poll();
        assert_eq!(PRESSES.load(Ordering::Relaxed), 1);

        assert!(probe.disconnect(&mut panel, on_touch));
        assert!(!probe.disconnect(&mut panel, on_touch));
    }

    #[test]
    fn test_text_roundtrip_commands() {
        let mut port = MockPort::new();
        port.queue_reply(b"\x70stop ");
        let mut panel = Panel::new(port, MockClock::stepping(100));
        let probe = probe();

        assert!(probe.set_text(&mut panel, "run"));

        let mut out = heapless::Vec::<u8, 16>::new();
        assert_eq!(probe.text(&mut panel, &mut out), 4);
        assert_eq!(&out[..], b"stop");

        let (port, _) = panel.release();
        assert_eq!(
            port.sent(),
            b"b0.txt=\"run\"\xFF\xFF\xFFget b0.txt\xFF\xFF\xFF"
        );
    }

    #[test]
    fn test_text_from_number() {
        let mut panel = panel();
        let probe = probe();

        assert!(probe.set_text_from_number(&mut panel, 1234));
        let (port, _) = panel.release();
        assert_eq!(port.sent(), b"b0.txt=\"1234\"\xFF\xFF\xFF");
    }

    #[test]
    fn test_text_as_number() {
        let mut port = MockPort::new();
        port.queue_reply(b"\x70 42 ");
        let mut panel = Panel::new(port, MockClock::stepping(100));
        let probe = probe();

        assert_eq!(probe.text_as_number(&mut panel), Some(42));
    }
}
