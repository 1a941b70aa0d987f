//! Waveform chart widget

use core::fmt::Write;

use epaphe_driver::{Clock, Panel, Transport};
use epaphe_protocol::types::Colour;
use epaphe_protocol::Command;

use crate::capability::{Colourable, Object, Touchable};
use crate::component::Component;

/// Highest data channel index supported by the panel.
const MAX_CHANNEL: u8 = 3;

/// A rolling chart with up to four data channels.
#[derive(Debug, Clone, Copy)]
pub struct Waveform {
    component: Component,
}

impl Waveform {
    pub const fn new(page: u8, id: u8, name: &'static str) -> Self {
        Waveform {
            component: Component::new(page, id, name),
        }
    }

    /// Append one datapoint (0-255) to a channel.
    ///
    /// The panel executes `add` without emitting a completion code even
    /// when result reporting is on, so none is awaited here.
    pub fn add_value(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        channel: u8,
        value: u8,
    ) -> bool {
        if channel > MAX_CHANNEL {
            return false;
        }
        panel.send(
            &Command::new("add")
                .arg(self.component.id() as u32)
                .arg(channel as u32)
                .arg(value as u32),
        )
    }

    /// Trace colour of one channel (`pco0`..`pco3`).
    pub fn channel_colour(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        channel: u8,
    ) -> Option<Colour> {
        self.colour(panel, &channel_property(channel)?)
    }

    pub fn set_channel_colour(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        channel: u8,
        colour: Colour,
        refresh: bool,
    ) -> bool {
        match channel_property(channel) {
            Some(property) => self.set_colour(panel, &property, colour, refresh),
            None => false,
        }
    }

    pub fn grid_colour(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<Colour> {
        self.colour(panel, "gdc")
    }

    pub fn set_grid_colour(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        colour: Colour,
        refresh: bool,
    ) -> bool {
        self.set_colour(panel, "gdc", colour, refresh)
    }

    pub fn grid_width(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<u16> {
        panel
            .get_number_property(self.component.name(), "gdw")
            .map(|value| value as u16)
    }

    pub fn set_grid_width(&self, panel: &mut Panel<impl Transport, impl Clock>, width: u16) -> bool {
        panel.set_number_property(self.component.name(), "gdw", width as u32)
    }

    pub fn grid_height(&self, panel: &mut Panel<impl Transport, impl Clock>) -> Option<u16> {
        panel
            .get_number_property(self.component.name(), "gdh")
            .map(|value| value as u16)
    }

    pub fn set_grid_height(
        &self,
        panel: &mut Panel<impl Transport, impl Clock>,
        height: u16,
    ) -> bool {
        panel.set_number_property(self.component.name(), "gdh", height as u32)
    }
}

/// Per-channel colour property name, `None` for channels the panel does
/// not have.
fn channel_property(channel: u8) -> Option<heapless::String<8>> {
    if channel > MAX_CHANNEL {
        return None;
    }
    let mut property = heapless::String::new();
    // "pco" plus one digit always fits
    let _ = write!(property, "pco{}", channel);
    Some(property)
}

impl Object for Waveform {
    fn component(&self) -> &Component {
        &self.component
    }
}

impl Touchable for Waveform {}
impl Colourable for Waveform {}
