//! Widget adapters for epaphe-class serial touch panels
//!
//! Widgets laid out in the panel's design tool are addressed from the
//! host by page id, component id and name. This crate wraps that
//! addressing in small typed adapters: a [`Component`] carries the
//! identity, capability traits ([`Colourable`], [`StringValued`],
//! [`Touchable`], ...) carry the behaviour, and each concrete widget
//! type composes exactly the capabilities its panel-side counterpart
//! supports.
//!
//! Adapters hold no connection state of their own - every operation
//! borrows the [`epaphe_driver::Panel`] explicitly, and touch callbacks
//! are connected and disconnected explicitly rather than tied to widget
//! lifetimes.

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod capability;
pub mod component;
pub mod page;
pub mod picture;
pub mod text;
pub mod timer;
pub mod toggle;
pub mod value;
pub mod variable;
pub mod waveform;

pub use button::{Button, DualStateButton, Hotspot};
pub use capability::{
    BooleanValued, Colourable, FontStyleable, NumericValued, Object, StringValued, Touchable,
};
pub use component::Component;
pub use page::Page;
pub use picture::{Crop, Picture};
pub use text::{SlidingText, Text};
pub use timer::Timer;
pub use toggle::{Checkbox, RadioButton};
pub use value::{Gauge, Number, ProgressBar, Slider};
pub use variable::{NumericVariable, StringVariable};
