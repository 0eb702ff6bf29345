pub mod binding;
pub mod config;
pub mod events;
pub mod gui;
pub mod style;
pub mod sys;

pub use binding::{CurrentIndex, Subscription};
pub use gui::attach::{Alignment, attach_indicator, with_dot_indicator};
pub use gui::indicator::{DotPageIndicator, DotVisualState, HasContent, IndicatorWidget};
pub use style::{Orientation, Paint, Preset, ScrollDirection, StyleConfig};
