pub mod model;
pub mod view;
pub mod widget;

pub use model::{DotPageIndicator, DotVisualState, HasContent, IndicatorLayout, Point, dot_offset};
pub use view::draw;
pub use widget::IndicatorWidget;

pub const SELECTION_EPSILON: f64 = 1.0; // distance under which a dot counts as centered
pub const FALLOFF_SPACINGS: f64 = 3.0; // progress reaches 0 this many spacings out
pub const SCALE_BOOST: f64 = 0.2;
pub const OPACITY_BOOST: f64 = 0.4;
