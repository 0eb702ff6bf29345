use crate::binding::CurrentIndex;
use crate::gui::indicator::{FALLOFF_SPACINGS, OPACITY_BOOST, SCALE_BOOST, SELECTION_EPSILON};
use crate::style::{Orientation, Paint, ScrollDirection, StyleConfig};
use derive_more::{Deref, From};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Signed distance of a dot from the viewport center along the primary axis.
pub fn dot_offset(
    current_index: i64,
    dot_index: usize,
    spacing: f64,
    direction: ScrollDirection,
) -> f64 {
    let offset = (current_index as f64 - dot_index as f64) * spacing;
    match direction {
        ScrollDirection::Natural => offset,
        ScrollDirection::Reversed => -offset,
    }
}

impl Orientation {
    /// Builds a point from primary- and cross-axis coordinates.
    pub fn point(&self, primary: f64, cross: f64) -> Point {
        match self {
            Self::Vertical => Point::new(cross, primary),
            Self::Horizontal => Point::new(primary, cross),
        }
    }

    /// Places a primary-axis offset on the matching axis.
    pub fn axis_offset(&self, offset: f64) -> Point {
        self.point(offset, 0.0)
    }

    fn primary(&self, size: Point) -> f64 {
        match self {
            Self::Vertical => size.y,
            Self::Horizontal => size.x,
        }
    }

    fn cross(&self, size: Point) -> f64 {
        match self {
            Self::Vertical => size.x,
            Self::Horizontal => size.y,
        }
    }
}

/// Box sizes of an indicator: the clipped viewport and the padded background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorLayout {
    pub orientation: Orientation,
    pub viewport: Point,
    pub padding: Point,
}

impl IndicatorLayout {
    pub fn new(style: &StyleConfig) -> Self {
        let along = style.visible_dots as f64 * style.dot_spacing;
        let viewport = match style.orientation {
            Orientation::Vertical => Point::new(style.indicator_width, along),
            Orientation::Horizontal => Point::new(along, style.indicator_width),
        };

        Self {
            orientation: style.orientation,
            viewport,
            padding: Point::new(style.horizontal_padding, style.vertical_padding),
        }
    }

    pub fn outer(&self) -> Point {
        Point::new(
            self.viewport.x + 2.0 * self.padding.x,
            self.viewport.y + 2.0 * self.padding.y,
        )
    }

    /// Center of the viewport along the primary axis.
    pub fn center(&self) -> f64 {
        self.orientation.primary(self.viewport) / 2.0
    }

    /// Viewport center relative to the viewport's top-left corner.
    pub fn center_point(&self) -> Point {
        let cross = self.orientation.cross(self.viewport) / 2.0;
        self.orientation.point(self.center(), cross)
    }
}

/// How one dot looks for a given current index. Derived on every draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotVisualState {
    pub offset: f64,
    pub distance: f64,
    pub selected: bool,
    /// Closeness to the center in `[0, 1]`, 0 at three spacings or more.
    pub progress: f64,
    pub paint: Paint,
    pub scale: f64,
    pub opacity: f64,
}

impl DotVisualState {
    pub fn derive(offset: f64, has_content: bool, style: &StyleConfig) -> Self {
        let distance = offset.abs();
        let selected = distance < SELECTION_EPSILON;
        let max_distance = style.dot_spacing * FALLOFF_SPACINGS;
        let progress = (1.0 - distance / max_distance).clamp(0.0, 1.0);

        let (paint, scale, opacity) = if selected {
            (
                style.selected_dot_color,
                style.selected_dot_scale,
                style.selected_dot_opacity,
            )
        } else {
            let paint = if has_content {
                style.active_dot_color
            } else {
                style.inactive_dot_color
            };
            (
                paint,
                style.normal_dot_scale + progress * SCALE_BOOST,
                style.normal_dot_opacity + progress * OPACITY_BOOST,
            )
        };

        Self {
            offset,
            distance,
            selected,
            progress,
            paint,
            scale,
            opacity,
        }
    }
}

/// Whether the item at an index has content. Unset means every item does.
#[derive(Clone, Deref, From)]
pub struct HasContent(Rc<dyn Fn(usize) -> bool>);

impl HasContent {
    pub fn new(f: impl Fn(usize) -> bool + 'static) -> Self {
        Self(Rc::new(f))
    }
}

impl Default for HasContent {
    fn default() -> Self {
        Self::new(|_| true)
    }
}

impl fmt::Debug for HasContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HasContent(..)")
    }
}

#[derive(Debug, Clone)]
pub struct DotPageIndicator {
    pub current_index: CurrentIndex,
    pub total_items: usize,
    pub style: StyleConfig,
    pub has_content: HasContent,
}

impl DotPageIndicator {
    pub fn new(current_index: CurrentIndex, total_items: usize, style: StyleConfig) -> Self {
        Self {
            current_index,
            total_items,
            style,
            has_content: HasContent::default(),
        }
    }

    pub fn with_has_content(self, has_content: HasContent) -> Self {
        Self {
            has_content,
            ..self
        }
    }

    pub fn layout(&self) -> IndicatorLayout {
        IndicatorLayout::new(&self.style)
    }

    /// One state per item, in index order.
    pub fn dot_states(&self) -> Vec<DotVisualState> {
        let current = self.current_index.get();
        (0..self.total_items)
            .map(|i| {
                let offset = dot_offset(
                    current,
                    i,
                    self.style.dot_spacing,
                    self.style.scroll_direction,
                );
                DotVisualState::derive(offset, (self.has_content)(i), &self.style)
            })
            .collect()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.dot_states().iter().position(|s| s.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator(current: i64, total: usize, direction: ScrollDirection) -> DotPageIndicator {
        DotPageIndicator::new(
            CurrentIndex::new(current),
            total,
            StyleConfig::default().with_scroll_direction(direction),
        )
    }

    #[test]
    fn test_offset_at_current_index_is_zero() {
        for i in 0..10 {
            assert_eq!(dot_offset(i as i64, i, 12.0, ScrollDirection::Natural), 0.0);
            assert_eq!(dot_offset(i as i64, i, 12.0, ScrollDirection::Reversed), 0.0);
        }
    }

    #[test]
    fn test_natural_scroll_offsets() {
        let states = indicator(2, 10, ScrollDirection::Natural).dot_states();
        assert_eq!(states.len(), 10);

        assert_eq!(states[0].offset, 24.0);
        assert!(!states[0].selected);

        assert_eq!(states[2].offset, 0.0);
        assert!(states[2].selected);

        assert_eq!(states[5].offset, -36.0);
        assert_eq!(states[5].distance, 36.0);
        assert_eq!(states[5].progress, 0.0);
    }

    #[test]
    fn test_reversed_scroll_negates_offsets() {
        let natural = indicator(2, 10, ScrollDirection::Natural).dot_states();
        let reversed = indicator(2, 10, ScrollDirection::Reversed).dot_states();

        assert_eq!(reversed[0].offset, -24.0);
        for (n, r) in natural.iter().zip(&reversed) {
            assert_eq!(n.offset, -r.offset);
            assert_eq!(n.selected, r.selected);
        }
    }

    #[test]
    fn test_exactly_one_selected() {
        for current in 0..10 {
            let ind = indicator(current, 10, ScrollDirection::Natural);
            let selected = ind.dot_states().iter().filter(|s| s.selected).count();
            assert_eq!(selected, 1);
            assert_eq!(ind.selected_index(), Some(current as usize));
        }
    }

    #[test]
    fn test_out_of_range_index_selects_nothing() {
        assert_eq!(indicator(12, 10, ScrollDirection::Natural).selected_index(), None);
        assert_eq!(indicator(-1, 10, ScrollDirection::Natural).selected_index(), None);
    }

    #[test]
    fn test_extreme_index_selects_nothing() {
        for current in [i64::MIN, i64::MAX] {
            for direction in [ScrollDirection::Natural, ScrollDirection::Reversed] {
                let ind = indicator(current, 3, direction);
                let states = ind.dot_states();
                assert_eq!(states.len(), 3);
                assert!(states.iter().all(|s| !s.selected && s.progress == 0.0));
                assert_eq!(ind.selected_index(), None);
            }
        }
        assert!(dot_offset(i64::MIN, 1, 12.0, ScrollDirection::Natural) < 0.0);
        assert!(dot_offset(i64::MAX, 0, 12.0, ScrollDirection::Reversed) < 0.0);
    }

    #[test]
    fn test_zero_items_has_no_dots() {
        assert!(indicator(0, 0, ScrollDirection::Natural).dot_states().is_empty());
    }

    #[test]
    fn test_progress_falls_off_linearly() {
        let style = StyleConfig::default();
        let mut last = f64::INFINITY;
        for step in 0..=60 {
            let state = DotVisualState::derive(step as f64, true, &style);
            assert!((0.0..=1.0).contains(&state.progress));
            assert!(state.progress <= last);
            last = state.progress;
        }

        assert_eq!(DotVisualState::derive(18.0, true, &style).progress, 0.5);
        assert_eq!(DotVisualState::derive(36.0, true, &style).progress, 0.0);
        assert_eq!(DotVisualState::derive(-100.0, true, &style).progress, 0.0);
    }

    #[test]
    fn test_selected_ignores_content() {
        let style = StyleConfig::default();
        for has_content in [true, false] {
            let state = DotVisualState::derive(0.5, has_content, &style);
            assert!(state.selected);
            assert_eq!(state.paint, style.selected_dot_color);
            assert_eq!(state.scale, style.selected_dot_scale);
            assert_eq!(state.opacity, style.selected_dot_opacity);
        }
    }

    #[test]
    fn test_unselected_paint_follows_content() {
        let style = StyleConfig::dark();
        let empty = DotVisualState::derive(12.0, false, &style);
        let full = DotVisualState::derive(12.0, true, &style);
        assert_eq!(empty.paint, style.inactive_dot_color);
        assert_eq!(full.paint, style.active_dot_color);
    }

    #[test]
    fn test_unselected_scale_and_opacity_interpolate() {
        let style = StyleConfig::default();
        let far = DotVisualState::derive(48.0, true, &style);
        assert_eq!(far.scale, style.normal_dot_scale);
        assert_eq!(far.opacity, style.normal_dot_opacity);

        let half = DotVisualState::derive(18.0, true, &style);
        assert!((half.scale - (style.normal_dot_scale + 0.1)).abs() < 1e-9);
        assert!((half.opacity - (style.normal_dot_opacity + 0.2)).abs() < 1e-9);
    }

    #[test]
    fn test_has_content_is_consulted_per_index() {
        let ind = indicator(0, 4, ScrollDirection::Natural)
            .with_has_content(HasContent::new(|i| i % 2 == 0));
        let style = ind.style.clone();
        let states = ind.dot_states();
        assert_eq!(states[1].paint, style.inactive_dot_color);
        assert_eq!(states[2].paint, style.active_dot_color);
    }

    #[test]
    fn test_layout_sizes() {
        let vertical = IndicatorLayout::new(&StyleConfig::default());
        assert_eq!(vertical.viewport, Point::new(20.0, 84.0));
        assert_eq!(vertical.outer(), Point::new(28.0, 100.0));
        assert_eq!(vertical.center(), 42.0);

        let horizontal =
            IndicatorLayout::new(&StyleConfig::default().with_orientation(Orientation::Horizontal));
        assert_eq!(horizontal.viewport, Point::new(84.0, 20.0));
        assert_eq!(horizontal.center(), 42.0);

        assert_eq!(vertical.center_point(), Point::new(10.0, 42.0));
        assert_eq!(horizontal.center_point(), Point::new(42.0, 10.0));
    }

    #[test]
    fn test_axis_offset() {
        assert_eq!(Orientation::Vertical.axis_offset(5.0), Point::new(0.0, 5.0));
        assert_eq!(Orientation::Horizontal.axis_offset(-5.0), Point::new(-5.0, 0.0));
    }
}
