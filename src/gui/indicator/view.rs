use super::model::{DotPageIndicator, DotVisualState, IndicatorLayout, Point};
use crate::gui::theme::ThemeColors;
use crate::style::Paint;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;

struct DotRenderer<'a> {
    state: &'a DotVisualState,
    center: Point,
    dot_size: f64,
}

impl<'a> DotRenderer<'a> {
    fn new(state: &'a DotVisualState, center: Point, dot_size: f64) -> Self {
        Self {
            state,
            center,
            dot_size,
        }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let radius = self.dot_size * self.state.scale / 2.0;
        let color = self.state.paint.resolve(colors);
        let alpha = (color.alpha * self.state.opacity).clamp(0.0, 1.0);
        if radius <= 0.0 || alpha <= 0.0 {
            return Ok(());
        }

        set_source(cr, Srgba::new(color.red, color.green, color.blue, alpha));
        cr.arc(self.center.x, self.center.y, radius, 0.0, 2.0 * PI);
        cr.fill()
    }
}

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn rounded_rectangle(cr: &Context, origin: Point, size: Point, radius: f64) {
    let r = radius.min(size.x / 2.0).min(size.y / 2.0).max(0.0);
    let (x, y, w, h) = (origin.x, origin.y, size.x, size.y);

    cr.new_sub_path();
    cr.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
    cr.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
    cr.arc(x + r, y + h - r, r, PI / 2.0, PI);
    cr.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
    cr.close_path();
}

fn draw_background(
    cr: &Context,
    origin: Point,
    layout: &IndicatorLayout,
    corner_radius: f64,
    paint: Paint,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let outer = layout.outer();
    if outer.x <= 0.0 || outer.y <= 0.0 {
        return Ok(());
    }

    set_source(cr, paint.resolve(colors));
    rounded_rectangle(cr, origin, outer, corner_radius);
    cr.fill()
}

/// Draws the indicator centered in a `width` x `height` area.
///
/// The background covers the padded box; dots are clipped to the viewport.
pub fn draw(
    cr: &Context,
    indicator: &DotPageIndicator,
    colors: &ThemeColors,
    width: f64,
    height: f64,
) -> Result<(), cairo::Error> {
    let style = &indicator.style;
    let layout = indicator.layout();
    let outer = layout.outer();
    let origin = Point::new((width - outer.x) / 2.0, (height - outer.y) / 2.0);

    draw_background(
        cr,
        origin,
        &layout,
        style.background_corner_radius,
        style.background_color,
        colors,
    )?;

    let viewport_origin = Point::new(origin.x + layout.padding.x, origin.y + layout.padding.y);
    let center = layout.center_point();
    let viewport_center = Point::new(viewport_origin.x + center.x, viewport_origin.y + center.y);

    cr.save()?;
    cr.rectangle(
        viewport_origin.x,
        viewport_origin.y,
        layout.viewport.x.max(0.0),
        layout.viewport.y.max(0.0),
    );
    cr.clip();

    let dots = indicator.dot_states().iter().try_for_each(|state| {
        let shift = style.orientation.axis_offset(state.offset);
        let center = Point::new(viewport_center.x + shift.x, viewport_center.y + shift.y);
        DotRenderer::new(state, center, style.dot_size).draw(cr, colors)
    });

    // The clip must not outlive this call, even when a dot failed to draw.
    cr.restore()?;
    dots
}
