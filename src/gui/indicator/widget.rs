use super::model::{DotPageIndicator, HasContent};
use super::view;
use crate::gui::theme::ThemeColors;
use crate::style::StyleConfig;
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::RefCell;
use std::rc::Rc;

/// A drawing area showing a [`DotPageIndicator`].
///
/// Redraws whenever the shared current index changes. Cloning shares the
/// widget and its model.
#[derive(Debug, Clone)]
pub struct IndicatorWidget {
    model: Rc<RefCell<DotPageIndicator>>,
    area: gtk::DrawingArea,
}

impl IndicatorWidget {
    pub fn new(indicator: DotPageIndicator) -> Self {
        let area = gtk::DrawingArea::new();
        area.add_css_class("dotpage-indicator");

        let widget = Self {
            model: Rc::new(RefCell::new(indicator)),
            area,
        };
        widget.apply_size();

        let area = widget.area.downgrade();
        let subscription = widget.model.borrow().current_index.subscribe(move |_| {
            if let Some(area) = area.upgrade() {
                area.queue_draw();
            }
        });

        // The subscription lives as long as the draw func, which the area owns.
        let model = widget.model.clone();
        widget.area.set_draw_func(move |area, cr, width, height| {
            let _subscription = &subscription;
            let colors = ThemeColors::from_context(&area.style_context());
            if let Err(e) = view::draw(cr, &model.borrow(), &colors, width as f64, height as f64) {
                log::error!("Drawing error: {}", e);
            }
        });

        widget
    }

    pub fn area(&self) -> &gtk::DrawingArea {
        &self.area
    }

    pub fn style(&self) -> StyleConfig {
        self.model.borrow().style.clone()
    }

    pub fn set_style(&self, style: StyleConfig) {
        self.model.borrow_mut().style = style;
        self.apply_size();
        self.area.queue_draw();
    }

    pub fn set_total_items(&self, total_items: usize) {
        self.model.borrow_mut().total_items = total_items;
        self.area.queue_draw();
    }

    pub fn set_has_content(&self, has_content: HasContent) {
        self.model.borrow_mut().has_content = has_content;
        self.area.queue_draw();
    }

    fn apply_size(&self) {
        let outer = self.model.borrow().layout().outer();
        self.area.set_content_width(outer.x.max(0.0).ceil() as i32);
        self.area.set_content_height(outer.y.max(0.0).ceil() as i32);
    }
}
