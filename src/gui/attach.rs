use crate::binding::CurrentIndex;
use crate::gui::indicator::{DotPageIndicator, HasContent, IndicatorWidget};
use crate::style::StyleConfig;
use gtk::prelude::*;
use gtk4 as gtk;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Gap between the host's edges and an attached indicator.
pub const ATTACH_MARGIN: i32 = 16;

/// Where an attached indicator sits over its host.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    #[strum(serialize = "leading")]
    Leading,
    #[strum(serialize = "trailing")]
    Trailing,
    #[strum(serialize = "top")]
    Top,
    #[strum(serialize = "bottom")]
    Bottom,
    #[strum(serialize = "center")]
    Center,
    #[strum(serialize = "topleading")]
    TopLeading,
    #[strum(serialize = "toptrailing")]
    TopTrailing,
    #[strum(serialize = "bottomleading")]
    BottomLeading,
    #[strum(serialize = "bottomtrailing")]
    BottomTrailing,
}

impl Alignment {
    /// Horizontal and vertical GTK alignment, in that order.
    pub fn gtk_align(&self) -> (gtk::Align, gtk::Align) {
        use gtk::Align::{Center, End, Start};
        match self {
            Self::Leading => (Start, Center),
            Self::Trailing => (End, Center),
            Self::Top => (Center, Start),
            Self::Bottom => (Center, End),
            Self::Center => (Center, Center),
            Self::TopLeading => (Start, Start),
            Self::TopTrailing => (End, Start),
            Self::BottomLeading => (Start, End),
            Self::BottomTrailing => (End, End),
        }
    }
}

/// Layers an indicator over `host` at `alignment`.
///
/// Returns the overlay to put in place of `host`, and the indicator widget
/// so the caller can restyle it later.
pub fn with_dot_indicator(
    host: &impl IsA<gtk::Widget>,
    current_index: CurrentIndex,
    total_items: usize,
    style: StyleConfig,
    has_content: Option<HasContent>,
    alignment: Alignment,
) -> (gtk::Overlay, IndicatorWidget) {
    let model = DotPageIndicator::new(current_index, total_items, style)
        .with_has_content(has_content.unwrap_or_default());
    let indicator = IndicatorWidget::new(model);
    let overlay = attach_indicator(host, &indicator, alignment);
    (overlay, indicator)
}

/// Same as [`with_dot_indicator`] for an indicator that already exists.
pub fn attach_indicator(
    host: &impl IsA<gtk::Widget>,
    indicator: &IndicatorWidget,
    alignment: Alignment,
) -> gtk::Overlay {
    let area = indicator.area();
    let (halign, valign) = alignment.gtk_align();
    area.set_halign(halign);
    area.set_valign(valign);
    area.set_margin_start(ATTACH_MARGIN);
    area.set_margin_end(ATTACH_MARGIN);
    area.set_margin_top(ATTACH_MARGIN);
    area.set_margin_bottom(ATTACH_MARGIN);
    area.set_can_target(false);

    let overlay = gtk::Overlay::new();
    overlay.set_child(Some(host));
    overlay.add_overlay(area);
    overlay
}
