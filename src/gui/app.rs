use crate::binding::CurrentIndex;
use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::attach::{Alignment, attach_indicator};
use crate::gui::indicator::{DotPageIndicator, IndicatorWidget};
use crate::gui::theme;
use crate::style::StyleConfig;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;

/// Demo host: owns the current page and drives two indicators from it.
pub struct AppModel {
    pub current_index: CurrentIndex,
    pub total_items: usize,
    pub vertical: IndicatorWidget,
    pub horizontal: IndicatorWidget,
}

impl AppModel {
    fn page_label(&self) -> String {
        format!(
            "Page {} of {}",
            self.current_index.get().saturating_add(1),
            self.total_items
        )
    }

    fn has_previous(&self) -> bool {
        self.current_index.get() > 0
    }

    fn has_next(&self) -> bool {
        self.current_index.get().saturating_add(1) < self.total_items as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    Next,
    Previous,
    First,
    Last,
    Goto(i64),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Next => AppMsg::Next,
            AppEvent::Previous => AppMsg::Previous,
            AppEvent::First => AppMsg::First,
            AppEvent::Last => AppMsg::Last,
            AppEvent::Goto(i) => AppMsg::Goto(i),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

/// `index` pulled into `0..total_items`; 0 when there are no pages.
pub fn clamp_index(index: i64, total_items: usize) -> i64 {
    match total_items.checked_sub(1) {
        Some(last) => index.clamp(0, i64::try_from(last).unwrap_or(i64::MAX)),
        None => 0,
    }
}

impl AppMsg {
    /// Page a navigation message leads to, kept within `0..total_items`.
    ///
    /// `None` when the message does not move the page or there are no pages.
    pub fn target(&self, current: i64, total_items: usize) -> Option<i64> {
        let last = i64::try_from(total_items.checked_sub(1)?).unwrap_or(i64::MAX);
        let target = match *self {
            Self::Next => current.saturating_add(1),
            Self::Previous => current.saturating_sub(1),
            Self::First => 0,
            Self::Last => last,
            Self::Goto(i) => i,
            Self::ConfigReload => current,
        };
        let target = target.clamp(0, last);
        (target != current).then_some(target)
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Dot Page Indicator"),
            set_default_size: (480, 360),

            add_controller = gtk::EventControllerKey {
                set_propagation_phase: gtk::PropagationPhase::Capture,
                connect_key_pressed[sender] => move |_, key, _, _| {
                    use gtk::gdk::Key;
                    let msg = if key == Key::Left || key == Key::Up {
                        AppMsg::Previous
                    } else if key == Key::Right || key == Key::Down {
                        AppMsg::Next
                    } else if key == Key::Home {
                        AppMsg::First
                    } else if key == Key::End {
                        AppMsg::Last
                    } else {
                        return glib::Propagation::Proceed;
                    };
                    sender.input(msg);
                    glib::Propagation::Stop
                }
            },

            #[name = "content"]
            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 12,
                set_halign: gtk::Align::Center,
                set_valign: gtk::Align::Center,

                gtk::Label {
                    add_css_class: "dotpage-page-label",
                    #[watch]
                    set_label: &model.page_label(),
                },

                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 8,
                    set_halign: gtk::Align::Center,

                    gtk::Button {
                        set_label: "Previous",
                        #[watch]
                        set_sensitive: model.has_previous(),
                        connect_clicked => AppMsg::Previous,
                    },

                    gtk::Button {
                        set_label: "Next",
                        #[watch]
                        set_sensitive: model.has_next(),
                        connect_clicked => AppMsg::Next,
                    },
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();

        let total_items = config.total_items;
        let current_index = CurrentIndex::new(clamp_index(config.initial_index, total_items));
        let indicator = |style: StyleConfig| {
            IndicatorWidget::new(
                DotPageIndicator::new(current_index.clone(), total_items, style)
                    .with_has_content(config.has_content()),
            )
        };

        let model = AppModel {
            vertical: indicator(config.vertical_style()),
            horizontal: indicator(config.horizontal_style()),
            current_index,
            total_items,
        };

        let widgets = view_output!();

        // Re-parent the page content under the two indicator overlays.
        root.set_child(None::<&gtk::Widget>);
        let inner = attach_indicator(&widgets.content, &model.vertical, Alignment::Leading);
        let outer = attach_indicator(&inner, &model.horizontal, Alignment::Bottom);
        root.set_child(Some(&outer));

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.total_items = new_config.total_items;
                    for (widget, style) in [
                        (&self.vertical, new_config.vertical_style()),
                        (&self.horizontal, new_config.horizontal_style()),
                    ] {
                        widget.set_style(style);
                        widget.set_total_items(new_config.total_items);
                        widget.set_has_content(new_config.has_content());
                    }
                    let current = self.current_index.get();
                    if let Some(target) = AppMsg::Goto(current).target(current, self.total_items) {
                        self.current_index.set(target);
                    }
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            nav => {
                if let Some(target) = nav.target(self.current_index.get(), self.total_items) {
                    self.current_index.set(target);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_stays_in_range() {
        assert_eq!(AppMsg::Next.target(2, 10), Some(3));
        assert_eq!(AppMsg::Next.target(9, 10), None);
        assert_eq!(AppMsg::Previous.target(0, 10), None);
        assert_eq!(AppMsg::Previous.target(3, 10), Some(2));
        assert_eq!(AppMsg::First.target(5, 10), Some(0));
        assert_eq!(AppMsg::Last.target(5, 10), Some(9));
        assert_eq!(AppMsg::Goto(42).target(5, 10), Some(9));
        assert_eq!(AppMsg::Goto(-3).target(5, 10), Some(0));
        assert_eq!(AppMsg::Goto(5).target(5, 10), None);
    }

    #[test]
    fn test_initial_index_is_clamped() {
        assert_eq!(clamp_index(20, 10), 9);
        assert_eq!(clamp_index(i64::MAX, 10), 9);
        assert_eq!(clamp_index(i64::MIN, 10), 0);
        assert_eq!(clamp_index(4, 10), 4);
        assert_eq!(clamp_index(3, 0), 0);
    }

    #[test]
    fn test_navigation_from_extreme_index() {
        assert_eq!(AppMsg::Next.target(i64::MAX, 10), Some(9));
        assert_eq!(AppMsg::Previous.target(i64::MIN, 10), Some(0));
    }

    #[test]
    fn test_navigation_without_pages() {
        assert_eq!(AppMsg::Next.target(0, 0), None);
        assert_eq!(AppMsg::Last.target(0, 0), None);
    }

    #[test]
    fn test_config_reload_pulls_index_back_into_range() {
        assert_eq!(AppMsg::Goto(7).target(7, 4), Some(3));
        assert_eq!(AppMsg::ConfigReload.target(2, 4), None);
    }
}
