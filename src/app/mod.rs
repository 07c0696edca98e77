// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the section navigator and the animation state of
//! everything drawn on top of it, and hands iced the update, view and
//! subscription functions. Time is measured in milliseconds since startup.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::navigator::{SectionNavigator, SectionRole};
use crate::ui::indicator_panel::DotAnimations;
use crate::ui::navbar;
use crate::ui::section_stage::SectionText;
use crate::ui::section_surface::{FrameClock, SectionSurface};
use crate::ui::theming::ColorScheme;
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    navigator: SectionNavigator<SectionSurface>,
    clock: FrameClock,
    dots: DotAnimations,
    /// Localized copy for every section, in page order.
    texts: Vec<SectionText>,
    /// Section titles, shown in indicator tooltips.
    titles: Vec<String>,
    scheme: ColorScheme,
    theme: Theme,
    started: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.navigator.state())
            .field("locale", &self.i18n.current_locale())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Localized title and body for every section.
fn section_texts(i18n: &I18n) -> Vec<SectionText> {
    SectionRole::ALL
        .iter()
        .map(|role| SectionText {
            title: i18n.tr(role.i18n_key()),
            body: i18n.tr(&format!("{}-body", role.i18n_key())),
        })
        .collect()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let timings = config.navigation.timings();
        let clock = FrameClock::new();
        let surfaces = SectionSurface::stack(&clock, timings.transition_ms());
        let navigator = SectionNavigator::new(surfaces, navbar::LINKS, timings);
        let dots = DotAnimations::new(navigator.indicators());

        let texts = section_texts(&i18n);
        let titles = texts.iter().map(|text| text.title.clone()).collect();
        let theme_mode = config.general.theme_mode;

        tracing::info!(
            locale = %i18n.current_locale(),
            ?theme_mode,
            ?timings,
            sections = navigator.section_count(),
            "application started"
        );

        let app = App {
            i18n,
            navigator,
            clock,
            dots,
            texts,
            titles,
            scheme: ColorScheme::for_mode(theme_mode),
            theme: theme_mode.iced_theme(),
            started: Instant::now(),
        };

        (app, Task::none())
    }

    /// Milliseconds elapsed since startup.
    fn now_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Whether anything on screen still changes without further input.
    fn needs_ticks(&self, now_ms: u64) -> bool {
        self.navigator.next_deadline().is_some()
            || self.dots.is_animating(now_ms)
            || self
                .navigator
                .panels()
                .iter()
                .any(|surface| surface.is_animating(now_ms))
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.needs_ticks(self.now_ms()));

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now_ms = self.now_ms();
        let mut ctx = update::UpdateContext {
            navigator: &mut self.navigator,
            dots: &mut self.dots,
            clock: &self.clock,
            now_ms,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            navigator: &self.navigator,
            dots: &self.dots,
            texts: &self.texts,
            titles: &self.titles,
            scheme: &self.scheme,
            now_ms: self.now_ms(),
        })
    }
}
