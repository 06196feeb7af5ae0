// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the sheet, the tab
//! panes, and the journal store.
//!
//! The `App` struct wires together the domains (sheet presentation,
//! localization, journal data, settings) and translates messages into
//! side effects like config persistence. Policy decisions (window
//! sizing, form factor resolution, which settings persist) stay close
//! to the update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::journal::Store;
use crate::ui::panes::{calendar, journal, settings};
use crate::ui::sheet::{self, FormFactor};
use crate::ui::tabs;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Root Iced application state bridging UI components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    sheet: sheet::State,
    tabs: tabs::State,
    journal_pane: journal::State,
    calendar_pane: calendar::State,
    store: Store,
    /// Translation keys for problems found during startup (unreadable
    /// config, malformed store). Shown on the home page.
    warnings: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("sheet", &self.sheet.position())
            .field("active_tab", &self.tabs.active())
            .field("entries", &self.store.len())
            .finish()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            theme_mode: ThemeMode::System,
            sheet: sheet::State::default(),
            tabs: tabs::State::default(),
            journal_pane: journal::State::default(),
            calendar_pane: calendar::State::default(),
            store: Store::new(),
            warnings: Vec::new(),
        }
    }
}

impl App {
    /// Initializes application state from the config file, the journal
    /// store, and startup `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (store, store_warning) = Store::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let form_factor = if flags.touch || config.general.touch_input == Some(true) {
            FormFactor::Touch
        } else {
            FormFactor::Desktop
        };

        let theme_mode = config.general.theme_mode;
        let warnings = [config_warning, store_warning]
            .into_iter()
            .flatten()
            .collect();

        let app = App {
            i18n,
            theme_mode,
            sheet: sheet::State::new(form_factor, WINDOW_DEFAULT_HEIGHT as f32),
            store,
            warnings,
            config,
            ..Self::default()
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Sheet(msg) => {
                // The sheet owns its transitions; the emitted event is
                // informational at this level.
                let _event = self.sheet.update(msg);
            }
            Message::Tabs(msg) => {
                let _event = self.tabs.update(msg);
            }
            Message::Journal(msg) => self.journal_pane.update(msg),
            Message::Calendar(msg) => self.calendar_pane.update(msg),
            Message::Settings(msg) => {
                self.apply_settings_event(settings::update(msg));
                if let Err(error) = config::save(&self.config) {
                    eprintln!("Failed to save settings: {error}");
                }
            }
            Message::WindowResized(size) => {
                self.sheet.set_window_height(size.height);
            }
        }
        Task::none()
    }

    /// Applies a settings pane event to the in-memory state. Persistence
    /// is the caller's concern.
    fn apply_settings_event(&mut self, event: settings::Event) {
        match event {
            settings::Event::ThemeModeChanged(mode) => {
                self.theme_mode = mode;
                self.config.general.theme_mode = mode;
            }
            settings::Event::AutoPeekChanged(enabled) => {
                self.config.sheet.auto_peek = Some(enabled);
            }
            settings::Event::LanguageChanged(locale) => {
                self.config.general.language = Some(locale.to_string());
                self.i18n.set_locale(locale);
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            sheet: &self.sheet,
            tabs: &self.tabs,
            journal_pane: &self.journal_pane,
            calendar_pane: &self.calendar_pane,
            store: &self.store,
            warnings: &self.warnings,
        })
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_auto_peek_subscription(&self.sheet, &self.config),
        ])
    }
}
