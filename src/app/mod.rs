// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the bell, the dropdown,
//! the notification page and the live channel.
//!
//! The `App` struct wires together the domains (API client, notification
//! stores, localization, toasts) and translates messages into side effects
//! such as REST calls. Local stores are only mutated by confirmed results.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::{ApiClient, Endpoint};
use crate::i18n::fluent::I18n;
use crate::state::NotificationCenter;
use crate::ui::theming::ThemeMode;
use crate::ui::toasts::{self, Toast, ToastTiming};
use chrono::{DateTime, Utc};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    endpoint: Endpoint,
    /// Sign-in page resolved against the base URL.
    login_url: Option<String>,
    /// `None` when the configured endpoint cannot be used.
    client: Option<ApiClient>,
    /// Bumped on every new session; tags unread-count requests and keys the
    /// live connection.
    session_epoch: u64,
    center: NotificationCenter,
    dropdown_open: bool,
    toasts: toasts::Manager,
    toast_timing: ToastTiming,
    refresh_interval: Option<Duration>,
    now: DateTime<Utc>,
    last_tick: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("endpoint", &self.endpoint.base_url)
            .field("unread", &self.center.unread().count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 420;

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

    // iced 0.14 requires a Fn boot closure; flags are consumed on the first call
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

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        let endpoint = Endpoint::new(config.server.base_url.clone(), None);
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            theme_mode: ThemeMode::System,
            login_url: endpoint
                .resolve(&config.server.login_path)
                .ok()
                .map(String::from),
            client: ApiClient::new(&endpoint).ok(),
            endpoint,
            session_epoch: 0,
            center: NotificationCenter::new(),
            dropdown_open: false,
            toasts: toasts::Manager::new(),
            toast_timing: config.toast.timing(),
            refresh_interval: None,
            now: Utc::now(),
            last_tick: Instant::now(),
        }
    }
}

impl App {
    /// Loads config, resolves the endpoint and fetches the unread count.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let base_url = flags
            .server
            .clone()
            .unwrap_or_else(|| config.server.base_url.clone());
        let session = flags
            .session
            .clone()
            .or_else(|| config.server.session_cookie.clone());
        let endpoint = Endpoint::new(base_url, session);

        let mut toasts = toasts::Manager::new();
        if let Some(key) = config_warning {
            toasts.push(Toast::warning(key));
        }

        let client = match ApiClient::new(&endpoint) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(
                    %err,
                    base_url = %endpoint.base_url,
                    "cannot use notification server"
                );
                let reason = i18n.tr(err.i18n_key());
                toasts.push(Toast::error("toast-no-client").with_arg("reason", reason));
                None
            }
        };

        let login_url = endpoint
            .resolve(&config.server.login_path)
            .ok()
            .map(String::from);

        tracing::info!(
            base_url = %endpoint.base_url,
            signed_in = endpoint.session_cookie.is_some(),
            locale = %i18n.current_locale(),
            "starting notification client"
        );

        let task = client
            .as_ref()
            .map_or_else(Task::none, |client| update::fetch_unread(client, 0));

        let app = App {
            i18n,
            screen: Screen::Home,
            theme_mode: config.general.theme_mode,
            endpoint,
            login_url,
            client,
            session_epoch: 0,
            center: NotificationCenter::new(),
            dropdown_open: false,
            toasts,
            toast_timing: config.toast.timing(),
            refresh_interval: config.server.refresh_interval(),
            now: Utc::now(),
            last_tick: Instant::now(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.center.unread().badge_text() {
            Some(badge) => format!("({badge}) {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let stream_sub = if self.client.is_some() {
            subscription::create_stream_subscription(
                &self.endpoint,
                self.session_epoch,
                self.screen,
            )
        } else {
            Subscription::none()
        };
        let tick_sub = subscription::create_tick_subscription(self.toasts.has_toasts());
        let refresh_sub =
            subscription::create_refresh_subscription(self.refresh_interval, self.screen);
        let clock_sub = subscription::create_clock_subscription();

        Subscription::batch([stream_sub, tick_sub, refresh_sub, clock_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            client: self.client.as_ref(),
            session_epoch: &mut self.session_epoch,
            center: &mut self.center,
            dropdown_open: &mut self.dropdown_open,
            toasts: &mut self.toasts,
            toast_timing: self.toast_timing,
            i18n: &self.i18n,
        };

        match message {
            Message::Bell(message) => update::handle_bell_message(&mut ctx, message),
            Message::Dropdown(message) => update::handle_dropdown_message(&mut ctx, message),
            Message::Page(message) => update::handle_page_message(&mut ctx, message),
            Message::SignIn(message) => update::handle_sign_in_message(&mut ctx, message),
            Message::Toast(message) => {
                ctx.toasts.handle_message(&message);
                Task::none()
            }
            Message::Stream(event) => {
                update::handle_stream_event(&mut ctx, event);
                Task::none()
            }
            Message::UnreadCountFetched { epoch, result } => {
                update::handle_unread_count(&mut ctx, epoch, result);
                Task::none()
            }
            Message::ListLoaded {
                kind,
                ticket,
                result,
            } => {
                update::handle_list_loaded(&mut ctx, kind, ticket, result);
                Task::none()
            }
            Message::MarkReadDone { id, result } => {
                update::handle_mark_read_done(&mut ctx, &id, result);
                Task::none()
            }
            Message::MarkAllReadDone(result) => {
                update::handle_mark_all_read_done(&mut ctx, result);
                Task::none()
            }
            Message::DeleteDone { id, result } => {
                update::handle_delete_done(&mut ctx, &id, result);
                Task::none()
            }
            Message::RefreshUnread => match self.client.as_ref() {
                Some(client) => update::fetch_unread(client, self.session_epoch),
                None => Task::none(),
            },
            Message::ClockTick => {
                self.now = Utc::now();
                Task::none()
            }
            Message::Tick(now) => {
                self.last_tick = now;
                self.toasts.tick_at(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            center: &self.center,
            dropdown_open: self.dropdown_open,
            toasts: &self.toasts,
            login_url: self.login_url.as_deref(),
            now: self.now,
            instant: self.last_tick,
        })
    }
}
