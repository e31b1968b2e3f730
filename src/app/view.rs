// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state. Toasts are layered on top of every screen.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::state::{ListKind, NotificationCenter};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::toasts::{self, view as toast_view};
use crate::ui::{bell, dropdown, page, sign_in};
use chrono::{DateTime, Utc};
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{Column, Container, Row, Space, Stack, Text};
use iced::{Element, Font, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub center: &'a NotificationCenter,
    pub dropdown_open: bool,
    pub toasts: &'a toasts::Manager,
    pub login_url: Option<&'a str>,
    /// Wall clock for relative timestamps.
    pub now: DateTime<Utc>,
    /// Monotonic clock for toast phases.
    pub instant: Instant,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => view_home(&ctx),
        Screen::Notifications => page::view(page::ViewContext {
            i18n: ctx.i18n,
            list: ctx.center.list(ListKind::Page),
            filter: ctx.center.page_filter(),
            now: ctx.now,
        })
        .map(Message::Page),
        Screen::SignIn => sign_in::view(sign_in::ViewContext {
            i18n: ctx.i18n,
            login_url: ctx.login_url,
        })
        .map(Message::SignIn),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(toast_view::overlay(ctx.toasts, ctx.i18n, ctx.instant).map(Message::Toast))
        .into()
}

fn view_home<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("home-title"))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        });

    let bell = bell::view(bell::ViewContext {
        i18n: ctx.i18n,
        unread: ctx.center.unread().count(),
        open: ctx.dropdown_open,
    })
    .map(Message::Bell);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(bell);

    let mut content = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(header);

    if ctx.dropdown_open {
        let panel = dropdown::view(dropdown::ViewContext {
            i18n: ctx.i18n,
            list: ctx.center.list(ListKind::Dropdown),
            now: ctx.now,
        })
        .map(Message::Dropdown);
        content = content.push(
            Container::new(panel)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );
    } else {
        content = content.push(
            Container::new(Text::new(ctx.i18n.tr("home-hint")).size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        );
    }

    content.into()
}
