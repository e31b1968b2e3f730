// SPDX-License-Identifier: MPL-2.0
//! Dropdown panel under the bell.
//!
//! Header with "mark all read", the recent notifications, and a footer
//! link to the full page. Clicking a row marks it read.

use crate::domain::notification::NotificationId;
use crate::i18n::fluent::I18n;
use crate::state::NotificationList;
use crate::ui::design_tokens::{border, radius, shadow, spacing, typography};
use crate::ui::{feed, item};
use chrono::{DateTime, Utc};
use iced::font::Weight;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Border, Element, Font, Length, Theme};

/// Panel width.
pub const DROPDOWN_WIDTH: f32 = 360.0;

/// Panel height.
pub const DROPDOWN_HEIGHT: f32 = 420.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub list: &'a NotificationList,
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Feed(feed::Message),
    MarkAllRead,
    ViewAll,
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    MarkRead(NotificationId),
    MarkAllRead,
    Reload,
    OpenPage,
}

pub fn update(message: Message, open: &mut bool) -> Event {
    match message {
        Message::Feed(feed::Message::Item(item::Message::Open(id))) => Event::MarkRead(id),
        // Rows are built without a delete button
        Message::Feed(feed::Message::Item(item::Message::Delete(_))) => Event::None,
        Message::Feed(feed::Message::Retry) => Event::Reload,
        Message::MarkAllRead => Event::MarkAllRead,
        Message::ViewAll => {
            *open = false;
            Event::OpenPage
        }
        Message::Close => {
            *open = false;
            Event::None
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("dropdown-title"))
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                }),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("dropdown-mark-all-read")).size(typography::BODY_SM))
                .on_press(Message::MarkAllRead)
                .style(button::text),
        )
        .push(
            button(Text::new("✕").size(typography::BODY_SM))
                .on_press(Message::Close)
                .style(button::text),
        );

    let body = feed::view(feed::ViewContext {
        i18n: ctx.i18n,
        list: ctx.list,
        now: ctx.now,
        deletable: false,
        empty_key: "dropdown-empty",
    })
    .map(Message::Feed);

    let footer = button(Text::new(ctx.i18n.tr("dropdown-view-all")).size(typography::BODY_SM))
        .on_press(Message::ViewAll)
        .width(Length::Fill)
        .style(button::text);

    let panel = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(divider())
        .push(Container::new(body).height(Length::Fill))
        .push(divider())
        .push(footer);

    Container::new(panel)
        .width(Length::Fixed(DROPDOWN_WIDTH))
        .height(Length::Fixed(DROPDOWN_HEIGHT))
        .padding(spacing::SM)
        .style(panel_style)
        .into()
}

fn divider<'a>() -> Element<'a, Message> {
    Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(border::WIDTH_SM))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.strong.color.into()),
            ..Default::default()
        })
        .into()
}

fn panel_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            radius: radius::MD.into(),
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
