// SPDX-License-Identifier: MPL-2.0
//! Full notification page: filter tabs, every notification, per-row delete.

use crate::domain::notification::NotificationId;
use crate::i18n::fluent::I18n;
use crate::state::{Filter, NotificationList};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{feed, item};
use chrono::{DateTime, Utc};
use iced::font::Weight;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Font, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub list: &'a NotificationList,
    pub filter: Filter,
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Feed(feed::Message),
    SetFilter(Filter),
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Load(Filter),
    MarkRead(NotificationId),
    Delete(NotificationId),
    Back,
}

/// `current` is the filter the page is showing; retrying reloads with it.
pub fn update(message: Message, current: Filter) -> Event {
    match message {
        Message::Feed(feed::Message::Item(item::Message::Open(id))) => Event::MarkRead(id),
        Message::Feed(feed::Message::Item(item::Message::Delete(id))) => Event::Delete(id),
        Message::Feed(feed::Message::Retry) => Event::Load(current),
        // Selecting a tab always refetches, even the active one
        Message::SetFilter(filter) => Event::Load(filter),
        Message::Back => Event::Back,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back = button(Text::new(ctx.i18n.tr("page-back")).size(typography::BODY_SM))
        .on_press(Message::Back)
        .style(button::text);

    let title = Text::new(ctx.i18n.tr("page-title"))
        .size(typography::TITLE_LG)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        });

    let tabs = Row::new()
        .spacing(spacing::XS)
        .push(tab(ctx.i18n.tr("page-filter-all"), Filter::All, ctx.filter))
        .push(tab(
            ctx.i18n.tr("page-filter-unread"),
            Filter::UnreadOnly,
            ctx.filter,
        ));

    let empty_key = match ctx.filter {
        Filter::All => "page-empty",
        Filter::UnreadOnly => "page-empty-unread",
    };
    let body = feed::view(feed::ViewContext {
        i18n: ctx.i18n,
        list: ctx.list,
        now: ctx.now,
        deletable: true,
        empty_key,
    })
    .map(Message::Feed);

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(back)
        .push(Space::new().width(Length::Fill));

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .max_width(720.0)
        .push(header)
        .push(title)
        .push(tabs)
        .push(body);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn tab<'a>(label: String, filter: Filter, active: Filter) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if filter == active {
        button::primary
    } else {
        button::secondary
    };
    button(Text::new(label).size(typography::BODY))
        .on_press(Message::SetFilter(filter))
        .padding([spacing::XS, spacing::MD])
        .style(style)
        .into()
}
