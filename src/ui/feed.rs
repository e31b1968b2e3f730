// SPDX-License-Identifier: MPL-2.0
//! Body of a notification list: loading, failed, empty or the rows.

use crate::i18n::fluent::I18n;
use crate::state::{LoadStatus, NotificationList};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::item;
use chrono::{DateTime, Utc};
use iced::widget::{button, scrollable, text, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub list: &'a NotificationList,
    pub now: DateTime<Utc>,
    /// Rows get a delete button.
    pub deletable: bool,
    /// Message shown when the list is empty.
    pub empty_key: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Item(item::Message),
    Retry,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let list = ctx.list;

    match list.status() {
        LoadStatus::Loading => return placeholder(ctx.i18n.tr("list-loading")),
        LoadStatus::Failed(err) if list.is_empty() => return failed(ctx.i18n, err.i18n_key()),
        _ => {}
    }
    if list.is_empty() {
        return placeholder(ctx.i18n.tr(ctx.empty_key));
    }

    let mut rows = Column::new().spacing(spacing::XXS).width(Length::Fill);
    if let LoadStatus::Failed(err) = list.status() {
        // Stale rows stay visible under the error
        rows = rows.push(failed(ctx.i18n, err.i18n_key()));
    }
    for notification in list.iter() {
        rows = rows.push(
            item::view(item::ViewContext {
                i18n: ctx.i18n,
                notification,
                now: ctx.now,
                deletable: ctx.deletable,
            })
            .map(Message::Item),
        );
    }

    scrollable(rows).height(Length::Fill).into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .into()
}

fn failed<'a>(i18n: &I18n, error_key: &str) -> Element<'a, Message> {
    let message = Text::new(format!("{} ({})", i18n.tr("list-failed"), i18n.tr(error_key)))
        .size(typography::BODY_SM)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ERROR_500),
        });
    let retry = button(Text::new(i18n.tr("list-retry")).size(typography::BODY_SM))
        .on_press(Message::Retry)
        .style(button::secondary);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(message)
            .push(retry),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .into()
}
