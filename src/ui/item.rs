// SPDX-License-Identifier: MPL-2.0
//! A single notification row, shared by the dropdown and the full page.
//!
//! Shows the type glyph, title, message and a coarse "time ago" label.
//! Unread rows are highlighted and carry a dot.

use crate::domain::notification::{Notification, NotificationId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use chrono::{DateTime, Utc};
use iced::font::Weight;
use iced::widget::{button, container, text, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Background, Border, Color, Element, Font, Length, Theme};

/// Coarse age of a notification, as shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elapsed {
    /// Under a minute, or a timestamp in the future.
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl Elapsed {
    /// Buckets the time between `created_at` and `now`. Each bucket is floored.
    #[must_use]
    pub fn between(created_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let seconds = (now - created_at).num_seconds();
        match seconds {
            s if s < 60 => Elapsed::JustNow,
            s if s < 3_600 => Elapsed::Minutes(s / 60),
            s if s < 86_400 => Elapsed::Hours(s / 3_600),
            s => Elapsed::Days(s / 86_400),
        }
    }

    /// Localized label, e.g. "5 minutes ago".
    pub fn label(&self, i18n: &I18n) -> String {
        let (key, count) = match self {
            Elapsed::JustNow => return i18n.tr("elapsed-just-now"),
            Elapsed::Minutes(n) => ("elapsed-minutes", n),
            Elapsed::Hours(n) => ("elapsed-hours", n),
            Elapsed::Days(n) => ("elapsed-days", n),
        };
        i18n.tr_with_args(key, &[("count", &count.to_string())])
    }
}

/// Contextual data needed to render one notification row.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub notification: &'a Notification,
    /// Wall clock used for the elapsed label.
    pub now: DateTime<Utc>,
    /// Whether a delete button is shown (full page only).
    pub deletable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The row was clicked; marks it read.
    Open(NotificationId),
    Delete(NotificationId),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let notification = ctx.notification;
    let unread = notification.is_unread();

    let title = Text::new(notification.title.as_str())
        .size(typography::BODY)
        .font(Font {
            weight: if unread { Weight::Bold } else { Weight::Normal },
            ..Font::DEFAULT
        });
    let message = Text::new(notification.message.as_str())
        .size(typography::BODY_SM)
        .style(muted_text);
    let elapsed = Text::new(Elapsed::between(notification.created_at, ctx.now).label(ctx.i18n))
        .size(typography::CAPTION)
        .style(muted_text);

    let body = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(title)
        .push(message)
        .push(elapsed);

    let marker: Element<'a, Message> = if unread {
        Container::new(Space::new())
            .width(Length::Fixed(sizing::UNREAD_DOT))
            .height(Length::Fixed(sizing::UNREAD_DOT))
            .style(unread_dot_style)
            .into()
    } else {
        Space::new()
            .width(Length::Fixed(sizing::UNREAD_DOT))
            .into()
    };

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(notification.kind.glyph()).size(sizing::GLYPH))
        .push(body)
        .push(marker);

    let row_button = button(content)
        .on_press(Message::Open(notification.id.clone()))
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(move |theme: &Theme, status| row_style(theme, status, unread));

    if ctx.deletable {
        let delete_label = ctx.i18n.tr("notification-delete");
        let delete_button = button(Text::new(delete_label).size(typography::BODY_SM))
            .on_press(Message::Delete(notification.id.clone()))
            .padding([spacing::XXS, spacing::XS])
            .style(button::danger);

        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(row_button)
            .push(delete_button)
            .into()
    } else {
        row_button.into()
    }
}

fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color {
            a: opacity::OVERLAY_STRONG,
            ..theme.palette().text
        }),
    }
}

fn unread_dot_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().primary)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn row_style(theme: &Theme, status: button::Status, unread: bool) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette.background.strong.color))
        }
        _ if unread => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette.primary.weak.color
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
