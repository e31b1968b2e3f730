// SPDX-License-Identifier: MPL-2.0
//! Bell button with the unread badge.

use crate::i18n::fluent::I18n;
use crate::state::unread::badge_text;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, Container, Row, Text};
use iced::{alignment::Vertical, Background, Border, Element, Theme};

const BELL_GLYPH: &str = "🔔";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub unread: u64,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Toggle,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The dropdown was just opened and needs fresh content.
    Opened,
    Closed,
}

pub fn update(message: Message, open: &mut bool) -> Event {
    match message {
        Message::Toggle => {
            *open = !*open;
            if *open {
                Event::Opened
            } else {
                Event::Closed
            }
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(Text::new(BELL_GLYPH).size(sizing::GLYPH));

    if let Some(badge) = badge_text(ctx.unread) {
        content = content.push(
            Container::new(Text::new(badge).size(typography::CAPTION))
                .padding([0.0, spacing::XXS])
                .style(badge_style),
        );
    }

    let label = ctx.i18n.tr("bell-label");
    let style: fn(&Theme, button::Status) -> button::Style = if ctx.open {
        button::primary
    } else {
        button::text
    };
    let bell = button(content)
        .on_press(Message::Toggle)
        .padding(spacing::XS)
        .style(style);

    iced::widget::tooltip(
        bell,
        Text::new(label).size(typography::BODY_SM),
        iced::widget::tooltip::Position::Bottom,
    )
    .into()
}

fn badge_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ERROR_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
