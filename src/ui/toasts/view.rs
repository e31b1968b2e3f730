// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! Toasts appear as small cards with a severity-colored accent, stacked in
//! the top-right corner. Each toast fades with its lifecycle phase.

use super::manager::{Manager, Message};
use super::toast::{Body, Toast};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::font::Weight;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};
use std::time::Instant;

/// Renders a single toast, or nothing while it is hidden.
pub fn toast<'a>(toast: &'a Toast, i18n: &'a I18n, now: Instant) -> Option<Element<'a, Message>> {
    let alpha = toast.phase_at(now).opacity();
    if alpha <= 0.0 {
        return None;
    }
    let accent_color = toast.severity().color();

    let (glyph, body): (&str, Element<'a, Message>) = match toast.body() {
        Body::Delivered {
            glyph,
            title,
            message,
        } => {
            let title = Text::new(title.as_str())
                .size(typography::BODY_LG)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                })
                .style(move |theme: &Theme| faded_text(theme, alpha));
            let message = Text::new(message.as_str())
                .size(typography::BODY)
                .style(move |theme: &Theme| faded_text(theme, alpha));
            (
                *glyph,
                Column::new()
                    .spacing(spacing::XXS)
                    .push(title)
                    .push(message)
                    .into(),
            )
        }
        Body::Status {
            message_key,
            message_args,
        } => {
            let message_text = if message_args.is_empty() {
                i18n.tr(message_key)
            } else {
                let args: Vec<(&str, &str)> = message_args
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();
                i18n.tr_with_args(message_key, &args)
            };
            (
                toast.severity().glyph(),
                Text::new(message_text)
                    .size(typography::BODY)
                    .style(move |theme: &Theme| faded_text(theme, alpha))
                    .into(),
            )
        }
    };

    let glyph_widget = Text::new(glyph)
        .size(sizing::GLYPH)
        .style(move |_theme: &Theme| text::Style {
            color: Some(Color {
                a: alpha,
                ..accent_color
            }),
        });

    let dismiss_button = button(Text::new("✕").size(typography::BODY_SM))
        .on_press(Message::Dismiss(toast.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    // Layout: [glyph] [body] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(glyph_widget).padding(spacing::XXS))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Some(
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha))
            .into(),
    )
}

/// Renders every visible toast, stacked in the top-right corner.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> = manager
        .visible()
        .filter_map(|t| toast(t, i18n, now))
        .collect();

    if toasts.is_empty() {
        // Empty container that takes no space
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::LG)
            .into()
    }
}

fn faded_text(theme: &Theme, alpha: f32) -> text::Style {
    text::Style {
        color: Some(Color {
            a: alpha,
            ..theme.palette().text
        }),
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color {
                a: alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| iced::Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
