// SPDX-License-Identifier: MPL-2.0
//! Shown when the server rejects the session.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, text, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Where the user can sign in; `None` if the base URL is unusable.
    pub login_url: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Try the session again (after signing in through the browser).
    Retry,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("sign-in-title")).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr("sign-in-description")).size(typography::BODY));

    if let Some(url) = ctx.login_url {
        content = content.push(
            Text::new(url)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().primary),
                }),
        );
    }

    content = content.push(
        button(Text::new(ctx.i18n.tr("sign-in-retry")))
            .on_press(Message::Retry)
            .padding([spacing::XS, spacing::LG])
            .style(button::primary),
    );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill)
        .into()
}
