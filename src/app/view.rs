// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo screen.

use super::delegate::Interaction;
use super::Message;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::toast::{self, Container};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, text_input, toggler, Column, Container as Frame, Stack, Text};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the demo.
pub struct ViewContext<'a> {
    pub message: &'a str,
    pub animated: bool,
    pub last_interaction: Option<Interaction>,
    pub interactions: usize,
    pub container: Option<&'a Container>,
    pub now: Instant,
}

/// Renders the form with the toast overlay stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new("Simple Toast").size(typography::TITLE_MD);

    let input = text_input("Toast message", ctx.message)
        .on_input(Message::MessageChanged)
        .on_submit(Message::ShowToast)
        .padding(spacing::XS)
        .size(typography::BODY);

    let animated = toggler(ctx.animated)
        .label("Animated")
        .on_toggle(Message::AnimatedToggled)
        .text_size(typography::BODY);

    let show = button(text("Show toast").size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::ShowToast);

    let status = Text::new(interaction_status(ctx.last_interaction.as_ref(), ctx.interactions))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let form = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_MAX_WIDTH)
        .align_x(Horizontal::Center)
        .push(title)
        .push(input)
        .push(animated)
        .push(show)
        .push(status);

    let content = Frame::new(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content);

    if let Some(container) = ctx.container {
        stack = stack.push(toast::view(container, ctx.now).map(Message::Toast));
    }

    stack.into()
}

fn interaction_status(last: Option<&Interaction>, count: usize) -> String {
    match last {
        None => "Tap or swipe a toast to notify its delegate.".to_string(),
        Some(interaction) => format!(
            "Delegate called {count} time(s); last: {} with payload {}",
            interaction.toast,
            interaction.payload.as_deref().unwrap_or("<none>")
        ),
    }
}
