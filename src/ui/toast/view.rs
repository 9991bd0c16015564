// SPDX-License-Identifier: MPL-2.0
//! Renders a container's toasts as an Iced overlay.
//!
//! Place the result in a `Stack` above the screen content. Every layer spans
//! the full width; its filler strip covers whatever part of the safe area
//! lies above the banner.

use super::container::{Container, Layer};
use super::gesture::PointerEvent;
use super::message::Message;
use crate::ui::design_tokens::{spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, mouse_area, text, Column, Space, Stack, Text};
use iced::{font, Background, Color, Element, Font, Length, Theme};
use std::time::Instant;

const LABEL_FONT: Font = Font {
    weight: font::Weight::Medium,
    ..Font::DEFAULT
};

/// Renders every attached toast, oldest at the bottom of the stack.
pub fn view(container: &Container, now: Instant) -> Element<'_, Message> {
    let layers: Vec<Element<'_, Message>> = container
        .layers()
        .iter()
        .map(|layer| layer_view(layer, container.safe_area_top(), now))
        .collect();

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn layer_view(layer: &Layer, safe_area_top: f32, now: Instant) -> Element<'_, Message> {
    let toast = layer.toast();
    let id = toast.id();
    let alpha = toast.opacity_at(now);
    let background = toast.background_color().scale_alpha(alpha);
    let label_color = toast.text_color().scale_alpha(alpha);

    let filler_color = layer.filler().color.scale_alpha(alpha);
    let (offset, filler_height) = visible_filler(layer, safe_area_top);

    let filler = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(filler_height))
        .style(move |_theme: &Theme| banner_style(filler_color));

    let label = Text::new(toast.text())
        .size(typography::TOAST_LABEL)
        .font(LABEL_FONT)
        .color(label_color)
        .wrapping(text::Wrapping::None);

    let banner = container(label)
        .width(Length::Fill)
        .height(Length::Fixed(layer.frame().height))
        .padding([0.0, spacing::TOAST_LABEL_INSET])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .clip(true)
        .style(move |_theme: &Theme| banner_style(background));

    let banner = mouse_area(banner)
        .on_move(move |position| Message::Pointer(id, PointerEvent::Moved(position)))
        .on_press(Message::Pointer(id, PointerEvent::Pressed))
        .on_release(Message::Pointer(id, PointerEvent::Released))
        .on_exit(Message::Pointer(id, PointerEvent::Exited));

    Column::new()
        .width(Length::Fill)
        .push(Space::new().height(Length::Fixed(offset)))
        .push(filler)
        .push(banner)
        .into()
}

/// Returns the empty space above the filler and the filler's on-screen height.
fn visible_filler(layer: &Layer, safe_area_top: f32) -> (f32, f32) {
    let filler = layer.filler().frame;
    let top = filler.y.max(0.0);
    let height = (filler.y + filler.height - top).max(0.0);
    (top, height.min(safe_area_top))
}

fn banner_style(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::{ShowOptions, Step, Toast};
    use std::time::Duration;

    fn attach(container: &mut Container, height: f32) {
        let mut steps: Vec<(Duration, Step)> = Vec::new();
        let options = ShowOptions {
            target_height: height,
            ..ShowOptions::default()
        };
        Toast::new("x").show(container, &mut steps, options, Instant::now());
    }

    #[test]
    fn filler_covers_short_safe_area() {
        let mut container = Container::new(320.0).with_safe_area_top(20.0);
        attach(&mut container, 50.0);

        let layer = &container.layers()[0];
        assert_eq!(visible_filler(layer, container.safe_area_top()), (0.0, 20.0));
    }

    #[test]
    fn filler_is_clipped_above_tall_safe_area() {
        let mut container = Container::new(320.0).with_safe_area_top(80.0);
        attach(&mut container, 50.0);

        let layer = &container.layers()[0];
        assert_eq!(visible_filler(layer, container.safe_area_top()), (30.0, 50.0));
    }

    #[test]
    fn no_safe_area_means_no_filler() {
        let mut container = Container::new(320.0);
        attach(&mut container, 50.0);

        let layer = &container.layers()[0];
        assert_eq!(visible_filler(layer, container.safe_area_top()), (0.0, 0.0));
    }

    #[test]
    fn banner_style_uses_given_color() {
        let style = banner_style(Color::from_rgb(1.0, 0.0, 0.0));
        assert_eq!(
            style.background,
            Some(Background::Color(Color::from_rgb(1.0, 0.0, 0.0)))
        );
    }
}
