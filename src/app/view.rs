// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::message::{Message, Sample};
use crate::notifications::{Surface, TaskScheduler};
use crate::ui::tokens::{spacing, typography};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub surface: &'a Surface<TaskScheduler>,
    pub default_lifetime_ms: u128,
    pub logged_events: usize,
}

/// Renders the producer buttons with the toast overlay stacked on top.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let buttons = Sample::ALL.iter().fold(Row::new().spacing(spacing::XS), |row, sample| {
        row.push(button(Text::new(sample.label())).on_press(Message::Publish(*sample)))
    });

    let status = Text::new(format!(
        "{} visible · default lifetime {} ms · {} diagnostic events",
        ctx.surface.visible_count(),
        ctx.default_lifetime_ms,
        ctx.logged_events,
    ))
    .size(typography::BODY_SM);

    let content = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new("Toast Surface").size(typography::TITLE_LG))
            .push(buttons)
            .push(status),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD);

    Stack::new()
        .push(content)
        .push(ctx.surface.view().map(Message::Toast))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
