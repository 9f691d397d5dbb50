// SPDX-License-Identifier: MPL-2.0
//! Media viewer shell and its sub-components.
//!
//! The host renders the media surface itself (video element or image) and
//! passes it to [`view`], which adds the close button, the loading label
//! and, for videos, the controls toolbar. Keyboard input reaches the shell
//! through [`subscription`].

pub mod component;
pub mod subcomponents;
pub mod video_controls;

use self::component::{Message, State};
use self::subcomponents::zoom_pan;
use crate::application::port::MediaElement;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{
    button, column, container, mouse_area, opaque, row, stack, text, tooltip, Space, Text,
};
use iced::{alignment, event, keyboard, Element, Event, Length, Subscription};

pub use component::{Content, Effect, OpenMedia, Variant};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the open shell around `media`. A closed shell renders nothing.
///
/// The backdrop sits behind everything else. Presses that land on the
/// media, the controls or a button never reach it.
pub fn view<'a, E: MediaElement>(
    ctx: ViewContext<'a>,
    shell: &State<E>,
    media: Element<'a, Message>,
) -> Element<'a, Message> {
    if !shell.is_open() {
        return Space::new().width(Length::Shrink).into();
    }

    let close_button = header_button(
        "✕",
        Message::Close,
        ctx.i18n.tr("viewer-close-tooltip"),
    );

    let mut header = row![Space::new().width(Length::Fill)]
        .spacing(spacing::XS)
        .padding(spacing::XS);
    if shell.image().is_some_and(|image| image.transform().is_some()) {
        header = header.push(header_button(
            "1:1",
            Message::Image(zoom_pan::Message::Reset),
            ctx.i18n.tr("viewer-zoom-reset-tooltip"),
        ));
    }
    header = header.push(close_button);

    let media = opaque(media);
    let body: Element<'a, Message> = if shell.shows_spinner() {
        column![media, text(ctx.i18n.tr("viewer-loading")).size(sizing::ICON_SM)]
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .into()
    } else {
        media
    };

    let mut layout = column![
        header,
        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    ];

    if let Some(video) = shell.video() {
        let controls = video_controls::view(
            video_controls::ViewContext { i18n: ctx.i18n },
            video.playback_state(),
        )
        .map(|msg| Message::Video(msg.into()));
        layout = layout.push(opaque(container(controls).padding(spacing::MD)));
    }

    let backdrop = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::BackdropClicked);

    stack![backdrop, layout]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Keyboard input for an open shell.
///
/// Keys already consumed by a focused widget are dropped, except Escape,
/// which always reaches the shell.
pub fn subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| map_event(&event, status))
}

/// Maps a runtime event to a shell message.
#[must_use]
pub fn map_event(event: &Event, status: event::Status) -> Option<Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return None;
    };

    let is_escape = matches!(key, keyboard::Key::Named(keyboard::key::Named::Escape));
    match status {
        event::Status::Ignored => Some(Message::KeyPressed(key.clone())),
        event::Status::Captured if is_escape => Some(Message::KeyPressed(key.clone())),
        event::Status::Captured => None,
    }
}

fn header_button<'a>(glyph: &'a str, on_press: Message, tip: String) -> Element<'a, Message> {
    tooltip(
        button(text(glyph).size(sizing::ICON_SM))
            .on_press(on_press)
            .padding(spacing::XS)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::control),
        Text::new(tip),
        tooltip::Position::Bottom,
    )
    .gap(4)
    .into()
}
