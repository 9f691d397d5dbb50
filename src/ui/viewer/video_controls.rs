// SPDX-License-Identifier: MPL-2.0
//! Video playback controls UI.
//!
//! Provides a toolbar with play/pause, timeline scrubber, time readout,
//! volume and fullscreen controls. Hidden controls render nothing.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use crate::video_player::PlaybackState;
use iced::widget::{button, container, row, slider, text, tooltip, Row, Space, Text};
use iced::{Element, Length};

/// Timeline slider step as a ratio of the duration.
const TIMELINE_STEP: f64 = 0.001;

/// Volume slider step.
const VOLUME_STEP: f32 = 0.01;

/// Messages emitted by video control widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Toggle play/pause state.
    TogglePlayback,

    /// Seek to a ratio of the duration (0.0 to 1.0).
    Seek(f64),

    /// Adjust volume (0.0 to 1.0).
    SetVolume(f32),

    /// Toggle mute state.
    ToggleMute,

    /// Toggle fullscreen.
    ToggleFullscreen,
}

/// View context for rendering video controls.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the video controls toolbar.
///
/// Returns a Row with:
/// - Play/Pause button
/// - Timeline slider (disabled until the duration is known)
/// - Time readout
/// - Mute button and volume slider
/// - Fullscreen button
pub fn view<'a>(ctx: ViewContext<'a>, state: &PlaybackState) -> Element<'a, Message> {
    if !state.controls_visible {
        return Space::new().width(Length::Fill).into();
    }

    let play_pause = control_button(
        if state.is_playing { "❚❚" } else { "▶" },
        Message::TogglePlayback,
        false,
        ctx.i18n.tr(if state.is_playing {
            "video-pause-tooltip"
        } else {
            "video-play-tooltip"
        }),
    );

    // Without a duration the slider has nothing to seek to
    let timeline: Element<'a, Message> = if state.has_duration() {
        slider(0.0..=1.0, state.progress_ratio(), Message::Seek)
            .step(TIMELINE_STEP)
            .width(Length::Fill)
            .into()
    } else {
        slider(0.0..=1.0, 0.0, |_| Message::Seek(0.0))
            .width(Length::Fill)
            .into()
    };

    let readout = if state.is_buffering {
        format!("{} · {}", state.time_readout(), ctx.i18n.tr("video-buffering"))
    } else {
        state.time_readout()
    };
    let time_display = text(readout).size(sizing::ICON_SM);

    let mute = control_button(
        if state.is_silent() { "🔇" } else { "🔊" },
        Message::ToggleMute,
        state.muted,
        ctx.i18n.tr(if state.muted {
            "video-unmute-tooltip"
        } else {
            "video-mute-tooltip"
        }),
    );

    let volume_slider = tooltip(
        slider(0.0..=1.0, state.volume.value(), Message::SetVolume)
            .step(VOLUME_STEP)
            .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH)),
        Text::new(ctx.i18n.tr("video-volume-label")),
        tooltip::Position::Top,
    )
    .gap(4);

    let fullscreen = control_button(
        "⛶",
        Message::ToggleFullscreen,
        state.is_fullscreen,
        ctx.i18n.tr(if state.is_fullscreen {
            "video-exit-fullscreen-tooltip"
        } else {
            "video-fullscreen-tooltip"
        }),
    );

    let controls: Row<'a, Message> = row![
        play_pause,
        timeline,
        time_display,
        mute,
        volume_slider,
        fullscreen,
    ]
    .spacing(spacing::XS)
    .padding(spacing::XS)
    .align_y(iced::Alignment::Center);

    container(controls)
        .width(Length::Fill)
        .padding(spacing::XXS)
        .style(styles::container::controls_bar)
        .into()
}

fn control_button<'a>(
    glyph: &'a str,
    on_press: Message,
    active: bool,
    tooltip_text: String,
) -> Element<'a, Message> {
    let base = button(text(glyph).size(sizing::ICON_SM))
        .on_press(on_press)
        .padding(spacing::XS)
        .width(Length::Shrink)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));

    let content: Element<'a, Message> = if active {
        base.style(styles::button::selected).into()
    } else {
        base.style(styles::button::control).into()
    };

    tooltip(content, Text::new(tooltip_text), tooltip::Position::Top)
        .gap(4)
        .into()
}
