// SPDX-License-Identifier: MPL-2.0
//! Viewer shell: the full-screen modal hosting one video or image.
//!
//! The shell is either closed or open on one [`MediaItem`]. While open it
//! owns the matching sub-component: a video player for `video`, a zoom/pan
//! state for `image`. Closing drops the sub-component, including the media
//! element and any pending controls deadline.

use crate::application::port::MediaElement;
use crate::config::{Config, ViewerConfig};
use crate::diagnostics::{CloseReason, DiagnosticsHandle, UserAction};
use crate::domain::media::{MediaItem, MediaKind};
use crate::ui::viewer::subcomponents::{video_playback, zoom_pan};
use crate::video_player::{ElementEvent, PlayerSettings, VideoPlayer};
use iced::keyboard::{key, Key};
use std::time::Instant;

/// Which modal the shell is presented as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Media lightbox; the backdrop does not close it.
    #[default]
    Lightbox,
    /// Post detail modal; a backdrop click closes it.
    PostDetail,
}

/// The sub-component hosted for the open item.
#[derive(Debug)]
pub enum Content<E: MediaElement> {
    Video(video_playback::State<E>),
    Image(zoom_pan::State),
}

/// The open item with its content and load flag.
#[derive(Debug)]
pub struct OpenMedia<E: MediaElement> {
    item: MediaItem,
    content: Content<E>,
    /// Drives the spinner until the media reports it has loaded.
    loaded: bool,
}

impl<E: MediaElement> OpenMedia<E> {
    #[must_use]
    pub fn item(&self) -> &MediaItem {
        &self.item
    }

    #[must_use]
    pub fn content(&self) -> &Content<E> {
        &self.content
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

/// Messages handled by the viewer shell.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close button pressed.
    Close,
    /// Click on the backdrop around the media.
    BackdropClicked,
    /// Key pressed while the viewer has focus.
    KeyPressed(Key),
    /// The media element reported it has loaded.
    MediaLoaded,
    /// Message for the hosted video player.
    Video(video_playback::Message),
    /// Message for the hosted image zoom/pan.
    Image(zoom_pan::Message),
}

/// Side effects the host should perform after handling a shell message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The shell opened (or switched to) an item of this kind.
    Opened(MediaKind),
    /// The shell closed.
    Closed(CloseReason),
    /// The spinner should be removed.
    ///
    /// For videos this replaces the player's own effect for the metadata
    /// event. Metadata only ever changes the duration, so `Loaded` also
    /// means the controls need a refresh.
    Loaded,
    /// Effect from the hosted video player.
    Video(video_playback::Effect),
    /// Effect from the hosted image zoom/pan.
    Image(zoom_pan::Effect),
}

/// Viewer shell state.
#[derive(Debug)]
pub struct State<E: MediaElement> {
    variant: Variant,
    open: Option<OpenMedia<E>>,
    player_settings: PlayerSettings,
    viewer_config: ViewerConfig,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<E: MediaElement> State<E> {
    /// Creates a closed shell.
    #[must_use]
    pub fn new(variant: Variant, config: &Config) -> Self {
        Self {
            variant,
            open: None,
            player_settings: PlayerSettings::from_config(&config.player),
            viewer_config: config.viewer.clone(),
            diagnostics: None,
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Opens `item`, replacing any open item and resetting `loaded`.
    ///
    /// `make_element` is called with the media `src` only for videos.
    pub fn open(&mut self, item: MediaItem, make_element: impl FnOnce(&str) -> E) -> Effect {
        let content = match item.kind {
            MediaKind::Video => {
                let player = VideoPlayer::new(make_element(&item.src), self.player_settings);
                let mut video = video_playback::State::new(player);
                if let Some(handle) = &self.diagnostics {
                    video.set_diagnostics(handle.clone());
                }
                Content::Video(video)
            }
            MediaKind::Image => {
                let mut image = zoom_pan::State::new(&self.viewer_config);
                if let Some(handle) = &self.diagnostics {
                    image.set_diagnostics(handle.clone());
                }
                Content::Image(image)
            }
        };

        let kind = item.kind;
        tracing::debug!("viewer open: {kind} {}", item.src);
        self.log_action(UserAction::OpenViewer { kind });
        self.open = Some(OpenMedia {
            item,
            content,
            loaded: false,
        });
        Effect::Opened(kind)
    }

    /// Handle a shell message. Messages for a closed shell are ignored.
    pub fn handle(&mut self, msg: Message) -> Effect {
        self.handle_at(msg, Instant::now())
    }

    /// Handle a shell message at a given instant.
    pub fn handle_at(&mut self, msg: Message, now: Instant) -> Effect {
        let Some(open) = self.open.as_mut() else {
            return Effect::None;
        };

        match msg {
            Message::Close => self.close(CloseReason::CloseButton),
            Message::BackdropClicked => match self.variant {
                Variant::PostDetail => self.close(CloseReason::Backdrop),
                Variant::Lightbox => Effect::None,
            },
            Message::KeyPressed(Key::Named(key::Named::Escape)) => {
                self.close(CloseReason::EscapeKey)
            }
            Message::KeyPressed(key) => match &mut open.content {
                Content::Video(video) => {
                    Effect::Video(video.handle_at(video_playback::Message::KeyPressed(key), now))
                }
                Content::Image(_) => Effect::None,
            },
            Message::MediaLoaded => Self::mark_loaded(open),
            Message::Video(msg) => {
                let Content::Video(video) = &mut open.content else {
                    return Effect::None;
                };
                let metadata_loaded = matches!(
                    msg,
                    video_playback::Message::Element(ElementEvent::LoadedMetadata { .. })
                );
                let effect = video.handle_at(msg, now);
                if metadata_loaded && !open.loaded {
                    open.loaded = true;
                    return Effect::Loaded;
                }
                Effect::Video(effect)
            }
            Message::Image(msg) => match &mut open.content {
                Content::Image(image) => Effect::Image(image.handle_at(msg, now)),
                Content::Video(_) => Effect::None,
            },
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn current(&self) -> Option<&OpenMedia<E>> {
        self.open.as_ref()
    }

    /// Returns true while an open item has not loaded yet.
    #[must_use]
    pub fn shows_spinner(&self) -> bool {
        self.open.as_ref().is_some_and(|open| !open.loaded)
    }

    #[must_use]
    pub fn video(&self) -> Option<&video_playback::State<E>> {
        match self.open.as_ref().map(|open| &open.content) {
            Some(Content::Video(video)) => Some(video),
            _ => None,
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&zoom_pan::State> {
        match self.open.as_ref().map(|open| &open.content) {
            Some(Content::Image(image)) => Some(image),
            _ => None,
        }
    }

    /// Next instant at which the host should send a video `Tick`.
    #[must_use]
    pub fn next_tick(&self) -> Option<Instant> {
        self.video().and_then(video_playback::State::next_tick)
    }

    fn close(&mut self, reason: CloseReason) -> Effect {
        self.open = None;
        tracing::debug!("viewer closed: {reason:?}");
        self.log_action(UserAction::CloseViewer { reason });
        Effect::Closed(reason)
    }

    fn mark_loaded(open: &mut OpenMedia<E>) -> Effect {
        if open.loaded {
            Effect::None
        } else {
            open.loaded = true;
            Effect::Loaded
        }
    }

    fn log_action(&self, action: UserAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeMediaElement;

    fn shell(variant: Variant) -> State<FakeMediaElement> {
        State::new(variant, &Config::default())
    }

    fn no_element(_: &str) -> FakeMediaElement {
        panic!("images need no media element")
    }

    #[test]
    fn starts_closed_and_ignores_messages() {
        let mut shell = shell(Variant::Lightbox);
        assert!(!shell.is_open());
        assert_eq!(shell.handle(Message::Close), Effect::None);
        assert_eq!(
            shell.handle(Message::KeyPressed(Key::Named(key::Named::Escape))),
            Effect::None
        );
    }

    #[test]
    fn escape_closes_open_image() {
        let mut shell = shell(Variant::Lightbox);
        assert_eq!(
            shell.open(MediaItem::image("/a.jpg"), no_element),
            Effect::Opened(MediaKind::Image)
        );

        let effect = shell.handle(Message::KeyPressed(Key::Named(key::Named::Escape)));
        assert_eq!(effect, Effect::Closed(CloseReason::EscapeKey));
        assert!(!shell.is_open());
    }

    #[test]
    fn backdrop_closes_post_detail_only() {
        let mut lightbox = shell(Variant::Lightbox);
        lightbox.open(MediaItem::image("/a.jpg"), no_element);
        assert_eq!(lightbox.handle(Message::BackdropClicked), Effect::None);
        assert!(lightbox.is_open());

        let mut detail = shell(Variant::PostDetail);
        detail.open(MediaItem::image("/a.jpg"), no_element);
        assert_eq!(
            detail.handle(Message::BackdropClicked),
            Effect::Closed(CloseReason::Backdrop)
        );
        assert!(!detail.is_open());
    }

    #[test]
    fn video_item_creates_player_for_src() {
        let mut shell = shell(Variant::Lightbox);
        let mut requested = None;
        shell.open(MediaItem::video("/clip.mp4"), |src| {
            requested = Some(src.to_string());
            FakeMediaElement::default()
        });

        assert_eq!(requested.as_deref(), Some("/clip.mp4"));
        assert!(shell.video().is_some());
        assert!(shell.image().is_none());
    }

    #[test]
    fn spinner_until_loaded_and_reset_on_replace() {
        let mut shell = shell(Variant::Lightbox);
        shell.open(MediaItem::image("/a.jpg"), no_element);
        assert!(shell.shows_spinner());

        assert_eq!(shell.handle(Message::MediaLoaded), Effect::Loaded);
        assert!(!shell.shows_spinner());
        assert_eq!(shell.handle(Message::MediaLoaded), Effect::None);

        shell.open(MediaItem::image("/b.jpg"), no_element);
        assert!(shell.shows_spinner());
        assert_eq!(shell.current().map(|o| o.item().src.as_str()), Some("/b.jpg"));
    }

    #[test]
    fn video_metadata_marks_loaded() {
        let mut shell = shell(Variant::Lightbox);
        shell.open(MediaItem::video("/clip.mp4"), |_| FakeMediaElement::default());

        let effect = shell.handle(Message::Video(video_playback::Message::Element(
            ElementEvent::LoadedMetadata { duration: 42.0 },
        )));
        assert_eq!(effect, Effect::Loaded);
        assert!(!shell.shows_spinner());
        let state = shell.video().expect("video open").playback_state();
        assert_eq!(state.duration, 42.0);
        assert_eq!(state.time_readout(), "0:00 / 0:42");

        // Already loaded: later metadata goes through as a player effect
        let effect = shell.handle(Message::Video(video_playback::Message::Element(
            ElementEvent::LoadedMetadata { duration: 43.0 },
        )));
        assert_eq!(effect, Effect::Video(video_playback::Effect::StateChanged));
    }

    #[test]
    fn keys_are_routed_to_video() {
        let mut shell = shell(Variant::Lightbox);
        shell.open(MediaItem::video("/clip.mp4"), |_| FakeMediaElement::default());

        shell.handle(Message::KeyPressed(Key::Named(key::Named::Space)));
        assert!(shell.video().is_some_and(video_playback::State::is_playing));
    }

    #[test]
    fn messages_for_other_kind_are_ignored() {
        let mut shell = shell(Variant::Lightbox);
        shell.open(MediaItem::image("/a.jpg"), no_element);
        assert_eq!(
            shell.handle(Message::Video(video_playback::Message::TogglePlayback)),
            Effect::None
        );
    }

    #[test]
    fn image_messages_reach_zoom_pan() {
        let mut shell = shell(Variant::Lightbox);
        shell.open(MediaItem::image("/a.jpg"), no_element);
        let effect = shell.handle(Message::Image(zoom_pan::Message::DoubleClick));
        assert_eq!(effect, Effect::Image(zoom_pan::Effect::TransformChanged));
        assert!(shell.image().is_some_and(|img| img.transform().is_some()));
    }
}
