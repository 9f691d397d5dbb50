// SPDX-License-Identifier: MPL-2.0
//! Social feed: API entities and local state with optimistic updates.

pub mod model;
pub mod optimistic;

pub use model::{
    AuthUser, Comment, LikeResponse, NewComment, Post, Profile, ProfileUpdate, SaveResponse,
};
pub use optimistic::{FeedState, Merge, PendingToggle, ToggleKind};
