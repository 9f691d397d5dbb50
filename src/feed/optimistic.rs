// SPDX-License-Identifier: MPL-2.0
//! Local feed state with optimistic like/save toggles.
//!
//! A toggle flips the post at once and hands back a [`PendingToggle`] for the
//! host to send. Each toggle gets a request id from a monotonically
//! increasing counter, and only the answer to the latest request of a post
//! is merged: answers to superseded requests are dropped. Without an answer
//! the optimistic state stands.

use super::model::{Comment, LikeResponse, Post, SaveResponse};
use crate::diagnostics::{DiagnosticsHandle, UserAction, WarningType};
use std::collections::HashMap;

/// Which flag of a post a toggle changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleKind {
    Like,
    Save,
}

/// A toggle applied locally and awaiting its server answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingToggle {
    pub post_id: String,
    pub kind: ToggleKind,
    pub request_id: u64,
}

/// Outcome of merging a server answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    /// The answer was for the latest request and is now the post's state.
    Applied,
    /// A newer request superseded this one; the answer was dropped.
    Stale,
    /// The post is no longer in the feed.
    UnknownPost,
}

/// Posts and their loaded comments.
#[derive(Debug, Default)]
pub struct FeedState {
    posts: Vec<Post>,
    comments: HashMap<String, Vec<Comment>>,
    /// Latest request id per post and flag.
    latest: HashMap<(String, ToggleKind), u64>,
    next_request_id: u64,
    diagnostics: Option<DiagnosticsHandle>,
}

impl FeedState {
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Replaces all posts with a fresh fetch.
    ///
    /// Fetched posts are server truth, so pending toggles are forgotten.
    pub fn replace_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.latest.clear();
        self.comments
            .retain(|post_id, _| self.posts.iter().any(|p| &p.id == post_id));
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// Returns true while a toggle of `kind` on the post awaits its answer.
    #[must_use]
    pub fn is_pending(&self, post_id: &str, kind: ToggleKind) -> bool {
        self.latest.contains_key(&(post_id.to_string(), kind))
    }

    // =========================================================================
    // Optimistic Toggles
    // =========================================================================

    /// Flips `likedByMe` and adjusts `likesCount` by one.
    ///
    /// Returns `None` if the post is not in the feed.
    pub fn toggle_like(&mut self, post_id: &str) -> Option<PendingToggle> {
        let post = self.post_mut(post_id)?;
        post.liked_by_me = !post.liked_by_me;
        post.likes_count = if post.liked_by_me {
            post.likes_count.saturating_add(1)
        } else {
            post.likes_count.saturating_sub(1)
        };
        let liked = post.liked_by_me;

        self.log_action(UserAction::ToggleLike {
            post_id: post_id.to_string(),
            liked,
        });
        Some(self.issue(post_id, ToggleKind::Like))
    }

    /// Flips `savedByMe`.
    ///
    /// Returns `None` if the post is not in the feed.
    pub fn toggle_save(&mut self, post_id: &str) -> Option<PendingToggle> {
        let post = self.post_mut(post_id)?;
        post.saved_by_me = !post.saved_by_me;
        let saved = post.saved_by_me;

        self.log_action(UserAction::ToggleSave {
            post_id: post_id.to_string(),
            saved,
        });
        Some(self.issue(post_id, ToggleKind::Save))
    }

    /// Merges the answer to a like request.
    pub fn apply_like_response(&mut self, request: &PendingToggle, response: LikeResponse) -> Merge {
        let merge = self.settle(request);
        if merge == Merge::Applied {
            if let Some(post) = self.post_mut(&request.post_id) {
                post.liked_by_me = response.liked;
                post.likes_count = response.likes_count;
            }
        }
        merge
    }

    /// Merges the answer to a save request.
    pub fn apply_save_response(&mut self, request: &PendingToggle, response: SaveResponse) -> Merge {
        let merge = self.settle(request);
        if merge == Merge::Applied {
            if let Some(post) = self.post_mut(&request.post_id) {
                post.saved_by_me = response.saved;
            }
        }
        merge
    }

    /// Records that a request failed. The optimistic state stands.
    ///
    /// Returns true if the failed request was the latest for its post.
    pub fn fail_request(&mut self, request: &PendingToggle) -> bool {
        self.settle(request) == Merge::Applied
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Stores the comments fetched for a post.
    pub fn set_comments(&mut self, post_id: &str, comments: Vec<Comment>) {
        self.comments.insert(post_id.to_string(), comments);
    }

    #[must_use]
    pub fn comments(&self, post_id: &str) -> &[Comment] {
        self.comments.get(post_id).map_or(&[], Vec::as_slice)
    }

    /// Appends a comment to its post and increments `commentsCount`.
    ///
    /// Returns false if the post is not in the feed.
    pub fn add_comment(&mut self, comment: Comment) -> bool {
        let Some(post) = self.post_mut(&comment.post_id) else {
            return false;
        };
        post.comments_count = post.comments_count.saturating_add(1);
        self.comments
            .entry(comment.post_id.clone())
            .or_default()
            .push(comment);
        true
    }

    /// Removes a comment and decrements `commentsCount` (never below zero).
    pub fn remove_comment(&mut self, post_id: &str, comment_id: &str) -> Option<Comment> {
        let comments = self.comments.get_mut(post_id)?;
        let index = comments.iter().position(|c| c.id == comment_id)?;
        let removed = comments.remove(index);

        if let Some(post) = self.post_mut(post_id) {
            post.comments_count = post.comments_count.saturating_sub(1);
        }
        Some(removed)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn post_mut(&mut self, post_id: &str) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == post_id)
    }

    fn issue(&mut self, post_id: &str, kind: ToggleKind) -> PendingToggle {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.latest.insert((post_id.to_string(), kind), request_id);
        PendingToggle {
            post_id: post_id.to_string(),
            kind,
            request_id,
        }
    }

    /// Clears the pending entry if `request` is the latest one.
    fn settle(&mut self, request: &PendingToggle) -> Merge {
        if self.post(&request.post_id).is_none() {
            return Merge::UnknownPost;
        }

        let key = (request.post_id.clone(), request.kind);
        if self.latest.get(&key) == Some(&request.request_id) {
            self.latest.remove(&key);
            Merge::Applied
        } else {
            tracing::debug!(
                "dropping stale {:?} answer for post {} (request {})",
                request.kind,
                request.post_id,
                request.request_id
            );
            if let Some(handle) = &self.diagnostics {
                handle.log_warning_simple(
                    WarningType::StaleServerResponse,
                    format!("{:?} request {} superseded", request.kind, request.request_id),
                );
            }
            Merge::Stale
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
    use chrono::{TimeZone, Utc};

    fn post(id: &str, likes: u32, liked: bool) -> Post {
        Post {
            id: id.to_string(),
            caption: String::new(),
            media: Vec::new(),
            likes_count: likes,
            comments_count: 0,
            liked_by_me: liked,
            saved_by_me: false,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    fn comment(id: &str, post_id: &str) -> Comment {
        Comment {
            id: id.to_string(),
            post_id: post_id.to_string(),
            author_name: "Ana".to_string(),
            body: "Nice topology".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 2, 9, 30, 0).unwrap(),
        }
    }

    fn like_state(feed: &FeedState) -> (bool, u32) {
        let p = feed.post("p1").expect("post");
        (p.liked_by_me, p.likes_count)
    }

    #[test]
    fn like_toggle_is_applied_synchronously() {
        let mut feed = FeedState::new(vec![post("p1", 10, false)]);

        feed.toggle_like("p1").expect("known post");
        assert_eq!(like_state(&feed), (true, 11));

        feed.toggle_like("p1").expect("known post");
        assert_eq!(like_state(&feed), (false, 10));
    }

    #[test]
    fn only_latest_answer_is_merged() {
        let mut feed = FeedState::new(vec![post("p1", 10, false)]);
        let first = feed.toggle_like("p1").expect("known post");
        let second = feed.toggle_like("p1").expect("known post");
        assert!(second.request_id > first.request_id);

        // Answers arrive out of order: second first
        let merge = feed.apply_like_response(
            &second,
            LikeResponse {
                liked: false,
                likes_count: 10,
            },
        );
        assert_eq!(merge, Merge::Applied);

        let merge = feed.apply_like_response(
            &first,
            LikeResponse {
                liked: true,
                likes_count: 11,
            },
        );
        assert_eq!(merge, Merge::Stale);
        assert_eq!(like_state(&feed), (false, 10));
        assert!(!feed.is_pending("p1", ToggleKind::Like));
    }

    #[test]
    fn server_truth_replaces_optimistic_count() {
        let mut feed = FeedState::new(vec![post("p1", 10, false)]);
        let request = feed.toggle_like("p1").expect("known post");
        feed.apply_like_response(
            &request,
            LikeResponse {
                liked: true,
                likes_count: 42,
            },
        );
        assert_eq!(like_state(&feed), (true, 42));
    }

    #[test]
    fn failed_request_keeps_optimistic_state() {
        let mut feed = FeedState::new(vec![post("p1", 10, false)]);
        let request = feed.toggle_like("p1").expect("known post");
        assert!(feed.is_pending("p1", ToggleKind::Like));

        assert!(feed.fail_request(&request));
        assert!(!feed.is_pending("p1", ToggleKind::Like));
        assert_eq!(like_state(&feed), (true, 11));
    }

    #[test]
    fn like_and_save_are_tracked_separately() {
        let mut feed = FeedState::new(vec![post("p1", 0, false)]);
        let like = feed.toggle_like("p1").expect("known post");
        let save = feed.toggle_save("p1").expect("known post");
        assert!(feed.post("p1").is_some_and(|p| p.saved_by_me));

        assert_eq!(
            feed.apply_save_response(&save, SaveResponse { saved: true }),
            Merge::Applied
        );
        assert!(feed.is_pending("p1", ToggleKind::Like));
        assert!(feed.fail_request(&like));
    }

    #[test]
    fn unknown_post_is_reported() {
        let mut feed = FeedState::new(vec![post("p1", 0, false)]);
        assert!(feed.toggle_like("nope").is_none());

        let request = feed.toggle_save("p1").expect("known post");
        feed.replace_posts(Vec::new());
        assert_eq!(
            feed.apply_save_response(&request, SaveResponse { saved: true }),
            Merge::UnknownPost
        );
    }

    #[test]
    fn refetch_forgets_pending_requests() {
        let mut feed = FeedState::new(vec![post("p1", 10, false)]);
        let request = feed.toggle_like("p1").expect("known post");
        feed.replace_posts(vec![post("p1", 12, true)]);

        assert_eq!(
            feed.apply_like_response(
                &request,
                LikeResponse {
                    liked: false,
                    likes_count: 0
                }
            ),
            Merge::Stale
        );
        assert_eq!(like_state(&feed), (true, 12));
    }

    #[test]
    fn unlike_at_zero_does_not_underflow() {
        let mut feed = FeedState::new(vec![post("p1", 0, true)]);
        feed.toggle_like("p1");
        assert_eq!(like_state(&feed), (false, 0));
    }

    #[test]
    fn comments_append_and_remove() {
        let mut feed = FeedState::new(vec![post("p1", 0, false)]);
        assert!(feed.add_comment(comment("c1", "p1")));
        assert!(feed.add_comment(comment("c2", "p1")));
        assert_eq!(feed.post("p1").map(|p| p.comments_count), Some(2));
        assert_eq!(feed.comments("p1").len(), 2);

        let removed = feed.remove_comment("p1", "c1").expect("present");
        assert_eq!(removed.id, "c1");
        assert_eq!(feed.post("p1").map(|p| p.comments_count), Some(1));
        assert!(feed.remove_comment("p1", "c1").is_none());
    }

    #[test]
    fn comment_count_saturates_at_zero() {
        let mut feed = FeedState::new(vec![post("p1", 0, false)]);
        feed.set_comments("p1", vec![comment("c1", "p1")]);
        feed.remove_comment("p1", "c1");
        assert_eq!(feed.post("p1").map(|p| p.comments_count), Some(0));
    }

    #[test]
    fn comment_for_unknown_post_is_rejected() {
        let mut feed = FeedState::new(Vec::new());
        assert!(!feed.add_comment(comment("c1", "ghost")));
        assert!(feed.comments("ghost").is_empty());
    }
}
