use async_trait::async_trait;

use crate::models::{HistoryEntry, ImagePayload};

/// The set of view handles a rendering surface exposes to the lifecycle
/// controller. Implementations own all presentation concerns (animations,
/// layout, how a "disabled" trigger looks); the controller only drives
/// transitions through these handles.
#[async_trait]
pub trait Surface: Send + Sync {
    /// Transient cue on the prompt field after a rejected empty submission.
    async fn flag_empty_prompt(&self);

    /// Disables the trigger and swaps its label/icon to the working
    /// indicator, or restores it to the enabled idle presentation.
    async fn set_trigger_busy(&self, busy: bool);

    async fn set_loading_visible(&self, visible: bool);

    async fn set_placeholder_visible(&self, visible: bool);

    async fn hide_preview(&self);

    /// Presents an image in the main preview. Resolves only once the
    /// surface has finished decoding the payload, so callers can defer
    /// hiding the loading indicator until the image is actually showable.
    async fn present_image(&self, payload: &ImagePayload);

    /// Blocking failure notification shown to the user.
    async fn notify_failure(&self, message: &str);

    /// Replaces the entire rendered history with `entries`, one selectable
    /// thumbnail per entry, and sets the visible count to `entries.len()`.
    async fn render_history(&self, entries: &[HistoryEntry]);

    /// Scrolls the history section into view with a transient highlight.
    async fn reveal_history(&self);
}
