use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::backend::StudioClient;
use crate::logger;
use crate::models::{GenerationRequest, HistoryEntry, ImagePayload, PromptForm};
use crate::view::Surface;

/// Fallback shown when a failure carries no server-provided message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Generation failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Submitting,
}

/// Drives a single generation form: at most one submission is in flight at
/// any time, and the injected surface is walked through the corresponding
/// loading states.
///
/// The controller takes `&self` everywhere so one instance can be shared;
/// the submission slot is a single atomic and the history vector sits behind
/// a mutex that is never held across an await.
pub struct GenerationController<S: Surface> {
    backend: StudioClient,
    surface: S,
    state: AtomicU8,
    history: Mutex<Vec<HistoryEntry>>,
}

impl<S: Surface> GenerationController<S> {
    pub fn new(backend: StudioClient, surface: S) -> Self {
        Self {
            backend,
            surface,
            state: AtomicU8::new(UiState::Idle as u8),
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn state(&self) -> UiState {
        if self.state.load(Ordering::SeqCst) == UiState::Submitting as u8 {
            UiState::Submitting
        } else {
            UiState::Idle
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn history_len(&self) -> usize {
        self.history.lock().map(|held| held.len()).unwrap_or(0)
    }

    /// Submits the form values for generation.
    ///
    /// A call while a submission is outstanding is a silent no-op. An empty
    /// prompt triggers the surface's validation cue and never reaches the
    /// wire. Every accepted submission ends with the trigger restored and
    /// the state back at Idle, whichever branch the response took.
    pub async fn submit(&self, form: PromptForm) {
        // Duplicate-click guard: a single compare-exchange admits one
        // submission into the slot.
        if self
            .state
            .compare_exchange(
                UiState::Idle as u8,
                UiState::Submitting as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_err()
        {
            log::debug!("Submit ignored: a generation request is already in flight");
            return;
        }

        let Some(request) = GenerationRequest::from_form(&form) else {
            self.state.store(UiState::Idle as u8, Ordering::SeqCst);
            self.surface.flag_empty_prompt().await;
            return;
        };

        let request_id = Uuid::new_v4();
        log::info!(
            "🎨 Generating image [req:{}] (style: {}, aspect_ratio: {})",
            request_id,
            request.style,
            request.aspect_ratio
        );

        self.surface.set_trigger_busy(true).await;
        self.surface.set_loading_visible(true).await;
        self.surface.set_placeholder_visible(false).await;
        self.surface.hide_preview().await;

        let outcome = {
            let _timer = logger::timer("api/generate");
            self.backend.generation().generate(&request).await
        };

        match outcome {
            Ok(image) => {
                log::info!("✅ Generation succeeded [req:{}]", request_id);
                let payload = ImagePayload::parse(&image);
                // present_image resolves at decode completion; only then may
                // the loading indicator come down.
                self.surface.present_image(&payload).await;
                self.surface.set_loading_visible(false).await;
                self.load_history().await;
            }
            Err(err) => {
                log::error!("Generation failed [req:{}]: {}", request_id, err);
                let message = err
                    .server_message()
                    .unwrap_or(GENERIC_FAILURE_MESSAGE)
                    .to_string();
                self.surface.notify_failure(&message).await;
                self.surface.set_placeholder_visible(true).await;
                self.surface.set_loading_visible(false).await;
            }
        }

        // Runs exactly once per accepted submission, on every branch above.
        self.surface.set_trigger_busy(false).await;
        self.state.store(UiState::Idle as u8, Ordering::SeqCst);
    }

    /// Reloads the history wholesale and re-renders it. Failures are logged
    /// and swallowed; the caller may simply retry later. Overlapping reloads
    /// are not serialized; the last response to arrive wins.
    pub async fn load_history(&self) {
        match self.backend.history().fetch().await {
            Ok(entries) => {
                if let Ok(mut held) = self.history.lock() {
                    *held = entries.clone();
                }
                self.surface.render_history(&entries).await;
            }
            Err(err) => {
                log::warn!("History reload failed: {}", err);
            }
        }
    }

    /// Presents the image of the history entry at `index` in the main
    /// preview. Returns whether an entry was presented.
    pub async fn select_history_entry(&self, index: usize) -> bool {
        let entry = match self.history.lock() {
            Ok(held) => held.get(index).cloned(),
            Err(_) => None,
        };

        let Some(entry) = entry else {
            log::debug!("History selection out of range: {}", index);
            return false;
        };

        self.surface.set_placeholder_visible(false).await;
        self.surface
            .present_image(&ImagePayload::parse(&entry.image_data))
            .await;
        true
    }

    /// Brings the history section into view.
    pub async fn reveal_history(&self) {
        self.surface.reveal_history().await;
    }
}
