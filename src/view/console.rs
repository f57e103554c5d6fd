use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;

use crate::models::{HistoryEntry, ImagePayload};
use crate::view::traits::Surface;

/// Terminal-backed surface: narrates every transition through the logger and
/// materializes inline images as files under the output directory. URL
/// payloads are reported, not fetched.
pub struct ConsoleSurface {
    output_dir: PathBuf,
}

impl ConsoleSurface {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn next_image_path(&self, payload: &ImagePayload) -> PathBuf {
        let stamp = Utc::now().format("%Y%m%d_%H%M%S%3f");
        self.output_dir
            .join(format!("pixelmaster_{}.{}", stamp, payload.file_extension()))
    }
}

#[async_trait]
impl Surface for ConsoleSurface {
    async fn flag_empty_prompt(&self) {
        log::warn!("⚠️  Prompt is empty, nothing was submitted");
    }

    async fn set_trigger_busy(&self, busy: bool) {
        if busy {
            log::info!("🎨 Dreaming...");
        } else {
            log::debug!("Trigger ready");
        }
    }

    async fn set_loading_visible(&self, visible: bool) {
        if visible {
            log::debug!("Loading indicator shown");
        } else {
            log::debug!("Loading indicator hidden");
        }
    }

    async fn set_placeholder_visible(&self, visible: bool) {
        if visible {
            log::debug!("Empty-state placeholder shown");
        } else {
            log::debug!("Empty-state placeholder hidden");
        }
    }

    async fn hide_preview(&self) {
        log::debug!("Preview cleared");
    }

    async fn present_image(&self, payload: &ImagePayload) {
        match payload.decode() {
            Ok(Some(bytes)) => {
                let path = self.next_image_path(payload);
                match tokio::fs::write(&path, &bytes).await {
                    Ok(()) => log::info!("🖼️  Image saved to {}", path.display()),
                    Err(e) => log::error!("Failed to write {}: {}", path.display(), e),
                }
            }
            Ok(None) => log::info!("🖼️  Image available at {}", payload),
            Err(e) => log::error!("Image payload could not be decoded: {}", e),
        }
    }

    async fn notify_failure(&self, message: &str) {
        log::error!("❌ {}", message);
    }

    async fn render_history(&self, entries: &[HistoryEntry]) {
        log::info!("📜 History: {} creation(s)", entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let label = entry.prompt.as_deref().unwrap_or("(untitled)");
            log::info!(
                "   [{}] {} ({})",
                index,
                label,
                ImagePayload::parse(&entry.image_data).kind()
            );
        }
    }

    async fn reveal_history(&self) {
        log::info!("📜 --- history ---");
    }
}
