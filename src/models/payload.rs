use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::fmt;

use crate::error::{Result, StudioError};

/// Classified image payload as returned by the backend: either an inline
/// base64 data-URI or a plain URL reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePayload {
    DataUri { mime: String, data: String },
    Url(String),
}

impl ImagePayload {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.to_ascii_lowercase().starts_with("data:image/") {
            if let Some(rest) = trimmed.strip_prefix("data:") {
                if let Some((meta, body)) = rest.split_once(',') {
                    if let Some(mime) = meta.strip_suffix(";base64") {
                        return ImagePayload::DataUri {
                            mime: mime.to_string(),
                            data: body.to_string(),
                        };
                    }
                }
            }
        }
        ImagePayload::Url(trimmed.to_string())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ImagePayload::DataUri { .. } => "data_uri",
            ImagePayload::Url(_) => "url",
        }
    }

    /// Decoded bytes for an inline payload; None for a URL reference.
    pub fn decode(&self) -> Result<Option<Vec<u8>>> {
        match self {
            ImagePayload::DataUri { data, .. } => BASE64
                .decode(data.as_bytes())
                .map(Some)
                .map_err(|e| StudioError::ResponseError(format!("invalid base64 image: {}", e))),
            ImagePayload::Url(_) => Ok(None),
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            ImagePayload::DataUri { mime, .. } => match mime.as_str() {
                "image/jpeg" | "image/jpg" => "jpg",
                "image/webp" => "webp",
                "image/gif" => "gif",
                _ => "png",
            },
            ImagePayload::Url(_) => "png",
        }
    }
}

impl fmt::Display for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImagePayload::DataUri { mime, data } => write!(f, "data:{};base64,{}", mime, data),
            ImagePayload::Url(url) => f.write_str(url),
        }
    }
}
