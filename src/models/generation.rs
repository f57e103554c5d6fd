use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    Cinematic,
    Realistic,
    Anime,
    #[serde(rename = "Digital Art")]
    DigitalArt,
    Watercolor,
    Cyberpunk,
}

impl Default for Style {
    fn default() -> Self {
        Style::Cinematic
    }
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Cinematic => "Cinematic",
            Style::Realistic => "Realistic",
            Style::Anime => "Anime",
            Style::DigitalArt => "Digital Art",
            Style::Watercolor => "Watercolor",
            Style::Cyberpunk => "Cyberpunk",
        }
    }

    pub fn all() -> &'static [Style] {
        &[
            Style::Cinematic,
            Style::Realistic,
            Style::Anime,
            Style::DigitalArt,
            Style::Watercolor,
            Style::Cyberpunk,
        ]
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cinematic" => Ok(Style::Cinematic),
            "realistic" => Ok(Style::Realistic),
            "anime" => Ok(Style::Anime),
            "digital art" | "digital-art" | "digitalart" => Ok(Style::DigitalArt),
            "watercolor" => Ok(Style::Watercolor),
            "cyberpunk" => Ok(Style::Cyberpunk),
            other => Err(format!("unknown style: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    Square,
    Portrait,
    Landscape,
}

impl Default for AspectRatio {
    fn default() -> Self {
        AspectRatio::Square
    }
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "Square",
            AspectRatio::Portrait => "Portrait",
            AspectRatio::Landscape => "Landscape",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "square" => Ok(AspectRatio::Square),
            "portrait" => Ok(AspectRatio::Portrait),
            "landscape" => Ok(AspectRatio::Landscape),
            other => Err(format!("unknown aspect ratio: {}", other)),
        }
    }
}

/// Raw form values captured at submit time.
#[derive(Debug, Clone, Default)]
pub struct PromptForm {
    pub prompt: String,
    pub style: Style,
    pub aspect_ratio: AspectRatio,
}

impl PromptForm {
    pub fn new(prompt: impl Into<String>) -> Self {
        PromptForm {
            prompt: prompt.into(),
            style: Style::default(),
            aspect_ratio: AspectRatio::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }
}

/// JSON body sent to the generation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub style: Style,
    pub aspect_ratio: AspectRatio,
}

impl GenerationRequest {
    /// Builds the wire request from form values. Returns None when the
    /// trimmed prompt is empty; an empty prompt must never reach the wire.
    pub fn from_form(form: &PromptForm) -> Option<Self> {
        let prompt = form.prompt.trim();
        if prompt.is_empty() {
            return None;
        }

        Some(GenerationRequest {
            prompt: prompt.to_string(),
            style: form.style,
            aspect_ratio: form.aspect_ratio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_body_uses_snake_case_and_display_tags() {
        let request = GenerationRequest::from_form(
            &PromptForm::new("  a neon fox  ")
                .with_style(Style::DigitalArt)
                .with_aspect_ratio(AspectRatio::Landscape),
        )
        .unwrap();

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["prompt"], "a neon fox");
        assert_eq!(body["style"], "Digital Art");
        assert_eq!(body["aspect_ratio"], "Landscape");
    }

    #[test]
    fn whitespace_prompt_never_becomes_a_request() {
        assert!(GenerationRequest::from_form(&PromptForm::new("   \t ")).is_none());
    }

    #[test]
    fn styles_round_trip_through_from_str() {
        for style in Style::all() {
            assert_eq!(style.as_str().parse::<Style>().unwrap(), *style);
        }
        assert!("vaporwave".parse::<Style>().is_err());
        assert_eq!("digital-art".parse::<Style>().unwrap(), Style::DigitalArt);
    }
}
