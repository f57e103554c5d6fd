use pixelmaster::{
    enhance_prompt, AspectRatio, BackendConfig, ConsoleSurface, GenerationController, PromptForm,
    StudioClient, Style,
};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    pixelmaster::logger::init_with_config(
        pixelmaster::logger::LoggerConfig::development()
            .with_level(pixelmaster::logger::LogLevel::Debug),
    )?;

    let config = BackendConfig::from_env();
    pixelmaster::logger::log_startup_info(
        "PixelMaster",
        env!("CARGO_PKG_VERSION"),
        config.base_url(),
    );

    let mut style = Style::default();
    let mut aspect_ratio = AspectRatio::default();
    let mut enhance = false;
    let mut history_only = false;
    let mut prompt_words: Vec<String> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--style" => {
                let value = args.next().ok_or("--style needs a value")?;
                style = value.parse()?;
            }
            "--ratio" => {
                let value = args.next().ok_or("--ratio needs a value")?;
                aspect_ratio = value.parse()?;
            }
            "--enhance" => enhance = true,
            "--history" => history_only = true,
            other => prompt_words.push(other.to_string()),
        }
    }

    log::info!("🎛️  Style: {} | Aspect ratio: {}", style, aspect_ratio);

    let backend = StudioClient::new(config.clone())?;
    let surface = ConsoleSurface::new(config.output_dir());
    let controller = GenerationController::new(backend, surface);

    if history_only || prompt_words.is_empty() {
        if prompt_words.is_empty() && !history_only {
            log::warn!("No prompt given, listing history instead");
            log::warn!("Usage: pixelmaster [--style S] [--ratio R] [--enhance] <prompt words...>");
        }
        controller.reveal_history().await;
        controller.load_history().await;
        log::info!("🎉 {} creation(s) in history", controller.history_len());
        return Ok(());
    }

    let mut prompt = prompt_words.join(" ");
    if enhance {
        prompt = enhance_prompt(&prompt);
        log::debug!("Enhanced prompt: {}", prompt);
    }

    controller
        .submit(
            PromptForm::new(prompt)
                .with_style(style)
                .with_aspect_ratio(aspect_ratio),
        )
        .await;

    log::info!("🎉 Done, {} creation(s) in history", controller.history_len());

    Ok(())
}
