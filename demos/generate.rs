use pixelmaster::{
    AspectRatio, BackendConfig, ConsoleSurface, GenerationController, PromptForm, Style,
    StudioClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }
    pixelmaster::logger::init()?;

    let config = BackendConfig::from_env().with_timeout_secs(120);
    let backend = StudioClient::new(config.clone())?;
    let surface = ConsoleSurface::new(config.output_dir());
    let controller = GenerationController::new(backend, surface);

    let form = PromptForm::new("a lighthouse battered by a neon storm")
        .with_style(Style::Cinematic)
        .with_aspect_ratio(AspectRatio::Landscape);

    controller.submit(form).await;
    controller.select_history_entry(0).await;

    Ok(())
}
