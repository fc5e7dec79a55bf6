mod app;

use tessera_ui::Renderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("off,tessera_ui=info"))?;
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    Renderer::run(app::app, |app| {
        tessera_components::init(app);
        tessera_progress_ui::init(app);
    })?;
    Ok(())
}
