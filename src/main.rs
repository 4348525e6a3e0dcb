use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use propusk::application::services::RecoveryService;
use propusk::infrastructure::dictionary::GramotaClient;
use propusk::infrastructure::observability::{TracingConfig, init_tracing};
use propusk::infrastructure::ocr::TesseractRecognizer;
use propusk::infrastructure::persistence::JsonFileUsageRepository;
use propusk::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let dictionary_client = Arc::new(GramotaClient::new(
        settings.dictionary.base_url.clone(),
        Duration::from_secs(settings.dictionary.timeout_secs),
    )?);
    let recovery_service = Arc::new(RecoveryService::new(Arc::clone(&dictionary_client)));
    let text_recognizer = Arc::new(TesseractRecognizer::new(
        settings.ocr.command.clone(),
        settings.ocr.language.clone(),
    ));
    let usage_repository = Arc::new(
        JsonFileUsageRepository::open(settings.usage.path.clone()).await?,
    );

    let state = AppState {
        recovery_service,
        text_recognizer,
        usage_repository,
        default_limit: settings.recovery.default_limit,
    };

    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
