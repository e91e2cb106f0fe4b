//! value-curve server - Main entry point
//!
//! Loads configuration, wires storage and the AI provider into the
//! application services and serves the JSON API.

use std::sync::Arc;

use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use value_curve::adapters::ai::{
    GeminiConfig, GeminiProvider, MockAIProvider, OpenAIConfig, OpenAIProvider,
};
use value_curve::adapters::http::{api_router, cors_layer, CanvasAppState, ThemeAppState};
use value_curve::adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
use value_curve::application::{AdviceService, DocumentStore, ThemeService};
use value_curve::config::{AiConfig, AiProvider, AppConfig};
use value_curve::ports::{AIError, AIProvider as AIProviderPort, KeyValueStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    let addr = config.server.socket_addr()?;
    info!(
        data_dir = %config.storage.data_dir.display(),
        provider = ?config.ai.provider,
        "Starting value-curve"
    );

    // Durable storage for contours and theme; advice lives for the process only.
    let durable: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(&config.storage.data_dir));
    let session: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());

    let provider = build_provider(&config.ai)?;
    info!(
        provider = %provider.provider_info().name,
        model = %provider.provider_info().model,
        "AI provider ready"
    );

    let documents = Arc::new(DocumentStore::load(durable.clone()).await);
    let mut advice =
        AdviceService::new(provider, session).with_max_output_tokens(config.ai.max_output_tokens);
    if let Some(temperature) = config.ai.temperature {
        advice = advice.with_temperature(temperature);
    }
    let advice = Arc::new(advice);
    let theme = Arc::new(ThemeService::load(durable, config.ui.ambient_color_scheme).await);

    let app = api_router(
        CanvasAppState::new(documents, advice),
        ThemeAppState::new(theme),
    )
    .layer(cors_layer(&config.server.cors_origins_list()));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Starting HTTP server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Builds the configured AI provider.
fn build_provider(config: &AiConfig) -> Result<Arc<dyn AIProviderPort>, AIError> {
    let key = |key: &Option<String>| key.clone().unwrap_or_default();

    let provider: Arc<dyn AIProviderPort> = match config.provider {
        AiProvider::Gemini => {
            let mut gemini = GeminiConfig::new(key(&config.gemini_api_key)).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                gemini = gemini.with_model(model);
            }
            if let Some(url) = &config.base_url {
                gemini = gemini.with_base_url(url);
            }
            Arc::new(GeminiProvider::new(gemini)?)
        }
        AiProvider::OpenAI => {
            let mut openai = OpenAIConfig::new(key(&config.openai_api_key)).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                openai = openai.with_model(model);
            }
            if let Some(url) = &config.base_url {
                openai = openai.with_base_url(url);
            }
            Arc::new(OpenAIProvider::new(openai)?)
        }
        AiProvider::Mock => Arc::new(
            MockAIProvider::new()
                .with_response("Mock-Analyse: Die Berührungspunkte zeigen eine klare Differenzierung."),
        ),
    };

    Ok(provider)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
