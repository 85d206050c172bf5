use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use readiness_engine::assessment::{AnswerKey, QuestionCatalog, ReadinessEngine, ScoringConfig};
use readiness_engine::config::AppConfig;
use readiness_engine::error::AppError;
use readiness_engine::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = build_engine(config.scoring)?;

    let app = with_assessment_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        strict_answers = config.scoring.strict_answers,
        "career readiness service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn build_engine(config: ScoringConfig) -> Result<Arc<ReadinessEngine>, AppError> {
    let engine = ReadinessEngine::new(QuestionCatalog::standard(), AnswerKey::standard(), config)?;
    Ok(Arc::new(engine))
}
