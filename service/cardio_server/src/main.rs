// HTTP front end for the cardio questionnaire: serves the form page and the
// stateless scoring endpoint.

use std::net::{IpAddr, SocketAddr};

use axum::body::Bytes;
use axum::extract::Json;
use axum::http::{Method, StatusCode};
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use clap::Parser;
use log::{error, info};
use tower_http::cors::{Any, CorsLayer};

use cardio_score::{assess, Assessment, AssessmentError, RiskResponse};

mod page;

#[derive(Debug, Parser)]
#[command(
    name = "cardio_server",
    version,
    about = "HTTP service for the cardio heart-disease risk questionnaire",
    long_about = "Serves the questionnaire page at / and the scoring endpoint at \
        POST /api/heart. Scoring is stateless: each submission is an independent \
        computation with no persistence."
)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = 8710)]
    port: u16,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let addr = SocketAddr::new(cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("cardio_server listening on http://{addr}");
    axum::serve(listener, app()).await.unwrap();
}

fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/heart", post(heart))
        .layer(cors)
}

async fn index() -> Html<String> {
    Html(page::render())
}

async fn health() -> &'static str {
    "ok"
}

// The body is parsed here rather than by an extractor so that every failure,
// malformed JSON included, yields the fixed 500 fallback payload instead of
// an extractor rejection.
async fn heart(body: Bytes) -> (StatusCode, Json<RiskResponse>) {
    match respond(&body) {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(err) => {
            error!("failed to process assessment: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RiskResponse::processing_error()),
            )
        }
    }
}

fn respond(body: &[u8]) -> Result<RiskResponse, AssessmentError> {
    let assessment = Assessment::from_json_slice(body)?;
    let result = assess(&assessment);
    info!("scored assessment: score={} risk={}", result.score, result.risk);
    Ok(result.into())
}
