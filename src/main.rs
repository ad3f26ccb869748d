use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use std::sync::Arc;

mod config;
mod error;
mod handlers;
mod metrics;
mod models;
mod openai;
mod orchestrator;
mod prompt;
mod state;

use config::Args;
use openai::OpenAiClient;
use state::AppState;

// This is main async function with tokio
#[tokio::main]
async fn main() {
    // parse cli arguments
    let args = Args::parse();

    // creating shared state
    let state = Arc::new(AppState {
        openai: OpenAiClient::new(args.openai_url.clone(), args.api_key),
    });

    // creating the router with routes
    let app = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/copywriter", post(handlers::copywriter_handler)) // post route
        .route("/metrics", get(handlers::metrics_handler)) // metrics endpoint
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    println!("Gateway running on http://localhost:{}", args.port);
    println!("Forwarding to OpenAI at {}", args.openai_url);
    axum::serve(listener, app).await.unwrap();
}
