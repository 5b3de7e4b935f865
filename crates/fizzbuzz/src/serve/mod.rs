mod routes;

pub use routes::router;

use crate::prelude::{eprintln, *};
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the FizzBuzz conversion API over HTTP")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "FIZZBUZZ_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "FIZZBUZZ_HOST", default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Starting FizzBuzz API server on {}:{}...",
            app.host, app.port
        );
    }

    let addr = format!("{}:{}", app.host, app.port);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app_router = router().layer(cors);

    if global.verbose {
        eprintln!("FizzBuzz API listening on http://{}", addr);
        eprintln!("Single conversion: GET http://{}/api/fizzbuzz/{{number}}", addr);
        eprintln!("Batch conversion: POST http://{}/api/fizzbuzz", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
