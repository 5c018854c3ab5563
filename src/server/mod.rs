//! HTTP API over the stored samples and the pipeline artifact.
//!
//! | Route          | Method | Body               |
//! |----------------|--------|--------------------|
//! | `/health`      | GET    |                    |
//! | `/analyze`     | GET    |                    |
//! | `/db-info`     | GET    |                    |
//! | `/predict`     | POST   | [`PredictRequest`] |
//!
//! Failures answer with [`Detail`]: 400 for client-side conditions
//! (empty table, untrained model), 422 for malformed bodies, 500 otherwise.
//!
//! [`PredictRequest`]: crate::dto::PredictRequest
//! [`Detail`]: crate::dto::Detail
mod handlers;

pub use handlers::*;

use crate::predict::Predictor;
use crate::store::Repository;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

pub struct Server;

impl Server {
    pub async fn run() -> anyhow::Result<()> {
        let client = crate::store::db().await?;
        client.migrate().await?;
        let repository: Arc<dyn Repository> = client;
        let repository = web::Data::from(repository);
        let predictor = web::Data::new(Predictor::default());
        let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| crate::DEFAULT_BIND_ADDR.to_string());
        log::info!("serving model from {}", predictor.path().display());
        log::info!("starting HTTP server on {}", addr);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(repository.clone())
                .app_data(predictor.clone())
                .configure(configure)
        })
        .bind(addr)?
        .run()
        .await?;
        Ok(())
    }
}

/// Routes and extractor config. Expects `Data<dyn Repository>` and
/// `Data<Predictor>` to be registered by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(unprocessable))
        .route("/health", web::get().to(health))
        .route("/analyze", web::get().to(analyze))
        .route("/db-info", web::get().to(db_info))
        .route("/predict", web::post().to(predict));
}
