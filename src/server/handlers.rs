use crate::Feature;
use crate::N_FEATURES;
use crate::analysis::Describe;
use crate::dataset::Dataset;
use crate::dto::DbInfo;
use crate::dto::Detail;
use crate::dto::Health;
use crate::dto::PredictRequest;
use crate::predict::PredictError;
use crate::predict::Predictor;
use crate::store::IRIS;
use crate::store::Repository;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::error::InternalError;
use actix_web::error::JsonPayloadError;
use actix_web::web;

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(Health::default())
}

pub async fn analyze(repository: web::Data<dyn Repository>) -> impl Responder {
    match Dataset::hydrate(repository.get_ref()).await {
        Err(e) => {
            log::error!("analyze: {:#}", e);
            HttpResponse::InternalServerError().json(Detail::new(e))
        }
        Ok(dataset) => match Describe::try_from(&dataset) {
            Ok(describe) => HttpResponse::Ok().json(describe),
            Err(e) => HttpResponse::BadRequest().json(Detail::new(e)),
        },
    }
}

pub async fn db_info(repository: web::Data<dyn Repository>) -> impl Responder {
    match repository.count().await {
        Ok(rows) => HttpResponse::Ok().json(DbInfo {
            table: IRIS.to_string(),
            rows,
        }),
        Err(e) => {
            log::error!("db-info: {:#}", e);
            HttpResponse::InternalServerError().json(Detail::new(e))
        }
    }
}

pub async fn predict(
    predictor: web::Data<Predictor>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    let features = <[Feature; N_FEATURES]>::from(req.into_inner());
    let predictor = predictor.into_inner();
    match web::block(move || predictor.predict(features)).await {
        Ok(Ok(prediction)) => HttpResponse::Ok().json(prediction),
        Ok(Err(e @ PredictError::NotTrained(_))) => {
            HttpResponse::BadRequest().json(Detail::new(e))
        }
        Ok(Err(e)) => failed(e),
        Err(e) => failed(e),
    }
}

fn failed(e: impl std::fmt::Display) -> HttpResponse {
    log::error!("prediction failed: {}", e);
    HttpResponse::InternalServerError().json(Detail::new(format!("Prediction failed: {}", e)))
}

/// Malformed JSON bodies answer 422 with the parser's message.
pub fn unprocessable(err: JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::UnprocessableEntity().json(Detail::new(&err));
    InternalError::from_response(err, response).into()
}
