use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::middleware::Compress;
use actix_web::web::{Data, ServiceConfig};
use log::{error, info, warn};
use serde_json::json;
use crate::common::common::parse_query;
use crate::fizzbuzz::structs::fizzbuzz_params::FizzBuzzParams;
use crate::http::structs::http_service_data::HttpServiceData;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/fizzbuzz").route(web::get().to(http_service_fizzbuzz)));
        cfg.service(web::resource("/stats").route(web::get().to(http_service_stats)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub async fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    let http_config = data.config.http_server.clone();

    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .wrap(Compress::default())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(http_config.keep_alive))
        .client_request_timeout(Duration::from_secs(http_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(http_config.disconnect_timeout))
        .max_connections(http_config.max_connections as usize)
        .workers(http_config.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn http_service_fizzbuzz(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let query = parse_query(request.query_string());
    let params = match FizzBuzzParams::from_query(&query, data.config.fizzbuzz_config.max_limit) {
        Ok(params) => params,
        Err(error) => {
            warn!("[FIZZBUZZ] Parameter error: {error}");
            return HttpResponse::BadRequest().content_type(ContentType::plaintext()).body(error.to_string());
        }
    };

    data.stats_tracker.record(&params);

    HttpResponse::Ok().content_type(ContentType::json()).json(params.generate())
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn http_service_stats(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let entry = data.stats_tracker.most_frequent();

    match serde_json::to_string(&entry) {
        Ok(body) => HttpResponse::Ok().content_type(ContentType::json()).body(body),
        Err(error) => {
            error!("[STATS] Unable to encode statistics: {error}");
            HttpResponse::InternalServerError().content_type(ContentType::plaintext()).body("unable to encode statistics")
        }
    }
}

pub async fn http_service_not_found(request: HttpRequest) -> HttpResponse
{
    info!("[HTTP] Unknown route requested: {} {}", request.method(), request.path());
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({"status": "not found"}))
}
