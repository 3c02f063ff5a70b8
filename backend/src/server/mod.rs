//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
pub(crate) mod metrics;

pub use config::ServerConfig;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use review_analyzer::Trace;
use review_analyzer::domain::{ReviewService, ServiceArea};
use review_analyzer::inbound::http::health::{HealthState, live, ready};
use review_analyzer::inbound::http::reviews::{list_reviews, submit_review};
use review_analyzer::inbound::http::state::HttpState;
use review_analyzer::outbound::{CsvReviewStore, VaderSentimentScorer};

use std::sync::Arc;

/// Wire the CSV store and VADER scorer into the review use-cases.
fn build_http_state(config: &ServerConfig) -> HttpState {
    let service = Arc::new(ReviewService::new(
        Arc::new(CsvReviewStore::new(config.data_path())),
        Arc::new(VaderSentimentScorer::new()),
        Arc::new(DefaultClock),
        ServiceArea::default(),
    ));
    HttpState::new(service.clone(), service)
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(list_reviews)
        .service(submit_review)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let bind_addr = config.bind_addr();
    info!(%bind_addr, data_path = %config.data_path().display(), "starting review service");

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(config.prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
