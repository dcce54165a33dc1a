use crate::{
    api::{employee, paycheck},
    error::PaycheckError,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{Scope, web};
use anyhow::anyhow;

pub type LimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter allowing `requests_per_min` with an equal burst.
pub fn build_limiter(requests_per_min: u32) -> anyhow::Result<LimiterConfig> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);

    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} requests per minute"))
}

/// Malformed JSON bodies answer with the same `{error}` shape as validation failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| PaycheckError::validation(err.to_string()).into())
}

fn api_scope(prefix: &str) -> Scope {
    web::scope(prefix)
        .app_data(json_config())
        .service(
            web::scope("/employee")
                // /employee
                .service(
                    web::resource("")
                        .route(web::post().to(employee::create_employee))
                        .route(web::get().to(employee::list_employees)),
                ),
        )
        .service(
            web::scope("/paycheck")
                .service(
                    web::resource("/calculate").route(web::post().to(paycheck::calculate_paycheck)),
                )
                .service(web::resource("/rates").route(web::get().to(paycheck::list_rates))),
        )
}

/// API routes without rate limiting.
pub fn configure_api(cfg: &mut web::ServiceConfig, prefix: &str) {
    cfg.service(api_scope(prefix));
}

pub fn configure(cfg: &mut web::ServiceConfig, prefix: &str, limiter: &LimiterConfig) {
    cfg.service(api_scope(prefix).wrap(Governor::new(limiter)));
}
