use crate::{
    api::{employee, task, work_time},
    error::WorkTimeError,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

/// Per-peer-IP limiter settings, built once and shared by every worker.
pub fn build_limiter(
    requests_per_min: u32,
) -> anyhow::Result<GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };
    GovernorConfigBuilder::default()
        .milliseconds_per_request(per_ms)
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("invalid rate limit: {requests_per_min} per minute"))
}

/// Malformed JSON bodies are reported like any other invalid argument.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        WorkTimeError::InvalidArgument(err.to_string()).into()
    })
}

/// Endpoints below the API prefix, without rate limiting.
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/work-time")
                // /work-time
                .service(
                    web::resource("")
                        .route(web::get().to(work_time::list_entries))
                        .route(web::post().to(work_time::create_entry)),
                )
                // /work-time/{id}
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(work_time::get_entry))
                        .route(web::put().to(work_time::update_entry))
                        .route(web::delete().to(work_time::delete_entry)),
                )
                .service(
                    web::resource("/{id}/employee").route(web::get().to(work_time::get_entry_employee)),
                )
                .service(web::resource("/{id}/task").route(web::get().to(work_time::get_entry_task))),
        )
        .service(
            web::scope("/employees")
                .service(web::resource("").route(web::get().to(employee::list_employees)))
                .service(
                    web::resource("/{id}/work-time")
                        .route(web::get().to(employee::list_employee_entries)),
                )
                .service(
                    web::resource("/{id}/tasks").route(web::get().to(employee::list_employee_tasks)),
                )
                .service(
                    web::resource("/{id}/summary").route(web::get().to(employee::employee_summary)),
                ),
        )
        .service(
            web::scope("/tasks")
                .service(web::resource("").route(web::get().to(task::list_tasks)))
                .service(
                    web::resource("/{id}/employees").route(web::get().to(task::list_task_employees)),
                ),
        );
}

pub fn configure(
    cfg: &mut web::ServiceConfig,
    api_prefix: &str,
    limiter: &GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>,
) {
    cfg.service(
        web::scope(api_prefix)
            .wrap(Governor::new(limiter)) // rate limiting
            .configure(api_routes),
    );
}
