// src/bootstrap.rs
use std::sync::Arc;

use anyhow::Result;

use crate::application::{
    events::EventDispatcher,
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use crate::config::AppConfig;
use crate::infrastructure::{
    audit::TracingAuditHandler, build_repositories, telemetry::init_tracing, time::SystemClock,
    util::DefaultSlugGenerator,
};

/// Wires a ready-to-use service set from configuration: tracing, the
/// configured store, and a dispatcher with the audit handler subscribed to
/// every event kind.
pub async fn bootstrap(config: &AppConfig) -> Result<ApplicationServices> {
    init_tracing(config.log_filter());

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let repositories = build_repositories(config, Arc::clone(&clock)).await?;

    let mut dispatcher = EventDispatcher::new();
    TracingAuditHandler::register(&mut dispatcher);

    Ok(ApplicationServices::new(
        repositories.posts,
        repositories.revisions,
        Arc::new(dispatcher),
        clock,
        slugger,
        config.page_limits(),
    ))
}
