//! Run the webhook receiver

use std::sync::Arc;

use anyhow::anyhow;
use log::{info, warn};

use cardwarden::adapters::rules::BuiltinRuleEngine;
use cardwarden::adapters::scopes::ConfigScopeProvider;
use cardwarden::adapters;
use cardwarden::config::AppConfig;
use cardwarden::core::services::{Dispatcher, Reconciler};

/// Listen for board webhooks until the process is stopped
#[cfg(feature = "server")]
pub fn serve(config: &AppConfig, bind: Option<String>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    let scopes = ConfigScopeProvider::new(config.scopes.clone());
    if scopes.is_empty() {
        warn!("No boards configured; card updates will be dropped");
    }

    let reconciler = Reconciler::new(
        adapters::card_store(config)?,
        Arc::new(super::trello_client(config)?),
        Arc::new(BuiltinRuleEngine::new()),
        super::notifier(config)?,
    );
    let dispatcher = Arc::new(Dispatcher::new(Arc::new(scopes), reconciler));

    let bind = bind.unwrap_or_else(|| config.server.bind.clone());
    let server = tiny_http::Server::http(&bind).map_err(|e| anyhow!("cannot listen on {bind}: {e}"))?;
    info!("cardwarden v{} on {bind} ({} board(s))", cardwarden::VERSION, config.scopes.len());

    cardwarden::server::serve(&server, &config.server.path, &dispatcher, runtime.handle());
    Ok(())
}

/// Built without the `server` feature
#[cfg(not(feature = "server"))]
pub fn serve(_config: &AppConfig, _bind: Option<String>) -> anyhow::Result<()> {
    anyhow::bail!("cardwarden was built without the `server` feature")
}
