use crate::comparison::RoundStore;
use crate::config::ShowdownConfig;
use crate::llm::{CredentialSet, Dispatcher};
use crate::showdown::Showdown;

pub fn build_dispatcher(cfg: &ShowdownConfig) -> Result<Dispatcher, String> {
    Dispatcher::new(cfg).map_err(|err| format!("failed to build http client: {}", err))
}

/// Wires a `Showdown` from config, using env credentials as the per-request fallback.
pub fn build_showdown(cfg: ShowdownConfig) -> Result<Showdown, String> {
    let dispatcher = build_dispatcher(&cfg)?;
    let store = RoundStore::new(cfg.round_history);
    Ok(Showdown::new(cfg, dispatcher, CredentialSet::from_env(), store))
}
