// Composition root for the members service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the configured store variant.
// - Wire the store into the service and the service into the router.

pub mod hello;
pub mod http;
pub mod state;

use crate::config::{AppConfig, StoreKind};
use crate::modules::members::core::service::MemberService;
use crate::modules::members::store::MemberStore;
use crate::modules::members::store::in_memory::InMemoryMemberStore;
use crate::modules::members::store::sqlite::SqliteMemberStore;
use crate::shell::state::AppState;
use std::sync::Arc;

pub async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store: Arc<dyn MemberStore> = match &config.store {
        StoreKind::Memory => {
            tracing::info!("using in-memory member store");
            Arc::new(InMemoryMemberStore::new())
        }
        StoreKind::Sqlite { url } => {
            tracing::info!(url = %url, "using sqlite member store");
            Arc::new(SqliteMemberStore::connect(url).await?)
        }
    };
    Ok(AppState {
        service: Arc::new(MemberService::new(store)),
    })
}
