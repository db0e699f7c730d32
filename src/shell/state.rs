use crate::modules::members::core::service::MemberService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MemberService>,
}
