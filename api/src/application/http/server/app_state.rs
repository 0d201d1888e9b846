use std::sync::Arc;

use chefmate_core::application::ChefmateService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ChefmateService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ChefmateService) -> Self {
        Self { args, service }
    }
}
