use super::super::api::api::ApiClient;
use crate::core::application::service::QuoteService;

pub struct DbConnection {
    url: String,
}

impl DbConnection {
    pub fn load_service(&self) -> Option<(QuoteService, ApiClient)> {
        let _ = &self.url;
        None
    }
}
