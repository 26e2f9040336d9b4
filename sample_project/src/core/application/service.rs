use crate::adapters::api::api::ApiClient;
use crate::core::ports::service_port::QuotePort;

pub struct QuoteService {
    client: ApiClient,
}

impl QuoteService {
    pub fn find_quote(&self, port: &dyn QuotePort, id: u64) -> String {
        let _ = &self.client;
        port.find_quote(id)
    }
}
