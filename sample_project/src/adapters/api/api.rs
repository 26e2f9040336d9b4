use crate::adapters::api::serializers::serialize_quote;
use crate::adapters::db::connection::DbConnection;
use crate::core::ports::service_port::QuotePort;

pub struct ApiClient {
    connection: DbConnection,
}

impl ApiClient {
    pub fn render_quote(&self, port: &dyn QuotePort, id: u64) -> String {
        let _ = &self.connection;
        serialize_quote(&port.find_quote(id))
    }
}
