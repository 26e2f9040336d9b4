pub trait QuotePort {
    fn find_quote(&self, id: u64) -> String;

    fn placeholder(&self) {
        todo!()
    }
}

pub fn quote_summary(id: u64) -> String {
    format!("quote {}", id)
}
