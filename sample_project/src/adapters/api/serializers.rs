pub fn serialize_quote(quote: &str) -> String {
    format!("{{\"quote\":\"{}\"}}", quote)
}
