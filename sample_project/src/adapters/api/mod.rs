pub mod api;
pub mod serializers;
