pub mod service_port;
