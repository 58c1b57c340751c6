pub mod http;
pub mod observability;
pub mod speech;
