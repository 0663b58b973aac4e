pub mod http_client_factory;
pub mod observability;
pub mod persistence;

pub use http_client_factory::HttpClientFactory;
pub use observability::{PushgatewaySink, TextfileSink};
pub use persistence::{Database, SqlEpochRepository};
