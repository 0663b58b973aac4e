use reqwest::Client;

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates the HTTP client used for Pushgateway pushes.
    ///
    /// No retry middleware and no custom timeouts: a failed push is logged
    /// and the chain is pushed again on the next tick.
    pub fn create_client() -> Client {
        Client::builder()
            .pool_max_idle_per_host(1)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    }
}
