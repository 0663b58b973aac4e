//! Pushgateway sink.
//!
//! Each chain is pushed on its own grouping key (`job=<chain>`) with an HTTP
//! PUT, which replaces every metric previously pushed under that group.

use crate::domain::epochs::is_valid_chain_key;
use crate::domain::errors::EmitError;
use crate::domain::ports::MetricSink;
use crate::infrastructure::http_client_factory::HttpClientFactory;
use crate::infrastructure::observability::metrics::EpochGauge;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::info;
use url::Url;

pub struct PushgatewaySink {
    client: Client,
    gateway: Url,
}

impl PushgatewaySink {
    pub fn new(gateway: Url) -> Self {
        Self::with_client(HttpClientFactory::create_client(), gateway)
    }

    pub fn with_client(client: Client, gateway: Url) -> Self {
        Self { client, gateway }
    }

    /// `<gateway>/metrics/job/<chain>`, keeping any path prefix on the gateway URL.
    pub fn push_url(&self, chain: &str) -> Url {
        let mut url = self.gateway.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["metrics", "job", chain]);
        }
        url
    }
}

#[async_trait]
impl MetricSink for PushgatewaySink {
    fn name(&self) -> &'static str {
        "pushgateway"
    }

    async fn emit(&self, chain: &str, epoch: i64) -> Result<(), EmitError> {
        if !is_valid_chain_key(chain) {
            return Err(EmitError::InvalidKey {
                chain: chain.to_string(),
            });
        }

        let to_metric_error = |source| EmitError::Metric {
            chain: chain.to_string(),
            source,
        };
        let gauge = EpochGauge::new(chain, epoch).map_err(to_metric_error)?;
        let body = gauge.encode().map_err(to_metric_error)?;

        let url = self.push_url(chain);
        info!("Pushing {} = {} to {}", chain, epoch, url);

        let response = self
            .client
            .put(url.clone())
            .header(CONTENT_TYPE, EpochGauge::content_type())
            .body(body)
            .send()
            .await
            .map_err(|source| EmitError::PushTransport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmitError::PushRejected {
                url: url.to_string(),
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        info!("Pushed {} to {}", chain, url);
        Ok(())
    }
}
