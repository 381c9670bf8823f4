use std::time::Duration;

use reqwest::{Client, Proxy};

use super::errors::TransportError;

pub struct HttpClient;

impl HttpClient {
    /// Builds a client for one user agent, optionally routed through `proxy`.
    pub fn new(
        user_agent: &str,
        timeout: Duration,
        proxy: Option<&str>,
    ) -> Result<Client, TransportError> {
        let mut builder = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true);

        if let Some(url) = proxy {
            let proxy = Proxy::all(url).map_err(|e| TransportError::InvalidProxy {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        Ok(builder.build()?)
    }
}
