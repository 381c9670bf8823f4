use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use reqwest::Client;
use serde_json::Value;

use crate::{
    common::{HttpClient, TransportError},
    configs::InnerTubeConfig,
};

use super::{auth, context::RequestContext, endpoint::EndpointKind};

/// One upstream call. Implementations never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        kind: EndpointKind,
        body: Value,
        ctx: &RequestContext,
    ) -> Result<Value, TransportError>;
}

/// HTTP transport against `music.youtube.com`.
pub struct InnerTubeTransport {
    base_url: String,
    timeout: Duration,
    /// One client per proxy URL. `None` is the direct connection.
    clients: DashMap<Option<String>, Client>,
}

impl InnerTubeTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            clients: DashMap::new(),
        }
    }

    pub fn from_config(config: &InnerTubeConfig) -> Self {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    fn client_for(&self, proxy: Option<&str>) -> Result<Client, TransportError> {
        let key = proxy.map(str::to_string);
        if let Some(client) = self.clients.get(&key) {
            return Ok(client.clone());
        }

        // The user agent is set per request since one client serves every identity.
        let client = HttpClient::new(
            super::client::ClientIdentity::WEB_REMIX.user_agent,
            self.timeout,
            proxy,
        )?;
        self.clients.insert(key, client.clone());
        Ok(client)
    }

    fn url(&self, kind: EndpointKind) -> String {
        format!(
            "{}/youtubei/v1/{}?prettyPrint=false",
            self.base_url,
            kind.path()
        )
    }
}

#[async_trait]
impl Transport for InnerTubeTransport {
    async fn request(
        &self,
        kind: EndpointKind,
        mut body: Value,
        ctx: &RequestContext,
    ) -> Result<Value, TransportError> {
        let identity = ctx.identity.unwrap_or_else(|| kind.identity());
        let with_auth =
            ctx.is_logged_in() && (kind.requires_login() || ctx.use_login_for_browse);

        if let Some(obj) = body.as_object_mut() {
            obj.insert(
                "context".to_string(),
                identity.build_context(ctx, with_auth),
            );
        }

        let http = self.client_for(ctx.proxy.as_deref())?;
        let url = self.url(kind);

        let mut req = http
            .post(&url)
            .header("X-YouTube-Client-Name", identity.id)
            .header("X-YouTube-Client-Version", identity.version)
            .header("X-Goog-Api-Format-Version", "2")
            .header("Origin", &self.base_url)
            .header("Referer", format!("{}/", self.base_url))
            .header("User-Agent", identity.user_agent)
            .json(&body);

        if let Some(visitor) = ctx.visitor_data.as_deref() {
            req = req.header("X-Goog-Visitor-Id", visitor);
        }

        if with_auth {
            if let (Some(cookie), Some(sapisid)) = (ctx.cookie.as_deref(), ctx.sapisid()) {
                req = req
                    .header("Cookie", cookie)
                    .header("X-Goog-AuthUser", "0")
                    .header(
                        "Authorization",
                        auth::sapisid_hash(sapisid, &self.base_url, auth::now_unix()),
                    );
            }
        }

        tracing::debug!("{} request as {}", kind.path(), identity.name);

        let res = req.send().await?;
        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            tracing::warn!(
                "{} request returned {}: {}",
                kind.path(),
                status,
                text.chars().take(200).collect::<String>()
            );
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
