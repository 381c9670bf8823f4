use crate::configs::InnerTubeConfig;

use super::{auth, client::ClientIdentity};

/// Locale, identity and routing for one request.
///
/// Values are immutable once built; a process-wide default comes from
/// configuration and any call may pass its own instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub hl: String,
    pub gl: String,
    pub visitor_data: Option<String>,
    pub cookie: Option<String>,
    pub data_sync_id: Option<String>,
    pub proxy: Option<String>,
    /// Send credentials on browse requests too, not only account actions.
    pub use_login_for_browse: bool,
    /// Client to pose as instead of the endpoint's default.
    pub identity: Option<&'static ClientIdentity>,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::from_config(&InnerTubeConfig::default())
    }
}

impl RequestContext {
    pub fn from_config(config: &InnerTubeConfig) -> Self {
        Self {
            hl: config.hl.clone(),
            gl: config.gl.clone(),
            visitor_data: config.visitor_data.clone().filter(|v| !v.is_empty()),
            cookie: config.cookie.clone().filter(|c| !c.is_empty()),
            data_sync_id: config.data_sync_id.clone().filter(|d| !d.is_empty()),
            proxy: config.proxy.clone().filter(|p| !p.is_empty()),
            use_login_for_browse: config.use_login_for_browse,
            identity: None,
        }
    }

    pub fn with_locale(mut self, hl: impl Into<String>, gl: impl Into<String>) -> Self {
        self.hl = hl.into();
        self.gl = gl.into();
        self
    }

    pub fn with_visitor_data(mut self, visitor_data: impl Into<String>) -> Self {
        self.visitor_data = Some(visitor_data.into());
        self
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    pub fn with_data_sync_id(mut self, data_sync_id: impl Into<String>) -> Self {
        self.data_sync_id = Some(data_sync_id.into());
        self
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn with_login_for_browse(mut self, enabled: bool) -> Self {
        self.use_login_for_browse = enabled;
        self
    }

    pub fn with_identity(mut self, identity: &'static ClientIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Credentials are usable only when the cookie carries a `SAPISID`.
    pub fn is_logged_in(&self) -> bool {
        self.sapisid().is_some()
    }

    pub fn sapisid(&self) -> Option<&str> {
        auth::sapisid_from_cookie(self.cookie.as_deref()?)
    }

    /// `dataSyncId` up to its `||` separator, sent as `onBehalfOfUser`.
    pub fn on_behalf_of_user(&self) -> Option<&str> {
        let id = self.data_sync_id.as_deref()?;
        let id = id.split("||").next().unwrap_or(id);
        if id.is_empty() { None } else { Some(id) }
    }
}
