use serde_json::{Value, json};

use super::context::RequestContext;

/// Client the upstream believes it is talking to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub name: &'static str,
    /// Numeric id sent as `X-YouTube-Client-Name`.
    pub id: &'static str,
    pub version: &'static str,
    pub user_agent: &'static str,
    pub device: Option<Device>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub make: &'static str,
    pub model: &'static str,
    pub os_name: &'static str,
    pub os_version: &'static str,
    pub android_sdk_version: Option<&'static str>,
}

impl ClientIdentity {
    pub const WEB_REMIX: ClientIdentity = ClientIdentity {
        name: "WEB_REMIX",
        id: "67",
        version: "1.20260121.03.00",
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
             AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36",
        device: None,
    };

    pub const ANDROID_MUSIC: ClientIdentity = ClientIdentity {
        name: "ANDROID_MUSIC",
        id: "21",
        version: "8.47.54",
        user_agent: "com.google.android.apps.youtube.music/8.47.54 (Linux; U; Android 14 gzip)",
        device: Some(Device {
            make: "Google",
            model: "Pixel 6",
            os_name: "Android",
            os_version: "14",
            android_sdk_version: Some("30"),
        }),
    };

    pub const IOS: ClientIdentity = ClientIdentity {
        name: "IOS",
        id: "5",
        version: "21.02.1",
        user_agent: "com.google.ios.youtube/21.02.1 (iPhone16,2; U; CPU iOS 18_2 like Mac OS X;)",
        device: Some(Device {
            make: "Apple",
            model: "iPhone16,2",
            os_name: "iPhone",
            os_version: "18.2.22C152",
            android_sdk_version: None,
        }),
    };

    /// The `context` object every request body carries.
    pub fn build_context(&self, ctx: &RequestContext, logged_in: bool) -> Value {
        let mut client = json!({
            "clientName": self.name,
            "clientVersion": self.version,
            "userAgent": self.user_agent,
            "hl": ctx.hl,
            "gl": ctx.gl
        });

        if let Some(obj) = client.as_object_mut() {
            if let Some(vd) = ctx.visitor_data.as_deref() {
                obj.insert("visitorData".to_string(), vd.into());
            }
            if let Some(device) = &self.device {
                obj.insert("deviceMake".to_string(), device.make.into());
                obj.insert("deviceModel".to_string(), device.model.into());
                obj.insert("osName".to_string(), device.os_name.into());
                obj.insert("osVersion".to_string(), device.os_version.into());
                if let Some(sdk) = device.android_sdk_version {
                    obj.insert("androidSdkVersion".to_string(), sdk.into());
                }
            }
        }

        let mut user = json!({ "lockedSafetyMode": false });
        if logged_in {
            if let Some(id) = ctx.on_behalf_of_user() {
                if let Some(obj) = user.as_object_mut() {
                    obj.insert("onBehalfOfUser".to_string(), id.into());
                }
            }
        }

        json!({
            "client": client,
            "user": user,
            "request": { "useSsl": true }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_carries_locale_and_visitor() {
        let ctx = RequestContext::default()
            .with_locale("de", "DE")
            .with_visitor_data("visitor123");
        let context = ClientIdentity::WEB_REMIX.build_context(&ctx, false);

        assert_eq!(context["client"]["clientName"], "WEB_REMIX");
        assert_eq!(context["client"]["hl"], "de");
        assert_eq!(context["client"]["gl"], "DE");
        assert_eq!(context["client"]["visitorData"], "visitor123");
        assert!(context["client"].get("deviceMake").is_none());
    }

    #[test]
    fn test_on_behalf_of_user_only_when_logged_in() {
        let ctx = RequestContext::default().with_data_sync_id("sync||");
        let anonymous = ClientIdentity::ANDROID_MUSIC.build_context(&ctx, false);
        assert!(anonymous["user"].get("onBehalfOfUser").is_none());
        assert_eq!(anonymous["client"]["deviceMake"], "Google");

        let logged_in = ClientIdentity::ANDROID_MUSIC.build_context(&ctx, true);
        assert_eq!(logged_in["user"]["onBehalfOfUser"], "sync");
    }
}
