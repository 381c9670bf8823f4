use crate::{models::AccountInfo, renderer::AccountMenuResponse};

/// The signed-in account, or `None` for anonymous sessions.
pub fn parse_account(response: &AccountMenuResponse) -> Option<AccountInfo> {
    let header = response.active_account()?;
    Some(AccountInfo {
        name: header.account_name.as_ref()?.text()?,
        email: header.email.as_ref().and_then(|e| e.text()),
        channel_handle: header.channel_handle.as_ref().and_then(|h| h.text()),
        thumbnail: header
            .account_photo
            .as_ref()
            .and_then(|p| p.largest())
            .map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_active_account() {
        let response: AccountMenuResponse = serde_json::from_value(json!({
            "actions": [{ "openPopupAction": { "popup": { "multiPageMenuRenderer": { "header": {
                "activeAccountHeaderRenderer": {
                    "accountName": { "runs": [{ "text": "Jo" }] },
                    "email": { "runs": [{ "text": "jo@example.com" }] },
                    "channelHandle": { "runs": [{ "text": "@jo" }] },
                    "accountPhoto": { "thumbnails": [{ "url": "https://img/s" }, { "url": "https://img/l" }] }
                }
            } } } } }]
        }))
        .expect("valid account response");

        let account = parse_account(&response).expect("account");
        assert_eq!(account.name, "Jo");
        assert_eq!(account.email.as_deref(), Some("jo@example.com"));
        assert_eq!(account.channel_handle.as_deref(), Some("@jo"));
        assert_eq!(account.thumbnail.as_deref(), Some("https://img/l"));
    }

    #[test]
    fn test_anonymous_session_has_no_account() {
        let response: AccountMenuResponse =
            serde_json::from_value(json!({ "actions": [] })).expect("valid account response");
        assert!(parse_account(&response).is_none());
    }
}
