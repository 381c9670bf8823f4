use super::client::ClientIdentity;

/// Logical upstream endpoints. Each maps to one fixed `youtubei/v1` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Search,
    Browse,
    Next,
    Player,
    Feedback,
    Like,
    RemoveLike,
    AccountMenu,
    SearchSuggestions,
}

impl EndpointKind {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Browse => "browse",
            Self::Next => "next",
            Self::Player => "player",
            Self::Feedback => "feedback",
            Self::Like => "like/like",
            Self::RemoveLike => "like/removelike",
            Self::AccountMenu => "account/account_menu",
            Self::SearchSuggestions => "music/get_search_suggestions",
        }
    }

    /// Client the request is made as. Player requests use the Android
    /// music client, which returns unciphered audio formats more often.
    pub fn identity(&self) -> &'static ClientIdentity {
        match self {
            Self::Player => &ClientIdentity::ANDROID_MUSIC,
            _ => &ClientIdentity::WEB_REMIX,
        }
    }

    /// Requests that act on the user's account and always carry credentials.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            Self::Feedback | Self::Like | Self::RemoveLike | Self::AccountMenu
        )
    }
}
