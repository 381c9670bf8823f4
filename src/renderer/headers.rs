use serde::Deserialize;

use super::{
    common::{Badge, Menu, NavigationEndpoint, Runs, ServiceEndpoint, ThumbnailRenderer},
    sections::MusicDescriptionShelfRenderer,
};

/// `header` field of a browse response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderNode {
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_immersive_header_renderer: Option<ArtistHeaderRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_visual_header_renderer: Option<ArtistHeaderRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_detail_header_renderer: Option<MusicDetailHeaderRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_responsive_header_renderer: Option<MusicResponsiveHeaderRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub music_editable_playlist_detail_header_renderer:
        Option<MusicEditablePlaylistDetailHeaderRenderer>,
}

impl HeaderNode {
    pub fn artist(&self) -> Option<&ArtistHeaderRenderer> {
        self.music_immersive_header_renderer
            .as_ref()
            .or(self.music_visual_header_renderer.as_ref())
    }
}

/// Artist/channel header (immersive or visual variant).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistHeaderRenderer {
    pub title: Option<Runs>,
    pub description: Option<Runs>,
    pub thumbnail: Option<ThumbnailRenderer>,
    pub foreground_thumbnail: Option<ThumbnailRenderer>,
    pub subscription_button: Option<SubscriptionButton>,
    pub play_button: Option<HeaderButton>,
    pub start_radio_button: Option<HeaderButton>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub menu: Option<Menu>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionButton {
    pub subscribe_button_renderer: Option<SubscribeButtonRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeButtonRenderer {
    pub channel_id: Option<String>,
    pub subscriber_count_text: Option<Runs>,
    pub long_subscriber_count_text: Option<Runs>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderButton {
    pub button_renderer: Option<HeaderButtonRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderButtonRenderer {
    pub navigation_endpoint: Option<NavigationEndpoint>,
}

impl HeaderButton {
    pub fn endpoint(&self) -> Option<&NavigationEndpoint> {
        self.button_renderer.as_ref()?.navigation_endpoint.as_ref()
    }
}

/// Album/playlist header used by older response variants.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicDetailHeaderRenderer {
    pub title: Option<Runs>,
    pub subtitle: Option<Runs>,
    pub second_subtitle: Option<Runs>,
    pub description: Option<Runs>,
    pub thumbnail: Option<ThumbnailRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub subtitle_badges: Vec<Badge>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub menu: Option<Menu>,
}

/// Album/playlist/podcast header used by newer response variants.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicResponsiveHeaderRenderer {
    pub title: Option<Runs>,
    pub subtitle: Option<Runs>,
    pub second_subtitle: Option<Runs>,
    pub strapline_text_one: Option<Runs>,
    pub thumbnail: Option<ThumbnailRenderer>,
    pub description: Option<DescriptionHolder>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub subtitle_badge: Vec<Badge>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::vec")]
    pub buttons: Vec<ResponsiveHeaderButton>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionHolder {
    pub music_description_shelf_renderer: Option<MusicDescriptionShelfRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveHeaderButton {
    pub music_play_button_renderer: Option<super::common::PlayButton>,
    pub toggle_button_renderer: Option<ToggleButtonRenderer>,
    #[serde(default, deserialize_with = "crate::renderer::lenient::opt")]
    pub menu_renderer: Option<super::common::MenuRenderer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleButtonRenderer {
    pub default_icon: Option<super::common::Icon>,
    pub default_service_endpoint: Option<ServiceEndpoint>,
    pub toggled_service_endpoint: Option<ServiceEndpoint>,
}

impl MusicResponsiveHeaderRenderer {
    pub fn description_text(&self) -> Option<String> {
        self.description
            .as_ref()?
            .music_description_shelf_renderer
            .as_ref()?
            .description
            .as_ref()?
            .text()
    }

    pub fn play_endpoint(&self) -> Option<&NavigationEndpoint> {
        self.buttons.iter().find_map(|b| {
            b.music_play_button_renderer
                .as_ref()?
                .play_navigation_endpoint
                .as_ref()
        })
    }

    pub fn menu(&self) -> Option<&super::common::MenuRenderer> {
        self.buttons.iter().find_map(|b| b.menu_renderer.as_ref())
    }

    /// Library toggle on the header: `(add, remove)` feedback tokens.
    pub fn library_tokens(&self) -> super::common::LibraryTokens {
        for button in &self.buttons {
            let Some(toggle) = button.toggle_button_renderer.as_ref() else {
                continue;
            };
            let default_token = toggle
                .default_service_endpoint
                .as_ref()
                .and_then(ServiceEndpoint::feedback_token)
                .map(str::to_string);
            let toggled_token = toggle
                .toggled_service_endpoint
                .as_ref()
                .and_then(ServiceEndpoint::feedback_token)
                .map(str::to_string);
            if default_token.is_none() && toggled_token.is_none() {
                continue;
            }
            let saved = toggle
                .default_icon
                .as_ref()
                .map(|i| i.is("LIBRARY_SAVED") || i.is("LIBRARY_REMOVE"))
                .unwrap_or(false);
            return if saved {
                super::common::LibraryTokens {
                    add: toggled_token,
                    remove: default_token,
                }
            } else {
                super::common::LibraryTokens {
                    add: default_token,
                    remove: toggled_token,
                }
            };
        }
        super::common::LibraryTokens::default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicEditablePlaylistDetailHeaderRenderer {
    pub header: Option<Box<HeaderNode>>,
}
