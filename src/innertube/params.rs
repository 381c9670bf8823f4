use serde::{Deserialize, Serialize};

/// Result category of a filtered search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFilter {
    Songs,
    Videos,
    Albums,
    Artists,
    FeaturedPlaylists,
    CommunityPlaylists,
    Podcasts,
    Episodes,
    Profiles,
}

impl SearchFilter {
    /// Opaque `params` value selecting the category.
    pub fn params(&self) -> &'static str {
        match self {
            Self::Songs => "EgWKAQIIAWoQEAMQBBAFEBAQCRAKEBUQEQ%3D%3D",
            Self::Videos => "EgWKAQIQAWoKEAkQChAFEAMQBA%3D%3D",
            Self::Albums => "EgWKAQIYAWoKEAkQChAFEAMQBA%3D%3D",
            Self::Artists => "EgWKAQIgAWoKEAkQChAFEAMQBA%3D%3D",
            Self::FeaturedPlaylists => "EgeKAQQoADgBagwQDhAKEAMQBRAJEAQ%3D",
            Self::CommunityPlaylists => "EgeKAQQoAEABagoQAxAEEAoQCRAF",
            Self::Podcasts => "EgWKAQJQAWoIEBAQERADEBU%3D",
            Self::Episodes => "EgWKAQJIAWoIEBAQERADEBU%3D",
            Self::Profiles => "EgWKAQJYAWoIEBAQERADEBU%3D",
        }
    }
}
