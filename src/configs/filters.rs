use serde::{Deserialize, Serialize};

/// Content filters applied to every item list the client returns.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct FiltersConfig {
    #[serde(default)]
    pub hide_explicit: bool,
    #[serde(default)]
    pub hide_video_songs: bool,
    #[serde(default)]
    pub hide_shorts: bool,
}
