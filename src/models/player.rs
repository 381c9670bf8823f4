use serde::{Deserialize, Serialize};

/// Audio itag priority: 251 = Opus ~160 kbps, 250 = Opus ~70 kbps, 140 = AAC 128 kbps.
pub const AUDIO_ITAG_PRIORITY: &[u32] = &[251, 250, 140];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    #[serde(default)]
    pub playability_status: PlayabilityStatus,
    pub video_details: Option<VideoDetails>,
    pub streaming_data: Option<StreamingData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayabilityStatus {
    #[serde(default)]
    pub status: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub channel_id: Option<String>,
    pub length_seconds: Option<String>,
    #[serde(default)]
    pub is_live_content: bool,
    pub music_video_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingData {
    pub expires_in_seconds: Option<String>,
    #[serde(default)]
    pub formats: Vec<Format>,
    #[serde(default)]
    pub adaptive_formats: Vec<Format>,
    pub hls_manifest_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    pub itag: u32,
    pub url: Option<String>,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub bitrate: u64,
    pub content_length: Option<String>,
    pub audio_quality: Option<String>,
    pub approx_duration_ms: Option<String>,
    pub loudness_db: Option<f64>,
    /// Present instead of `url` on ciphered formats. Deciphering is left to callers.
    pub signature_cipher: Option<String>,
}

impl Format {
    pub fn is_audio(&self) -> bool {
        self.mime_type.starts_with("audio/")
    }
}

impl PlayerResponse {
    pub fn is_playable(&self) -> bool {
        self.playability_status.status == "OK"
    }

    pub fn duration_secs(&self) -> Option<u32> {
        self.video_details
            .as_ref()
            .and_then(|d| d.length_seconds.as_deref())
            .and_then(|s| s.parse().ok())
    }

    /// Picks by itag priority, then any audio format by highest bitrate.
    pub fn best_audio_format(&self) -> Option<&Format> {
        let data = self.streaming_data.as_ref()?;
        let all: Vec<&Format> = data
            .adaptive_formats
            .iter()
            .chain(data.formats.iter())
            .collect();

        for &target in AUDIO_ITAG_PRIORITY {
            if let Some(f) = all.iter().find(|f| f.itag == target && f.is_audio()) {
                return Some(*f);
            }
        }

        all.into_iter()
            .filter(|f| f.is_audio())
            .max_by_key(|f| f.bitrate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_best_audio_format_prefers_itag_priority() {
        let response: PlayerResponse = serde_json::from_value(json!({
            "playabilityStatus": { "status": "OK" },
            "videoDetails": { "videoId": "abc", "title": "t", "author": "a", "lengthSeconds": "212" },
            "streamingData": {
                "adaptiveFormats": [
                    { "itag": 140, "mimeType": "audio/mp4; codecs=\"mp4a.40.2\"", "bitrate": 130000 },
                    { "itag": 251, "mimeType": "audio/webm; codecs=\"opus\"", "bitrate": 150000 },
                    { "itag": 137, "mimeType": "video/mp4", "bitrate": 4000000 }
                ]
            }
        }))
        .expect("valid player response");

        assert!(response.is_playable());
        assert_eq!(response.duration_secs(), Some(212));
        assert_eq!(response.best_audio_format().map(|f| f.itag), Some(251));
    }

    #[test]
    fn test_best_audio_format_falls_back_to_highest_bitrate() {
        let response: PlayerResponse = serde_json::from_value(json!({
            "playabilityStatus": { "status": "OK" },
            "streamingData": {
                "adaptiveFormats": [
                    { "itag": 139, "mimeType": "audio/mp4", "bitrate": 48000 },
                    { "itag": 249, "mimeType": "audio/webm", "bitrate": 60000 }
                ]
            }
        }))
        .expect("valid player response");

        assert_eq!(response.best_audio_format().map(|f| f.itag), Some(249));
    }

    #[test]
    fn test_unplayable_status() {
        let response: PlayerResponse = serde_json::from_value(json!({
            "playabilityStatus": { "status": "LOGIN_REQUIRED", "reason": "Sign in" }
        }))
        .expect("valid player response");
        assert!(!response.is_playable());
        assert!(response.best_audio_format().is_none());
    }
}
