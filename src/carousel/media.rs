use serde::{Deserialize, Serialize};

use crate::models::FeatureItem;

pub const DEFAULT_MEDIA_HOST: &str = "res.cloudinary.com/forestry-demo";

const PLAYBACK_TRANSFORM: &str = "video/upload/q_80,h_584/e_accelerate:-20";
const POSTER_TRANSFORM: &str = "video/upload/so_0";

/// Remote host serving item videos and their poster frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaHost {
    host: String,
}

impl Default for MediaHost {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIA_HOST)
    }
}

impl MediaHost {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into().trim_matches('/').to_string(),
        }
    }

    pub fn playback_base(&self, video_id: &str) -> String {
        format!("https://{}/{}/{}", self.host, PLAYBACK_TRANSFORM, video_id)
    }

    pub fn poster_url(&self, video_id: &str) -> String {
        format!("https://{}/{}/{}.jpg", self.host, POSTER_TRANSFORM, video_id)
    }

    pub fn video_for(&self, item: &FeatureItem) -> Option<VideoMedia> {
        let video_id = item.video_src()?;
        let base = self.playback_base(video_id);

        Some(VideoMedia {
            poster: self.poster_url(video_id),
            webm: format!("{}.webm", base),
            mp4: format!("{}.mp4", base),
        })
    }

    pub fn resolve(
        &self,
        items: &[FeatureItem],
        index: Option<usize>,
    ) -> Option<VideoMedia> {
        index
            .and_then(|i| items.get(i))
            .and_then(|item| self.video_for(item))
    }
}

/// Playable sources plus poster frame for one item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoMedia {
    pub poster: String,
    pub webm: String,
    pub mp4: String,
}

/// Media for the item at `index` on the default host.
pub fn resolve_media(
    items: &[FeatureItem],
    index: Option<usize>,
) -> Option<VideoMedia> {
    MediaHost::default().resolve(items, index)
}
