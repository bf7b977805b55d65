use serde::{Deserialize, Serialize};

/// Mime tag Imgur uses for animated media that should play as a video tile.
pub const VIDEO_MP4: &str = "video/mp4";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MediaAsset {
    pub link: String,
    #[serde(rename = "type", default)]
    pub mime: String,
}

impl MediaAsset {
    pub fn kind(&self) -> MediaKind {
        if self.mime == VIDEO_MP4 {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// One feed entry. Albums carry their media in `images`, single posts carry
/// it at the top level (`link` + `type`), which ends up in `asset`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawGalleryItem", into = "RawGalleryItem")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub is_album: bool,
    pub images_count: Option<u32>,
    pub images: Vec<MediaAsset>,
    pub asset: Option<MediaAsset>,
}

impl GalleryItem {
    /// First album image if there is one, else the item's own media.
    pub fn representative_asset(&self) -> Option<&MediaAsset> {
        self.images.first().or(self.asset.as_ref())
    }
}

// Wire shape of a gallery entry as the Imgur API returns it.
#[derive(Deserialize, Serialize)]
struct RawGalleryItem {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    is_album: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    images_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    images: Vec<MediaAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    mime: Option<String>,
}

impl From<RawGalleryItem> for GalleryItem {
    fn from(raw: RawGalleryItem) -> Self {
        // an album's `link` points at the album page, not at media
        let asset = match (raw.is_album, raw.link) {
            (false, Some(link)) => Some(MediaAsset {
                link,
                mime: raw.mime.unwrap_or_default(),
            }),
            _ => None,
        };

        GalleryItem {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            is_album: raw.is_album,
            images_count: raw.images_count,
            images: raw.images,
            asset,
        }
    }
}

impl From<GalleryItem> for RawGalleryItem {
    fn from(item: GalleryItem) -> Self {
        let (link, mime) = match item.asset {
            Some(asset) => (Some(asset.link), Some(asset.mime)),
            None => (None, None),
        };

        RawGalleryItem {
            id: item.id,
            title: Some(item.title),
            is_album: item.is_album,
            images_count: item.images_count,
            images: item.images,
            link,
            mime,
        }
    }
}

/// Response envelope shared by the Imgur API and the local fixture endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GalleryPage {
    pub data: Vec<GalleryItem>,
    pub success: bool,
    pub status: u16,
}
