use crate::model::{GalleryItem, MediaKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileMedia {
    Video { src: String },
    Image { src: String, alt: String },
}

/// What the grid shows for one gallery item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub key: String,
    pub title: String,
    pub media: TileMedia,
}

impl Tile {
    /// `None` when the item has nothing to show.
    pub fn from_item(item: &GalleryItem) -> Option<Tile> {
        let asset = item.representative_asset()?;

        let media = match asset.kind() {
            MediaKind::Video => TileMedia::Video {
                src: asset.link.clone(),
            },
            MediaKind::Image => TileMedia::Image {
                src: asset.link.clone(),
                alt: item.title.clone(),
            },
        };

        Some(Tile {
            key: item.id.clone(),
            title: item.title.clone(),
            media,
        })
    }

    pub fn is_video(&self) -> bool {
        matches!(self.media, TileMedia::Video { .. })
    }
}
