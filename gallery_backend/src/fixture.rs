use anyhow::{Context, Result};
use gallery_core::{decode_page, GalleryPage};

/// Sample feed served by `/api/hello`, shaped like an Imgur gallery response.
const FIXTURE: &str = include_str!("../fixtures/gallery.json");

pub fn load_fixture() -> Result<GalleryPage> {
    decode_page(FIXTURE).context("Bundled gallery fixture does not decode")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use gallery_core::Tile;

    use super::*;

    #[test]
    fn fixture_decodes_with_unique_ids() {
        let page = load_fixture().expect("fixture");

        let ids: HashSet<_> = page.data.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids.len(), page.data.len());
        assert!(page.success);
        assert_eq!(page.status, 200);
    }

    #[test]
    fn fixture_covers_every_tile_kind() {
        let page = load_fixture().expect("fixture");
        let tiles: Vec<_> = page.data.iter().filter_map(Tile::from_item).collect();

        assert!(tiles.iter().any(Tile::is_video));
        assert!(tiles.iter().any(|t| !t.is_video()));
        // the emptied album has nothing to show
        assert_eq!(tiles.len(), page.data.len() - 1);
    }
}
