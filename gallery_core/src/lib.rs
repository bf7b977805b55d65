//! Domain logic of the masonry gallery: the feed model, the filter tuple,
//! column breakpoints, the view state machine and the data-source contract.
//! Nothing in here touches the DOM, so all of it runs under plain `cargo test`.

pub mod filter;
pub mod layout;
pub mod model;
pub mod source;
pub mod tile;
pub mod view;

pub use filter::{FilterState, Section, Sort, TimeWindow};
pub use layout::{columns, Columns, LayoutController, PresentationHook};
pub use model::{GalleryItem, GalleryPage, MediaAsset, MediaKind};
pub use source::{decode_page, Config, FetchError, GalleryRequest, GallerySource, Mode};
pub use tile::{Tile, TileMedia};
pub use view::{GalleryAction, GalleryState, Phase, Ticket};
