use crate::filter::FilterState;
use crate::model::GalleryPage;
use crate::source::{FetchError, GallerySource};
use crate::tile::Tile;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Error,
    Loaded(GalleryPage),
}

/// Identifies one fetch. Only the ticket of the latest generation may
/// change what the view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub filter: FilterState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryAction {
    LoadMore,
    Resolved {
        ticket: Ticket,
        result: Result<GalleryPage, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    filter: FilterState,
    phase: Phase,
    generation: u64,
}

impl Default for GalleryState {
    fn default() -> Self {
        GalleryState::new(FilterState::default())
    }
}

impl GalleryState {
    pub fn new(filter: FilterState) -> Self {
        GalleryState {
            filter,
            phase: Phase::Loading,
            generation: 1,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn needs_fetch(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn ticket(&self) -> Ticket {
        Ticket {
            generation: self.generation,
            filter: self.filter.clone(),
        }
    }

    /// Returns whether the state changed.
    pub fn apply(&mut self, action: GalleryAction) -> bool {
        match action {
            GalleryAction::LoadMore => {
                self.filter.load_more();
                self.generation += 1;
                self.phase = Phase::Loading;
                log::debug!("load more: page {} (generation {})", self.filter.page(), self.generation);
                true
            }
            GalleryAction::Resolved { ticket, result } => {
                if ticket.generation != self.generation {
                    log::debug!(
                        "dropping stale response for generation {} (current {})",
                        ticket.generation,
                        self.generation
                    );
                    return false;
                }

                self.phase = match result {
                    Ok(page) => {
                        log::info!("loaded page {} with {} items", ticket.filter.page(), page.data.len());
                        Phase::Loaded(page)
                    }
                    Err(err) => {
                        log::warn!("gallery fetch failed: {}", err);
                        Phase::Error
                    }
                };
                true
            }
        }
    }

    /// Tiles for the loaded page, skipping items without media.
    pub fn tiles(&self) -> Vec<Tile> {
        match &self.phase {
            Phase::Loaded(page) => page.data.iter().filter_map(Tile::from_item).collect(),
            _ => Vec::new(),
        }
    }
}

/// Runs the fetch a ticket stands for and wraps the outcome as an action.
pub async fn fetch<S: GallerySource>(source: &S, ticket: Ticket) -> GalleryAction {
    let result = source.fetch_page(&ticket.filter).await;
    GalleryAction::Resolved { ticket, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GalleryItem, MediaAsset};

    fn page(ids: &[&str]) -> GalleryPage {
        GalleryPage {
            data: ids
                .iter()
                .map(|id| GalleryItem {
                    id: id.to_string(),
                    title: id.to_string(),
                    is_album: false,
                    images_count: None,
                    images: vec![],
                    asset: Some(MediaAsset { link: format!("{}.png", id), mime: "image/png".into() }),
                })
                .collect(),
            success: true,
            status: 200,
        }
    }

    #[test]
    fn starts_loading() {
        let state = GalleryState::default();

        assert_eq!(state.phase(), &Phase::Loading);
        assert!(state.needs_fetch());
        assert!(state.tiles().is_empty());
    }

    #[test]
    fn load_more_enters_loading_with_new_generation() {
        let mut state = GalleryState::default();
        let first = state.ticket();
        state.apply(GalleryAction::Resolved { ticket: first.clone(), result: Ok(page(&["a"])) });

        state.apply(GalleryAction::LoadMore);

        assert_eq!(state.phase(), &Phase::Loading);
        assert_eq!(state.filter().page(), 2);
        assert_ne!(state.ticket(), first);
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut state = GalleryState::default();
        let stale = state.ticket();
        state.apply(GalleryAction::LoadMore);
        let latest = state.ticket();

        // latest resolves first, the older request lands afterwards
        assert!(state.apply(GalleryAction::Resolved { ticket: latest, result: Ok(page(&["new"])) }));
        assert!(!state.apply(GalleryAction::Resolved { ticket: stale, result: Ok(page(&["old"])) }));

        let keys: Vec<_> = state.tiles().into_iter().map(|t| t.key).collect();
        assert_eq!(keys, vec!["new"]);
    }

    #[test]
    fn stale_failure_does_not_mask_data() {
        let mut state = GalleryState::default();
        let stale = state.ticket();
        state.apply(GalleryAction::LoadMore);
        let latest = state.ticket();
        state.apply(GalleryAction::Resolved { ticket: latest, result: Ok(page(&["x"])) });

        state.apply(GalleryAction::Resolved {
            ticket: stale,
            result: Err(FetchError::Network("offline".into())),
        });

        assert!(matches!(state.phase(), Phase::Loaded(_)));
    }

    #[test]
    fn every_load_more_fetches_and_keeps_only_the_current_page() {
        let mut state = GalleryState::default();

        for page_number in 1..=50u32 {
            assert!(state.needs_fetch(), "page {} should be fetched", page_number);
            let ticket = state.ticket();
            assert_eq!(ticket.filter.page(), page_number);

            let id = page_number.to_string();
            state.apply(GalleryAction::Resolved { ticket, result: Ok(page(&[id.as_str()])) });
            assert_eq!(state.tiles().len(), 1);

            state.apply(GalleryAction::LoadMore);
        }

        assert_eq!(state.filter().page(), 51);
        assert_eq!(state.generation(), 51);
        assert!(state.tiles().is_empty());
    }
}
