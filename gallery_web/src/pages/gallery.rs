use std::rc::Rc;

use gallery_core::view::fetch;
use gallery_core::{Config, GalleryAction, GalleryState, Phase};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::layout::use_grid_columns;
use crate::source::HttpGallerySource;
use crate::thumbnail::Thumbnail;

/// Yew-facing wrapper so the framework-free state machine can back a reducer.
#[derive(Clone, Default, PartialEq)]
struct GalleryStore(GalleryState);

impl Reducible for GalleryStore {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.0.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let config = use_context::<Config>().unwrap_or_else(crate::app_config);
    let store = use_reducer(GalleryStore::default);
    let grid_ref = use_node_ref();

    use_grid_columns(grid_ref.clone());

    // One fetch per generation; the ticket guards against late responses.
    {
        let dispatcher = store.dispatcher();
        let needs_fetch = store.0.needs_fetch();
        let ticket = store.0.ticket();
        let source = HttpGallerySource::new(config);

        use_effect_with(ticket.generation, move |_| {
            if needs_fetch {
                spawn_local(async move {
                    let action = fetch(&source, ticket).await;
                    dispatcher.dispatch(action);
                });
            }
            || ()
        });
    }

    let on_load_more = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(GalleryAction::LoadMore))
    };

    let content = match store.0.phase() {
        Phase::Loading => html! { <p class="gallery-status">{ "Loading..." }</p> },
        Phase::Error => html! { <p class="gallery-status">{ "Error" }</p> },
        Phase::Loaded(_) => html! {
            <div class="gallery-grid">
                {
                    for store.0.tiles().into_iter().map(|tile| html! {
                        <Thumbnail key={tile.key.clone()} tile={tile.clone()} />
                    })
                }
                <button class="load-more" onclick={on_load_more}>{ "Load more" }</button>
            </div>
        },
    };

    html! {
        <section class="gallery" ref={grid_ref}>
            { content }
        </section>
    }
}
