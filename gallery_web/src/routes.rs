use yew_router::prelude::*;
use yew::prelude::*;

use crate::pages::*;

#[derive(Routable, PartialEq, Eq, Clone, Debug)]
pub enum Route {
    #[at("/")]
    Gallery,
    #[not_found]
    #[at("/404")]
    NotFound,
}

// ----- Route Switch -----

pub fn switch(route: Route) -> Html {
    let page = match route {
        Route::Gallery => html! { <Gallery /> },
        Route::NotFound => html! { <NotFound /> },
    };

    html! {
        <Layout>
            {page}
        </Layout>
    }
}
