use yew::prelude::*;

pub mod gallery;
pub mod layout;

pub use gallery::Gallery;
pub use layout::Layout;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! { <h1>{ "404 - Page Not Found" }</h1> }
}
