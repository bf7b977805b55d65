use gallery_core::{Config, Mode};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod layout;
pub mod logger;
pub mod pages;
pub mod routes;
pub mod source;
pub mod thumbnail;

use crate::routes::{switch, Route};

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Picks the data source mode. `GALLERY_ENV` is read at build time; without
/// it debug builds talk to the local fixture and release builds to Imgur.
pub fn app_config() -> Config {
    let default = if cfg!(debug_assertions) {
        Mode::Development
    } else {
        Mode::Production
    };
    Config::new(Mode::from_env(option_env!("GALLERY_ENV"), default))
}

// ----- App Root -----

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| app_config());

    html! {
        <ContextProvider<Config> context={(*config).clone()}>
            <BrowserRouter>
                <main>
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<Config>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    logger::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    log::info!("starting gallery in {:?} mode", app_config().mode);

    yew::Renderer::<App>::new().render();
}
