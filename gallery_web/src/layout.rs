use gallery_core::{Columns, LayoutController, PresentationHook};
use gloo::events::EventListener;
use web_sys::HtmlElement;
use yew::prelude::*;

const COLUMNS_PROPERTY: &str = "--columns";

/// Writes the column count into the `--columns` custom property of the
/// referenced element. Yew never sees the value, so resizing does not
/// re-render the gallery.
pub struct GridStyleHook {
    node: NodeRef,
}

impl GridStyleHook {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }
}

impl PresentationHook for GridStyleHook {
    fn set_columns(&self, columns: Columns) {
        let Some(element) = self.node.cast::<HtmlElement>() else {
            return;
        };

        if let Err(err) = element
            .style()
            .set_property(COLUMNS_PROPERTY, &columns.to_string())
        {
            log::warn!("failed to set {}: {:?}", COLUMNS_PROPERTY, err);
        }
    }
}

fn viewport_width() -> Option<f64> {
    gloo::utils::window().inner_width().ok()?.as_f64()
}

/// Keeps the column count of `node` in sync with the viewport. The resize
/// listener is registered once after the first render and removed when the
/// component unmounts.
#[hook]
pub fn use_grid_columns(node: NodeRef) {
    use_effect_with((), move |_| {
        let mut controller = LayoutController::new(GridStyleHook::new(node));
        if let Some(width) = viewport_width() {
            controller.resize(width);
        }

        let listener = EventListener::new(&gloo::utils::window(), "resize", move |_| {
            if let Some(width) = viewport_width() {
                controller.resize(width);
            }
        });

        move || drop(listener)
    });
}
