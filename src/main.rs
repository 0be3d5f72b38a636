mod app;
mod background;
mod boot;
mod config;
mod error;
mod input;
mod magazine;
mod page_renderer;
mod sheet_view;

use web_sys::Element;

use crate::error::ViewerError;

fn mount_root() -> Result<Element, ViewerError> {
    let document = web_sys::window()
        .ok_or(ViewerError::NoWindow)?
        .document()
        .ok_or(ViewerError::NoDocument)?;
    document
        .get_element_by_id("app")
        .or_else(|| document.body().map(Element::from))
        .ok_or(ViewerError::NoDocument)
}

fn main() {
    boot::set_phase("Loading", "starting the viewer");
    match mount_root() {
        Ok(root) => {
            yew::Renderer::<app::App>::with_root(root).render();
        }
        Err(err) => {
            gloo::console::error!("viewer failed to start", err.to_string());
            boot::fail(
                err.code(),
                "The magazine could not open",
                "This page needs a browser window with a document",
            );
        }
    }
}
