use aethereal_core::{magazine, MAGAZINE_TITLE};
use yew::prelude::*;

use crate::background::BackgroundCanvas;
use crate::boot;
use crate::config::load_viewer_config;
use crate::error::ViewerError;
use crate::magazine::Magazine;

fn session_seed() -> u64 {
    let now = js_sys::Date::now();
    let jitter = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (now as u64).rotate_left(17) ^ jitter
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let config = use_memo((), |_| {
        boot::set_phase("Setting up", "reading viewer options");
        load_viewer_config()
    });
    let seed = use_memo((), |_| session_seed());
    let background_error = use_state(|| None::<ViewerError>);

    let on_background_error = {
        let background_error = background_error.clone();
        Callback::from(move |err: ViewerError| {
            gloo::console::error!("background unavailable", err.code(), err.to_string());
            background_error.set(Some(err));
        })
    };

    use_effect_with((), |_| {
        boot::set_phase("Opening", "binding the pages");
        gloo::console::log!("magazine mounted", MAGAZINE_TITLE, magazine().len() as u32);
        boot::ready();
    });

    html! {
        <div class="app">
            if config.background && background_error.is_none() {
                <BackgroundCanvas
                    config={(*config).clone()}
                    seed={*seed}
                    on_error={on_background_error}
                />
            }
            if let Some(err) = (*background_error).as_ref() {
                <div class="notice" role="status">
                    { format!("Background disabled: {err}") }
                </div>
            }
            <main class="stage">
                <Magazine
                    title={MAGAZINE_TITLE}
                    content={magazine()}
                    config={(*config).clone()}
                />
            </main>
        </div>
    }
}
