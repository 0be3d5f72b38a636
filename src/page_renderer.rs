use aethereal_core::{
    Alignment, BackPage, CoverPage, ImagePage, PageContent, PageId, QuotePage, TextPage,
};
use yew::prelude::*;

const ORNAMENT: &str = "❧";

/// Builds the visual tree of one page face. `None` is the blank back of an
/// unpaired trailing page. Inactive pages keep their items in the hidden
/// pre-entrance state so the animation replays on the next visit.
pub(crate) fn render_page(content: Option<&PageContent>, is_active: bool) -> Html {
    let Some(content) = content else {
        return html! { <div class="page page-blank"></div> };
    };
    match content {
        PageContent::Cover(page) => render_cover(page, is_active),
        PageContent::Intro(page) => render_text(page, true, is_active),
        PageContent::Article(page) => render_text(page, false, is_active),
        PageContent::Quote(page) => render_quote(page, is_active),
        PageContent::Image(page) => render_image(page, is_active),
        PageContent::Back(page) => render_back(page, is_active),
    }
}

fn page_classes(kind: &'static str, is_active: bool) -> Classes {
    classes!("page", kind, is_active.then_some("is-active"))
}

fn folio(id: PageId) -> Html {
    html! { <div class="folio">{ id.to_string() }</div> }
}

fn render_cover(page: &CoverPage, is_active: bool) -> Html {
    html! {
        <div class={page_classes("page-cover", is_active)}>
            <div class="page-body align-center">
                if let Some(subtitle) = page.subtitle {
                    <h2 class="animate-item delay-1 cover-subtitle">{ subtitle }</h2>
                }
                <h1 class="animate-item delay-2 cover-title">{ page.title }</h1>
                <div class="animate-item delay-3 rule"></div>
                if let Some(text) = page.text {
                    <p class="animate-item delay-4 cover-tagline">{ text }</p>
                }
            </div>
            if let Some(url) = page.image_url {
                <div class="cover-image">
                    <img src={url} alt="" loading="lazy" />
                </div>
            }
            <div class="grain"></div>
        </div>
    }
}

fn alignment_class(alignment: Alignment) -> String {
    format!("align-{}", alignment.as_str())
}

fn render_text(page: &TextPage, is_intro: bool, is_active: bool) -> Html {
    let kind = if is_intro { "page-intro" } else { "page-article" };
    html! {
        <div class={page_classes(kind, is_active)}>
            <div class={classes!("page-body", alignment_class(page.alignment))}>
                if let Some(subtitle) = page.subtitle {
                    <span class="animate-item delay-1 kicker">{ subtitle }</span>
                }
                if let Some(title) = page.title {
                    <h2 class="animate-item delay-2 headline">{ title }</h2>
                }
                if let Some(text) = page.text {
                    <div class="animate-item delay-3 body-copy">
                        <p>{ text }</p>
                    </div>
                }
                if is_intro {
                    <div class="animate-item delay-4 ornament">{ ORNAMENT }</div>
                }
            </div>
            { folio(page.id) }
            <div class="grain faint"></div>
        </div>
    }
}

fn render_quote(page: &QuotePage, is_active: bool) -> Html {
    html! {
        <div class={page_classes("page-quote", is_active)}>
            <div class="page-body align-center">
                <div class="animate-item delay-1 quote-mark">{ "\"" }</div>
                <p class="animate-item delay-2 quote-text">{ page.text }</p>
                if let Some(attribution) = page.attribution {
                    <div class="animate-item delay-4 attribution">{ attribution }</div>
                }
            </div>
            { folio(page.id) }
        </div>
    }
}

fn render_image(page: &ImagePage, is_active: bool) -> Html {
    html! {
        <div class={page_classes("page-image", is_active)}>
            <img class="plate" src={page.image_url} alt="" loading="lazy" />
            <div class="plate-tint"></div>
            if let Some(caption) = page.caption {
                <div class="animate-item delay-5 caption">
                    <p>{ caption }</p>
                </div>
            }
            <div class="grain"></div>
        </div>
    }
}

fn render_back(page: &BackPage, is_active: bool) -> Html {
    html! {
        <div class={page_classes("page-back", is_active)}>
            <div class="page-body align-center">
                <h3 class="animate-item delay-1 fin">{ "FIN" }</h3>
                if let Some(title) = page.title {
                    <h1 class="animate-item delay-2 back-title">{ title }</h1>
                }
                if let Some(text) = page.text {
                    <p class="animate-item delay-3 back-text">{ text }</p>
                }
            </div>
            if let Some(url) = page.image_url {
                <div class="cover-image faint">
                    <img src={url} alt="" loading="lazy" />
                </div>
            }
            <div class="grain"></div>
        </div>
    }
}
