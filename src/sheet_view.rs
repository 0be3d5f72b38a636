use aethereal_core::PageContent;
use yew::prelude::*;

use crate::page_renderer::render_page;

#[derive(Properties, PartialEq)]
pub(crate) struct SheetViewProps {
    pub index: usize,
    pub front: &'static PageContent,
    pub back: Option<&'static PageContent>,
    pub flipped: bool,
    pub z_index: usize,
    pub front_active: bool,
    pub back_active: bool,
    pub on_flip: Callback<usize>,
}

/// One leaf of the book. The front face shows while the sheet rests on the
/// right pile; turning it rotates the leaf about the spine so the back face
/// lands on the left pile.
#[function_component(SheetView)]
pub(crate) fn sheet_view(props: &SheetViewProps) -> Html {
    let onclick = {
        let on_flip = props.on_flip.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_flip.emit(index))
    };
    let style = format!("z-index: {};", props.z_index);
    let label = if props.flipped {
        "Turn back"
    } else {
        "Turn page"
    };
    html! {
        <div
            class={classes!("sheet", props.flipped.then_some("flipped"))}
            style={style}
            data-sheet={props.index.to_string()}
            title={label}
            {onclick}
        >
            <div class="face face-front">
                <div class="face-inner">
                    { render_page(Some(props.front), props.front_active) }
                </div>
                <div class="spine-shadow spine-shadow-front"></div>
            </div>
            <div class="face face-back">
                <div class="face-inner">
                    { render_page(props.back, props.back_active) }
                </div>
                <div class="spine-shadow spine-shadow-back"></div>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::time::Duration;

    use aethereal_core::{
        Alignment, BackPage, CoverPage, ImagePage, QuotePage, TextPage,
    };
    use wasm_bindgen_test::*;
    use web_sys::Element;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    static COVER: PageContent = PageContent::Cover(CoverPage {
        id: 0,
        title: "AETHEREAL",
        subtitle: Some("Issue 01"),
        text: None,
        image_url: None,
    });
    static INTRO: PageContent = PageContent::Intro(TextPage {
        id: 1,
        title: Some("Breathe"),
        subtitle: None,
        text: Some("Slow down."),
        alignment: Alignment::Center,
    });
    static ARTICLE: PageContent = PageContent::Article(TextPage {
        id: 2,
        title: Some("Light"),
        subtitle: Some("Essay"),
        text: Some("Morning comes."),
        alignment: Alignment::Left,
    });
    static QUOTE: PageContent = PageContent::Quote(QuotePage {
        id: 3,
        text: "Silence the mind.",
        attribution: None,
    });
    static IMAGE: PageContent = PageContent::Image(ImagePage {
        id: 4,
        image_url: "plate.jpg",
        caption: Some("Fog"),
    });
    static BACK: PageContent = PageContent::Back(BackPage {
        id: 5,
        title: Some("Until next time"),
        text: None,
        image_url: None,
    });

    fn props(
        front: &'static PageContent,
        back: Option<&'static PageContent>,
        front_active: bool,
        back_active: bool,
    ) -> SheetViewProps {
        SheetViewProps {
            index: 0,
            front,
            back,
            flipped: false,
            z_index: 1,
            front_active,
            back_active,
            on_flip: Callback::from(|_: usize| ()),
        }
    }

    async fn mount(props: SheetViewProps) -> Element {
        let root = gloo::utils::document()
            .create_element("div")
            .expect("root element");
        yew::Renderer::<SheetView>::with_root_and_props(root.clone(), props).render();
        yew::platform::time::sleep(Duration::from_millis(20)).await;
        root
    }

    fn has(root: &Element, selector: &str) -> bool {
        root.query_selector(selector).expect("selector").is_some()
    }

    #[wasm_bindgen_test]
    async fn unpaired_sheet_gets_a_blank_back() {
        let root = mount(props(&BACK, None, true, false)).await;
        assert!(has(&root, ".face-front .page-back"));
        assert!(has(&root, ".face-back .page.page-blank"));
    }

    #[wasm_bindgen_test]
    async fn only_flagged_faces_are_active() {
        let root = mount(props(&COVER, Some(&INTRO), true, false)).await;
        assert!(has(&root, ".face-front .page.is-active"));
        assert!(!has(&root, ".face-back .is-active"));
        assert!(!has(&root, ".face.active"));

        let root = mount(props(&COVER, Some(&INTRO), false, true)).await;
        assert!(!has(&root, ".face-front .is-active"));
        assert!(has(&root, ".face-back .page.is-active"));

        let root = mount(props(&COVER, Some(&INTRO), false, false)).await;
        assert!(!has(&root, ".is-active"));
    }

    #[wasm_bindgen_test]
    async fn each_kind_renders_its_own_template() {
        let pairs: [(&'static PageContent, &'static PageContent, &str, &str); 3] = [
            (&COVER, &INTRO, "page-cover", "page-intro"),
            (&ARTICLE, &QUOTE, "page-article", "page-quote"),
            (&IMAGE, &BACK, "page-image", "page-back"),
        ];
        for (front, back, front_class, back_class) in pairs {
            let root = mount(props(front, Some(back), false, false)).await;
            assert!(
                has(&root, &format!(".face-front .page.{front_class}")),
                "front missing {front_class}"
            );
            assert!(
                has(&root, &format!(".face-back .page.{back_class}")),
                "back missing {back_class}"
            );
        }
    }

    #[wasm_bindgen_test]
    async fn text_pages_carry_their_alignment() {
        let root = mount(props(&ARTICLE, Some(&INTRO), true, true)).await;
        assert!(has(&root, ".face-front .page-body.align-left"));
        assert!(has(&root, ".face-back .page-body.align-center"));
    }
}
