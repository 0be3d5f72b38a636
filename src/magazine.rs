use std::cell::RefCell;
use std::rc::Rc;

use aethereal_core::{
    sheets, Face, NavIntent, PageContent, SheetStack, SwipeTracker, ViewerConfig,
};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, TouchEvent};
use yew::prelude::*;

use crate::config::viewport_width;
use crate::input::{keyboard_intent, mouse_x, touch_end_x, touch_start_x, PointerKind};
use crate::sheet_view::SheetView;

/// Navigation state held by the reducer. Saturated moves hand back the same
/// `Rc` so nothing re-renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Navigation {
    stack: SheetStack,
}

impl Navigation {
    pub(crate) fn for_content(content: &[PageContent]) -> Self {
        Self {
            stack: SheetStack::for_content(content),
        }
    }

    pub(crate) fn stack(&self) -> &SheetStack {
        &self.stack
    }
}

impl Reducible for Navigation {
    type Action = NavIntent;

    fn reduce(self: Rc<Self>, intent: NavIntent) -> Rc<Self> {
        let mut stack = self.stack;
        if stack.apply(intent) {
            gloo::console::log!(
                "turn",
                format!("{intent:?}"),
                stack.position_label()
            );
            Rc::new(Self { stack })
        } else {
            self
        }
    }
}

/// Swipe bookkeeping shared between the document touch listeners and the
/// container mouse handlers.
struct SwipeState {
    tracker: SwipeTracker,
    source: Option<PointerKind>,
    suppress_click: bool,
}

impl SwipeState {
    fn new(threshold: f32) -> Self {
        Self {
            tracker: SwipeTracker::new(threshold),
            source: None,
            suppress_click: false,
        }
    }

    fn begin(&mut self, kind: PointerKind, x: f32) {
        if kind == PointerKind::Mouse && self.source == Some(PointerKind::Touch) {
            return;
        }
        self.source = Some(kind);
        self.tracker.begin(x);
    }

    fn finish(&mut self, kind: PointerKind, x: f32) -> Option<NavIntent> {
        if self.source != Some(kind) {
            return None;
        }
        self.source = None;
        if kind == PointerKind::Mouse {
            self.suppress_click = self.tracker.moved_past(x);
        }
        self.tracker.finish(x)
    }

    fn cancel(&mut self) {
        self.source = None;
        self.tracker.cancel();
    }

    fn take_suppressed_click(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct MagazineProps {
    pub title: AttrValue,
    pub content: &'static [PageContent],
    pub config: ViewerConfig,
}

#[function_component(Magazine)]
pub(crate) fn magazine(props: &MagazineProps) -> Html {
    let content = props.content;
    let nav = use_reducer(|| Navigation::for_content(content));
    let swipe = {
        let threshold = props.config.swipe_threshold_px;
        use_mut_ref(move || SwipeState::new(threshold))
    };
    let is_mobile = {
        let config = props.config.clone();
        use_state_eq(move || {
            viewport_width()
                .map(|width| config.is_mobile_width(width))
                .unwrap_or(false)
        })
    };

    {
        let dispatcher = nav.dispatcher();
        let swipe = swipe.clone();
        use_effect_with((), move |_| {
            let listeners = install_document_listeners(dispatcher, swipe);
            move || drop(listeners)
        });
    }

    {
        let is_mobile = is_mobile.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    if let Some(width) = viewport_width() {
                        is_mobile.set(config.is_mobile_width(width));
                    }
                })
            });
            move || drop(listener)
        });
    }

    let stack = *nav.stack();

    let on_flip = {
        let dispatcher = nav.dispatcher();
        let swipe = swipe.clone();
        Callback::from(move |index: usize| {
            if swipe.borrow_mut().take_suppressed_click() {
                return;
            }
            dispatcher.dispatch(NavIntent::FlipSheet(index));
        })
    };
    let on_prev = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavIntent::Backward))
    };
    let on_next = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavIntent::Forward))
    };
    let on_mouse_down = {
        let swipe = swipe.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(x) = mouse_x(&event) {
                swipe.borrow_mut().begin(PointerKind::Mouse, x);
            }
        })
    };
    let on_mouse_up = {
        let swipe = swipe.clone();
        let dispatcher = nav.dispatcher();
        Callback::from(move |event: MouseEvent| {
            let Some(x) = mouse_x(&event) else {
                return;
            };
            let intent = swipe.borrow_mut().finish(PointerKind::Mouse, x);
            if let Some(intent) = intent {
                dispatcher.dispatch(intent);
            }
        })
    };
    let on_mouse_leave = {
        let swipe = swipe.clone();
        Callback::from(move |_: MouseEvent| {
            let mut swipe = swipe.borrow_mut();
            if swipe.source == Some(PointerKind::Mouse) {
                swipe.cancel();
            }
        })
    };

    let mobile = *is_mobile;
    let frame_style = format!("--flip-ms: {}ms;", props.config.flip_duration_ms);
    let book_classes = classes!("book", (stack.is_open() && !mobile).then_some("open"));
    let frame_classes = classes!(
        "book-frame",
        mobile.then_some("mobile"),
        props.config.reduced_motion.then_some("reduced-motion")
    );

    html! {
        <div
            class="magazine"
            onmousedown={on_mouse_down}
            onmouseup={on_mouse_up}
            onmouseleave={on_mouse_leave}
        >
            <div class="masthead">{ props.title.clone() }</div>
            <div class={frame_classes} style={frame_style}>
                <div class={book_classes}>
                    { for sheets(content).map(|sheet| {
                        let index = sheet.index;
                        html! {
                            <SheetView
                                key={index}
                                index={index}
                                front={sheet.front}
                                back={sheet.back}
                                flipped={stack.flip_state_of(index)}
                                z_index={stack.render_z_of(index)}
                                front_active={stack.is_face_active(index, Face::Front)}
                                back_active={stack.is_face_active(index, Face::Back)}
                                on_flip={on_flip.clone()}
                            />
                        }
                    }) }
                    <div class="book-base"></div>
                </div>
            </div>
            <div class="controls">
                <button
                    class="nav-button prev"
                    aria-label="Previous page"
                    disabled={!stack.can_retreat()}
                    onclick={on_prev}
                >
                    { "‹" }
                </button>
                <div class="page-indicator" aria-live="polite">
                    <span class="status">{ stack.status_label(content) }</span>
                    <span class="spread">{ stack.spread_label(content) }</span>
                    <span class="position">{ stack.position_label() }</span>
                </div>
                <button
                    class="nav-button next"
                    aria-label="Next page"
                    disabled={!stack.can_advance()}
                    onclick={on_next}
                >
                    { "›" }
                </button>
            </div>
            <div class="hint">{ "Swipe or Click to Flip" }</div>
        </div>
    }
}

fn install_document_listeners(
    dispatcher: UseReducerDispatcher<Navigation>,
    swipe: Rc<RefCell<SwipeState>>,
) -> Vec<EventListener> {
    let Some(window) = web_sys::window() else {
        gloo::console::warn!("no window; swipe and keyboard input disabled");
        return Vec::new();
    };
    let Some(document) = window.document() else {
        gloo::console::warn!("no document; swipe input disabled");
        return Vec::new();
    };
    let passive = EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: true,
    };
    let mut listeners = Vec::with_capacity(4);

    {
        let swipe = swipe.clone();
        listeners.push(EventListener::new_with_options(
            &document,
            "touchstart",
            passive,
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                if event.touches().length() > 1 {
                    swipe.borrow_mut().cancel();
                    return;
                }
                if let Some(x) = touch_start_x(event) {
                    swipe.borrow_mut().begin(PointerKind::Touch, x);
                }
            },
        ));
    }
    {
        let swipe = swipe.clone();
        let dispatcher = dispatcher.clone();
        listeners.push(EventListener::new_with_options(
            &document,
            "touchend",
            passive,
            move |event: &Event| {
                let Some(x) = event.dyn_ref::<TouchEvent>().and_then(touch_end_x) else {
                    return;
                };
                let intent = swipe.borrow_mut().finish(PointerKind::Touch, x);
                if let Some(intent) = intent {
                    dispatcher.dispatch(intent);
                }
            },
        ));
    }
    {
        let swipe = swipe.clone();
        listeners.push(EventListener::new_with_options(
            &document,
            "touchcancel",
            passive,
            move |_| swipe.borrow_mut().cancel(),
        ));
    }
    listeners.push(EventListener::new_with_options(
        &window,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(intent) = keyboard_intent(event) {
                event.prevent_default();
                dispatcher.dispatch(intent);
            }
        },
    ));
    gloo::console::log!("magazine input ready", listeners.len() as u32);
    listeners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_swipe_suppresses_the_following_click() {
        let mut swipe = SwipeState::new(50.0);
        swipe.begin(PointerKind::Mouse, 400.0);
        assert_eq!(
            swipe.finish(PointerKind::Mouse, 300.0),
            Some(NavIntent::Forward)
        );
        assert!(swipe.take_suppressed_click());
        assert!(!swipe.take_suppressed_click());
    }

    #[test]
    fn plain_click_is_not_suppressed() {
        let mut swipe = SwipeState::new(50.0);
        swipe.begin(PointerKind::Mouse, 400.0);
        assert_eq!(swipe.finish(PointerKind::Mouse, 402.0), None);
        assert!(!swipe.take_suppressed_click());
    }

    #[test]
    fn mouse_input_is_ignored_during_touch() {
        let mut swipe = SwipeState::new(50.0);
        swipe.begin(PointerKind::Touch, 300.0);
        swipe.begin(PointerKind::Mouse, 0.0);
        assert_eq!(swipe.finish(PointerKind::Mouse, 0.0), None);
        assert_eq!(
            swipe.finish(PointerKind::Touch, 380.0),
            Some(NavIntent::Backward)
        );
    }

    #[test]
    fn saturated_intent_keeps_the_same_state() {
        let nav = Rc::new(Navigation::for_content(aethereal_core::magazine()));
        let next = Rc::clone(&nav).reduce(NavIntent::Backward);
        assert!(Rc::ptr_eq(&nav, &next));
    }
}
