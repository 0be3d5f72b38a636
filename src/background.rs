use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use aethereal_core::{OrbField, ViewerConfig, BACKDROP_FILL};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config::viewport_size;
use crate::error::ViewerError;

struct Backdrop {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: RefCell<OrbField>,
    frame: RefCell<Option<AnimationFrame>>,
    resize: RefCell<Option<EventListener>>,
    running: Cell<bool>,
    animate: bool,
}

/// Full-viewport canvas of drifting orbs. Dropping the handle cancels the
/// pending frame and the resize listener.
pub(crate) struct BackgroundEffect {
    inner: Rc<Backdrop>,
}

impl BackgroundEffect {
    pub(crate) fn start(
        canvas: HtmlCanvasElement,
        config: &ViewerConfig,
        seed: u64,
    ) -> Result<Self, ViewerError> {
        let window = web_sys::window().ok_or(ViewerError::NoWindow)?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(ViewerError::ContextUnavailable("2d"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ViewerError::ContextUnavailable("2d"))?;
        let (width, height) = viewport_size().unwrap_or((1.0, 1.0));
        let field = OrbField::spawn(width, height, config.orb_count, seed);
        let inner = Rc::new(Backdrop {
            canvas,
            ctx,
            field: RefCell::new(field),
            frame: RefCell::new(None),
            resize: RefCell::new(None),
            running: Cell::new(true),
            animate: !config.reduced_motion,
        });
        inner.fit_canvas();

        let resize_target = Rc::clone(&inner);
        let listener = EventListener::new(&window, "resize", move |_| {
            resize_target.handle_resize();
        });
        *inner.resize.borrow_mut() = Some(listener);

        inner.draw();
        if inner.animate {
            inner.schedule();
        }
        gloo::console::log!(
            "background",
            format!(
                "{} orbs, {}",
                config.orb_count,
                if inner.animate { "animated" } else { "still" }
            )
        );
        Ok(Self { inner })
    }

    pub(crate) fn stop(&self) {
        self.inner.stop();
    }
}

impl Drop for BackgroundEffect {
    fn drop(&mut self) {
        self.inner.stop();
    }
}

impl Backdrop {
    fn schedule(self: &Rc<Self>) {
        if !self.running.get() {
            return;
        }
        let inner = Rc::clone(self);
        let handle = request_animation_frame(move |_| inner.tick());
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        if !self.running.get() {
            return;
        }
        self.field.borrow_mut().step();
        self.draw();
        self.schedule();
    }

    fn stop(&self) {
        let was_running = self.running.replace(false);
        self.frame.borrow_mut().take();
        self.resize.borrow_mut().take();
        if was_running {
            gloo::console::log!("background stopped");
        }
    }

    fn handle_resize(&self) {
        if !self.running.get() {
            return;
        }
        if let Some((width, height)) = viewport_size() {
            self.field.borrow_mut().resize(width, height);
        }
        self.fit_canvas();
        if !self.animate {
            self.draw();
        }
    }

    fn fit_canvas(&self) {
        let field = self.field.borrow();
        self.canvas.set_width(field.width().round() as u32);
        self.canvas.set_height(field.height().round() as u32);
    }

    fn draw(&self) {
        let field = self.field.borrow();
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, field.width(), field.height());
        ctx.set_fill_style_str(BACKDROP_FILL);
        ctx.fill_rect(0.0, 0.0, field.width(), field.height());
        for orb in field.orbs() {
            let Ok(gradient) =
                ctx.create_radial_gradient(orb.x, orb.y, 0.0, orb.x, orb.y, orb.radius)
            else {
                continue;
            };
            if gradient
                .add_color_stop(0.0, &orb.tint.rgba(orb.alpha))
                .and_then(|_| gradient.add_color_stop(1.0, &orb.tint.rgba(0.0)))
                .is_err()
            {
                continue;
            }
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.begin_path();
            if ctx.arc(orb.x, orb.y, orb.radius, 0.0, TAU).is_ok() {
                ctx.fill();
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct BackgroundCanvasProps {
    pub config: ViewerConfig,
    pub seed: u64,
    pub on_error: Callback<ViewerError>,
}

#[function_component(BackgroundCanvas)]
pub(crate) fn background_canvas(props: &BackgroundCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    {
        let canvas_ref = canvas_ref.clone();
        let config = props.config.clone();
        let seed = props.seed;
        let on_error = props.on_error.clone();
        use_effect_with((), move |_| {
            let effect = match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => match BackgroundEffect::start(canvas, &config, seed) {
                    Ok(effect) => Some(effect),
                    Err(err) => {
                        on_error.emit(err);
                        None
                    }
                },
                None => {
                    on_error.emit(ViewerError::ContextUnavailable("canvas"));
                    None
                }
            };
            move || {
                if let Some(effect) = effect {
                    effect.stop();
                }
            }
        });
    }
    html! {
        <canvas ref={canvas_ref} class="bg-canvas" aria-hidden="true"></canvas>
    }
}
