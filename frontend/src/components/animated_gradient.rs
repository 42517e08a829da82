use crate::animations::ambient::{
    AmbientField, BlobParticle, Intensity, Painter, Viewport, DEFAULT_COLORS,
};
use crate::error::SiteError;
use crate::utils::dom;
use crate::utils::frame_loop::FrameLoop;
use crate::utils::listener::WindowListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()
}

#[derive(Properties, PartialEq)]
pub struct AnimatedGradientProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub intensity: Intensity,
    #[prop_or_else(default_colors)]
    pub colors: Vec<String>,
}

struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl Painter for CanvasPainter {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn paint_blob(&mut self, blob: &BlobParticle, opacity: f64) -> Result<(), SiteError> {
        let gradient = self
            .ctx
            .create_radial_gradient(blob.x, blob.y, 0.0, blob.x, blob.y, blob.radius)?;
        gradient.add_color_stop(0.0, &blob.color)?;
        gradient.add_color_stop(1.0, "rgba(255,255,255,0)")?;
        self.ctx.set_global_alpha(opacity);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        self.ctx
            .arc(blob.x, blob.y, blob.radius, 0.0, std::f64::consts::TAU)?;
        self.ctx.fill();
        Ok(())
    }
}

/// Everything the running effect owns. Dropping it stops the animation.
struct Running {
    _frames: FrameLoop,
    _resize: WindowListener,
}

// Changing the canvas size resets its context state, so the filter goes back on.
fn fit_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, viewport: Viewport, filter: &str) {
    canvas.set_width(viewport.width.max(0.0) as u32);
    canvas.set_height(viewport.height.max(0.0) as u32);
    ctx.set_filter(filter);
}

fn start(canvas: HtmlCanvasElement, colors: &[String], intensity: Intensity) -> Result<Running, SiteError> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or(SiteError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SiteError::ContextUnavailable)?;

    let viewport = dom::viewport()?;
    let filter = intensity.preset().blur_filter();
    fit_canvas(&canvas, &ctx, viewport, &filter);

    let field = Rc::new(RefCell::new(AmbientField::new(
        colors,
        viewport,
        intensity,
        &mut rand::thread_rng(),
    )));

    let resize = {
        let field = field.clone();
        let canvas = canvas.clone();
        let ctx = ctx.clone();
        WindowListener::new("resize", move || match dom::viewport() {
            Ok(viewport) => {
                fit_canvas(&canvas, &ctx, viewport, &filter);
                field.borrow_mut().resize(viewport);
            }
            Err(e) => log::warn!("Ignoring resize: {}", e),
        })?
    };

    let frames = {
        let mut painter = CanvasPainter { ctx };
        let mut reported = false;
        FrameLoop::start(move |elapsed| {
            let mut field = field.borrow_mut();
            field.step(elapsed);
            if let Err(e) = field.render(&mut painter) {
                if !reported {
                    log::error!("Ambient gradient paint failed: {}", e);
                    reported = true;
                }
            }
        })?
    };

    Ok(Running {
        _frames: frames,
        _resize: resize,
    })
}

/// Soft drifting color field painted behind a section.
#[function_component(AnimatedGradient)]
pub fn animated_gradient(props: &AnimatedGradientProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(colors, intensity): &(Vec<String>, Intensity)| {
                let running = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(SiteError::NotMounted("canvas"))
                    .and_then(|canvas| start(canvas, colors, *intensity));
                let running = match running {
                    Ok(running) => Some(running),
                    Err(e) => {
                        log::warn!("Ambient gradient disabled: {}", e);
                        None
                    }
                };
                move || drop(running)
            },
            (props.colors.clone(), props.intensity),
        );
    }

    html! {
        <div class={classes!("ambient-gradient", props.class.clone())}>
            <canvas ref={canvas_ref} class="ambient-canvas"></canvas>
            <div class="ambient-overlay"></div>
        </div>
    }
}
