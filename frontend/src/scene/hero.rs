use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};
use yew::prelude::*;

use crate::motion::frame::FrameLoop;
use crate::motion::listener::Listener;
use crate::motion::scroll::element_progress;
use crate::scene::camera::Camera;
use crate::scene::geometry::{star_field, Mesh};
use crate::scene::state::{css_rgb, rgb_from_hex, Lighting, SceneState};

const MESH_COLOR: u32 = 0x2194ce;
const STAR_COLOR: &str = "#8888ff";
const STAR_COUNT: usize = 600;
const STAR_EXTENT: f32 = 30.0;
const STAR_SIZE: f64 = 0.03;
const MAX_PIXEL_RATIO: f64 = 2.0;

/// Everything the frame loop needs to draw one frame.
struct Scene {
    ctx: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
    camera: Camera,
    mesh: Mesh,
    edges: Vec<(usize, usize)>,
    stars: Vec<Vec3>,
    lighting: Lighting,
    state: SceneState,
    pixel_ratio: f64,
}

fn viewport(window: &Window) -> (f64, f64) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (read(window.inner_width()), read(window.inner_height()))
}

impl Scene {
    fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d, window: &Window) -> Self {
        let mut rng = StdRng::from_entropy();
        let mesh = Mesh::icosahedron(1.0, 1);
        let edges = mesh.edges();
        let mut scene = Self {
            ctx,
            canvas,
            camera: Camera::hero(1.0),
            mesh,
            edges,
            stars: star_field(STAR_COUNT, STAR_EXTENT, &mut rng),
            lighting: Lighting::hero(),
            state: SceneState::default(),
            pixel_ratio: window.device_pixel_ratio().min(MAX_PIXEL_RATIO),
        };
        scene.resize(window);
        scene
    }

    fn resize(&mut self, window: &Window) {
        let (width, height) = viewport(window);
        self.camera.set_viewport(width, height);
        self.canvas.set_width((width * self.pixel_ratio) as u32);
        self.canvas.set_height((height * self.pixel_ratio) as u32);
        let _ = self.canvas.style().set_property("width", &format!("{}px", width));
        let _ = self.canvas.style().set_property("height", &format!("{}px", height));
    }

    fn draw(&self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, width, height);

        let view_projection = self.camera.view_projection();

        // Stars first so the mesh sits in front.
        let star_transform = self.state.star_transform();
        ctx.set_fill_style_str(STAR_COLOR);
        for star in &self.stars {
            let world = star_transform.transform_point3(*star);
            if let Some(p) = self.camera.project(&view_projection, world, width, height) {
                let size = (STAR_SIZE * self.camera.pixels_per_unit(p.depth, height)).max(1.0);
                ctx.fill_rect(p.x - size / 2.0, p.y - size / 2.0, size, size);
            }
        }

        let mesh_transform = self.state.mesh_transform();
        let world: Vec<Vec3> = self
            .mesh
            .vertices
            .iter()
            .map(|v| mesh_transform.transform_point3(*v))
            .collect();
        let projected: Vec<_> = world
            .iter()
            .map(|v| self.camera.project(&view_projection, *v, width, height))
            .collect();

        let base = rgb_from_hex(MESH_COLOR);
        ctx.set_line_width(self.pixel_ratio);
        for &(a, b) in &self.edges {
            let (Some(pa), Some(pb)) = (projected[a], projected[b]) else { continue };
            // The mesh is a sphere about the origin, so the midpoint doubles as the normal.
            let mid = (world[a] + world[b]) * 0.5;
            let color = self.lighting.shade(base, mid, mid, self.camera.position);
            ctx.set_stroke_style_str(&css_rgb(color));
            ctx.begin_path();
            ctx.move_to(pa.x, pa.y);
            ctx.line_to(pb.x, pb.y);
            ctx.stroke();
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroSceneProps {
    /// Section whose scroll position drives the mesh rotation.
    #[prop_or_default]
    pub scrub_trigger: Option<AttrValue>,
}

#[function_component(HeroScene)]
pub fn hero_scene(props: &HeroSceneProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let scrub_trigger = props.scrub_trigger.clone();
        use_effect_with_deps(
            move |_| {
                let mut handles: (Option<FrameLoop>, Vec<Listener>) = (None, Vec::new());

                let setup = (|| {
                    let window = web_sys::window()?;
                    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
                    let ctx = canvas
                        .get_context("2d")
                        .ok()??
                        .dyn_into::<CanvasRenderingContext2d>()
                        .ok()?;
                    Some((window, canvas, ctx))
                })();

                if let Some((window, canvas, ctx)) = setup {
                    let scene = Rc::new(RefCell::new(Scene::new(canvas, ctx, &window)));

                    {
                        let scene = scene.clone();
                        let resized = window.clone();
                        handles.1.extend(Listener::new(&window, "resize", move |_| {
                            scene.borrow_mut().resize(&resized);
                        }));
                    }

                    let trigger = scrub_trigger
                        .as_deref()
                        .and_then(|id| window.document()?.get_element_by_id(id));
                    if let Some(trigger) = trigger {
                        scene.borrow_mut().state.bind_scrub();
                        let scene = scene.clone();
                        let scrolled = window.clone();
                        handles.1.extend(Listener::new(&window, "scroll", move |_| {
                            let progress = element_progress(&scrolled, &trigger);
                            scene.borrow_mut().state.scrub(progress);
                        }));
                    }

                    handles.0 = Some(FrameLoop::start(move |_| {
                        let mut scene = scene.borrow_mut();
                        // Stop once the canvas has been detached.
                        if !scene.canvas.is_connected() {
                            return false;
                        }
                        scene.state.advance_frame();
                        scene.draw();
                        true
                    }));
                } else {
                    log::debug!("hero canvas unavailable, scene disabled");
                }

                move || drop(handles)
            },
            (),
        );
    }

    html! {
        <canvas id="bgCanvas" class="hero-canvas" ref={canvas_ref} aria-hidden="true"></canvas>
    }
}
