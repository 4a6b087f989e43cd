#![deny(unsafe_code)]
//! WASM bindings for the gles-shapes rendering core.
//!
//! Exposes the host's two entry points over a WebGL2 canvas:
//!
//! ```text
//! const renderer = new ShapeRenderer(canvas, null);
//! if (!renderer.init(canvas.width, canvas.height)) { /* surface unusable */ }
//! requestAnimationFrame(function frame() { renderer.step(); requestAnimationFrame(frame); });
//! ```

#[cfg(target_arch = "wasm32")]
mod bindings {
    use gles_shapes_core::{GpuContext, RenderContext, Scene, SceneConfig};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

    /// Owns the GL context and the scene for one canvas.
    #[wasm_bindgen]
    pub struct ShapeRenderer {
        ctx: RenderContext<GpuContext>,
    }

    #[wasm_bindgen]
    impl ShapeRenderer {
        /// Acquires a WebGL2 context from `canvas`.
        ///
        /// `scene_json` overrides the built-in scene; see `SceneConfig` for the format.
        #[wasm_bindgen(constructor)]
        pub fn new(
            canvas: HtmlCanvasElement,
            scene_json: Option<String>,
        ) -> Result<ShapeRenderer, JsValue> {
            let scene = match scene_json {
                Some(text) => SceneConfig::from_json(&text)
                    .and_then(|config| config.build())
                    .map_err(|e| JsValue::from_str(&e.to_string()))?,
                None => Scene::default(),
            };

            let webgl = canvas
                .get_context("webgl2")?
                .ok_or_else(|| JsValue::from_str("webgl2 is not available"))?
                .dyn_into::<WebGl2RenderingContext>()?;
            let gl = glow::Context::from_webgl2_context(webgl);
            let gpu = GpuContext::new(gl).map_err(|e| JsValue::from_str(&e))?;

            Ok(ShapeRenderer {
                ctx: RenderContext::new(gpu, scene),
            })
        }

        /// Builds the program for a `width` x `height` surface. Returns `false` on failure.
        pub fn init(&mut self, width: i32, height: i32) -> bool {
            self.ctx.init(width, height)
        }

        /// Renders one frame.
        pub fn step(&self) {
            self.ctx.step();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use bindings::ShapeRenderer;
