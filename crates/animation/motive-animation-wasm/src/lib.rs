use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use motive_animation_core::{
    catalog_by_category, AnimationId, Animator, BakingConfig, Command, Config, ModelInfo,
    RestPose, Transform,
};

#[wasm_bindgen]
pub struct MotiveAnimation {
    core: Animator,
    on_event: Option<Function>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Plain objects instead of ES `Map`s so the JS side can index by key.
fn to_js<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<JsValue, JsError> {
    value
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

#[wasm_bindgen]
impl MotiveAnimation {
    /// Create a new animator. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new MotiveAnimation({ default_speed: 1.5, extra_aliases: { zoom: "spin" } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<MotiveAnimation, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        cfg.validate()
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;

        Ok(MotiveAnimation {
            core: Animator::new(cfg),
            on_event: None,
        })
    }

    /// Attach a model by its rest transform
    /// `{ position: {x,y,z}, rotation: {x,y,z}, scale: {x,y,z} }` (rotation in radians, XYZ order).
    /// Passing undefined/null detaches.
    #[wasm_bindgen(js_name = set_model)]
    pub fn set_model(&mut self, rest: JsValue) -> Result<(), JsError> {
        if jsvalue_is_undefined_or_null(&rest) {
            self.core.set_model(None);
            return Ok(());
        }
        let tf: Transform =
            swb::from_value(rest).map_err(|e| JsError::new(&format!("rest pose error: {e}")))?;
        if !tf.is_finite() {
            return Err(JsError::new("rest pose error: non-finite component"));
        }
        self.core.set_model(Some(RestPose::capture(&tf)));
        Ok(())
    }

    #[wasm_bindgen(js_name = clear_model)]
    pub fn clear_model(&mut self) {
        self.core.set_model(None);
    }

    /// Resolve a free-text prompt and start it. Returns false when nothing matched.
    #[wasm_bindgen(js_name = set_animation)]
    pub fn set_animation(&mut self, prompt: &str) -> bool {
        self.core.set_animation(prompt)
    }

    /// Start an animation by canonical name.
    #[wasm_bindgen(js_name = set_animation_id)]
    pub fn set_animation_id(&mut self, name: &str) -> Result<(), JsError> {
        let id: AnimationId = name.parse().map_err(|e| JsError::new(&format!("{e}")))?;
        self.core.set_animation_id(id);
        Ok(())
    }

    #[wasm_bindgen(js_name = set_speed)]
    pub fn set_speed(&mut self, speed: f32) -> Result<(), JsError> {
        self.core
            .set_speed(speed)
            .map_err(|e| JsError::new(&format!("{e}")))
    }

    #[wasm_bindgen]
    pub fn play(&mut self) {
        self.core.play();
    }

    #[wasm_bindgen]
    pub fn pause(&mut self) {
        self.core.pause();
    }

    #[wasm_bindgen]
    pub fn stop(&mut self) {
        self.core.stop();
    }

    /// Apply a list of tagged commands, e.g. `[{ cmd: "set_speed", speed: 2 }, { cmd: "pause" }]`.
    #[wasm_bindgen]
    pub fn apply(&mut self, commands: JsValue) -> Result<(), JsError> {
        if jsvalue_is_undefined_or_null(&commands) {
            return Ok(());
        }
        let cmds: Vec<Command> = swb::from_value(commands)
            .map_err(|e| JsError::new(&format!("commands error: {e}")))?;
        for cmd in cmds {
            self.core
                .apply(cmd)
                .map_err(|e| JsError::new(&format!("{e}")))?;
        }
        Ok(())
    }

    /// Register a callback invoked once per core event during `update`; null removes it.
    #[wasm_bindgen(js_name = set_event_listener)]
    pub fn set_event_listener(&mut self, listener: Option<Function>) {
        self.on_event = listener;
    }

    /// Step by dt (seconds of wall time). Returns Outputs JSON.
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f32) -> Result<JsValue, JsError> {
        let out = self.core.update(dt);
        if let Some(f) = &self.on_event {
            for event in &out.events {
                let arg = to_js(event, "event")?;
                f.call1(&JsValue::UNDEFINED, &arg)
                    .map_err(|e| JsError::new(&format!("event listener threw: {e:?}")))?;
            }
        }
        to_js(out, "outputs")
    }

    /// Canonical name the prompt resolves to, without starting it.
    #[wasm_bindgen]
    pub fn resolve(&self, prompt: &str) -> Option<String> {
        self.core.resolve(prompt).map(|id| id.name().to_string())
    }

    /// Current status: "stopped" | "playing" | "paused".
    #[wasm_bindgen]
    pub fn status(&self) -> String {
        self.core.status().name().to_string()
    }

    /// Active animation's canonical name, if any.
    #[wasm_bindgen(js_name = current_animation)]
    pub fn current_animation(&self) -> Option<String> {
        self.core.current_animation().map(|id| id.name().to_string())
    }

    /// Catalog grouped by category: `{ motion: [...], effects: [...], special: [...] }`.
    #[wasm_bindgen(js_name = list_animations)]
    pub fn list_animations(&self) -> Result<JsValue, JsError> {
        to_js(&catalog_by_category(), "catalog")
    }

    /// Bake the active animation at the current speed. Returns null without an
    /// active animation or model; throws when the clip exceeds the frame limit.
    #[wasm_bindgen]
    pub fn bake(&self, cfg: JsValue) -> Result<JsValue, JsError> {
        let cfg: BakingConfig = if jsvalue_is_undefined_or_null(&cfg) {
            BakingConfig::default()
        } else {
            swb::from_value(cfg).map_err(|e| JsError::new(&format!("baking cfg error: {e}")))?
        };
        match self
            .core
            .bake_current(&cfg)
            .map_err(|e| JsError::new(&format!("bake error: {e}")))?
        {
            Some(clip) => to_js(&clip, "baked clip"),
            None => Ok(JsValue::NULL),
        }
    }
}

/// Validate a model file name and describe it for display.
#[wasm_bindgen(js_name = model_info)]
pub fn model_info(filename: &str, size_bytes: f64) -> Result<JsValue, JsError> {
    let size = if size_bytes.is_finite() && size_bytes > 0.0 {
        size_bytes as u64
    } else {
        0
    };
    let info = ModelInfo::new(filename, size).map_err(|e| JsError::new(&format!("{e}")))?;
    to_js(&info, "model info")
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
