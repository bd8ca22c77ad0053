use morph_core::config::{CaptureConfig, MorphConfig, ViewConfig};
use morph_core::gesture::{GestureEvent, HandLandmarks, HAND_CONNECTIONS};
use morph_core::simulation::Simulation;
use wasm_bindgen::prelude::*;

/// GPU-compatible vertex: 24 bytes, position then boosted color.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuVertex {
    position: [f32; 3], // 12 bytes
    color: [f32; 3],    // 12 bytes
}

const DIRTY_POSITION: u8 = 1;
const DIRTY_COLOR: u8 = 2;

fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct MorphWorld {
    sim: Simulation,
    view: ViewConfig,
    capture: CaptureConfig,
    aspect: f32,
    gpu_buffer: Vec<GpuVertex>,
}

#[wasm_bindgen]
impl MorphWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(particle_count: usize, seed: u32) -> MorphWorld {
        let config = MorphConfig {
            particle_count,
            ..MorphConfig::default()
        };
        let sim = Simulation::new(config, seed as u64);
        log(&format!(
            "WASM MorphWorld created: {} particles, shape {}, palette {}",
            particle_count,
            sim.shape().display_name(),
            sim.palette_kind(),
        ));

        let gpu_buffer = vec![GpuVertex { position: [0.0; 3], color: [0.0; 3] }; particle_count];
        let mut world = MorphWorld {
            sim,
            view: ViewConfig::default(),
            capture: CaptureConfig::default(),
            aspect: 1.0,
            gpu_buffer,
        };
        world.write_gpu_output();
        world
    }

    /// Advance one frame. `time` is wall-clock seconds. Returns the time
    /// spent in milliseconds.
    #[wasm_bindgen]
    pub fn step(&mut self, time: f64) -> f32 {
        let start = js_sys::Date::now();
        self.sim.step(time);
        self.write_gpu_output();
        let elapsed = js_sys::Date::now() - start;
        elapsed as f32
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_ptr(&self) -> *const f32 {
        self.gpu_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_byte_length(&self) -> usize {
        self.gpu_buffer.len() * std::mem::size_of::<GpuVertex>()
    }

    #[wasm_bindgen]
    pub fn vertex_stride_bytes(&self) -> usize {
        std::mem::size_of::<GpuVertex>()
    }

    /// Bitmask of buffers needing re-upload (1 = position, 2 = color),
    /// cleared by this call.
    #[wasm_bindgen]
    pub fn take_dirty(&mut self) -> u8 {
        let dirty = self.sim.take_dirty();
        let mut bits = 0;
        if dirty.position {
            bits |= DIRTY_POSITION;
        }
        if dirty.color {
            bits |= DIRTY_COLOR;
        }
        bits
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.sim.particles.count
    }

    /// Feed the first detected hand as `21 * 3` floats (x, y, z per
    /// landmark). Returns true when a pinch switched the shape.
    #[wasm_bindgen]
    pub fn update_hand(&mut self, landmarks: &[f32]) -> Result<bool, JsValue> {
        let hand = HandLandmarks::from_flat(landmarks)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let was_tracking = self.sim.gesture().hand_detected;
        let event = self.sim.handle_detection(Some(&hand));
        if !was_tracking {
            log("Hand acquired");
        }
        match event {
            Some(GestureEvent::AdvanceShape) => {
                self.log_shape();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Detector reported no hand this frame.
    #[wasm_bindgen]
    pub fn clear_hand(&mut self) {
        if self.sim.gesture().hand_detected {
            log("Hand lost");
        }
        self.sim.handle_detection(None);
    }

    #[wasm_bindgen]
    pub fn hand_detected(&self) -> bool {
        self.sim.gesture().hand_detected
    }

    #[wasm_bindgen]
    pub fn is_pinching(&self) -> bool {
        self.sim.gesture().is_pinching
    }

    #[wasm_bindgen]
    pub fn expansion(&self) -> f32 {
        self.sim.expansion()
    }

    #[wasm_bindgen]
    pub fn advance_shape(&mut self) -> String {
        self.sim.advance_shape();
        self.log_shape();
        self.shape_name()
    }

    #[wasm_bindgen]
    pub fn shape_name(&self) -> String {
        self.sim.shape().display_name().to_string()
    }

    #[wasm_bindgen]
    pub fn shape_index(&self) -> usize {
        self.sim.shape_index()
    }

    /// Switch palette by selector value. Unknown names throw.
    #[wasm_bindgen]
    pub fn set_palette(&mut self, name: &str) -> Result<(), JsValue> {
        let kind = self
            .sim
            .set_palette_by_name(name)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log(&format!("Palette: {} ({})", kind, self.sim.palette().accent));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn palette_name(&self) -> String {
        self.sim.palette_kind().name().to_string()
    }

    /// Accent color (`#rrggbb`) for UI chrome and the hand overlay.
    #[wasm_bindgen]
    pub fn palette_accent(&self) -> String {
        self.sim.palette().accent.to_string()
    }

    /// Point-cloud model matrix, column-major.
    #[wasm_bindgen]
    pub fn model_matrix(&self) -> Vec<f32> {
        self.sim.rotation().matrix().to_cols_array().to_vec()
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Camera view-projection for the last `resize`, column-major.
    #[wasm_bindgen]
    pub fn view_projection(&self) -> Vec<f32> {
        self.view.view_projection(self.aspect).to_cols_array().to_vec()
    }

    #[wasm_bindgen]
    pub fn particle_size(&self) -> f32 {
        self.sim.config.particle_size
    }

    #[wasm_bindgen]
    pub fn fog_density(&self) -> f32 {
        self.view.fog_density
    }

    #[wasm_bindgen]
    pub fn video_width(&self) -> u32 {
        self.capture.width
    }

    #[wasm_bindgen]
    pub fn video_height(&self) -> u32 {
        self.capture.height
    }

    /// `[max_hands, model_complexity, min_detection_confidence,
    /// min_tracking_confidence]` for the detector's options.
    #[wasm_bindgen]
    pub fn detector_options(&self) -> Vec<f32> {
        vec![
            self.capture.max_hands as f32,
            self.capture.model_complexity as f32,
            self.capture.min_detection_confidence,
            self.capture.min_tracking_confidence,
        ]
    }

    /// Overlay skeleton as flat `[from, to, from, to, ...]` landmark indices.
    #[wasm_bindgen]
    pub fn hand_connections(&self) -> Vec<u32> {
        HAND_CONNECTIONS
            .iter()
            .flat_map(|&(a, b)| [a as u32, b as u32])
            .collect()
    }

    #[wasm_bindgen]
    pub fn reinitialize(&mut self, seed: u32) {
        self.sim.reinitialize(seed as u64);
        self.write_gpu_output();
    }
}

impl MorphWorld {
    fn log_shape(&self) {
        log(&format!(
            "Shape {}: {}",
            self.sim.shape_index(),
            self.sim.shape().display_name()
        ));
    }

    fn write_gpu_output(&mut self) {
        let particles = &self.sim.particles;
        for (i, vertex) in self.gpu_buffer.iter_mut().enumerate() {
            let pos = particles.position[i];
            let col = particles.color[i];
            *vertex = GpuVertex {
                position: [pos.x, pos.y, pos.z],
                color: [col.x, col.y, col.z],
            };
        }
    }
}
