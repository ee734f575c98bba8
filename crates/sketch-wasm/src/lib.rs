use rand::rngs::StdRng;
use sketch_core::config::{AttractorConfig, MorphConfig, PyramidConfig, RidgeConfig, TileConfig};
use sketch_core::tiles::{self, FoldSet};
use sketch_core::{Animated, Attractor, DivergencePolicy, Frame, MeshGeometry, MorphSequence, RngSource, SketchError, VectorField};
use wasm_bindgen::prelude::*;

/// Point sprite: 16 bytes, matches a WGSL `vec4<f32>` slot
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuPoint {
    position: [f32; 3], // 12 bytes
    _pad: f32,          //  4 bytes
}

/// Mesh vertex with its flat normal: 24 bytes
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuVertex {
    position: [f32; 3], // 12 bytes
    normal: [f32; 3],   // 12 bytes
}

fn js_error(err: SketchError) -> JsError {
    JsError::new(&err.to_string())
}

fn rng_for(seed: Option<u32>) -> RngSource<StdRng> {
    match seed {
        Some(seed) => RngSource::seeded(u64::from(seed)),
        None => RngSource::from_entropy(),
    }
}

fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

fn write_mesh(mesh: &MeshGeometry, out: &mut Vec<GpuVertex>) {
    out.clear();
    out.extend(
        mesh.positions()
            .iter()
            .zip(mesh.flat_normals())
            .map(|(p, n)| GpuVertex { position: p.to_array(), normal: n.to_array() }),
    );
}

fn mesh_byte_length(buffer: &[GpuVertex]) -> usize {
    std::mem::size_of_val(buffer)
}

// ---------------------------------------------------------------------------
// Attractors
// ---------------------------------------------------------------------------

/// One or more attractor clouds packed back to back in a single buffer.
#[wasm_bindgen]
pub struct AttractorWorld {
    attractors: Vec<Attractor>,
    rng: RngSource<StdRng>,
    gpu_buffer: Vec<GpuPoint>,
    last_step_ms: f32,
}

#[wasm_bindgen]
impl AttractorWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(field: &str, particle_count: usize, seed: Option<u32>) -> Result<AttractorWorld, JsError> {
        console_error_panic_hook::set_once();
        let mut world = AttractorWorld {
            attractors: Vec::new(),
            rng: rng_for(seed),
            gpu_buffer: Vec::new(),
            last_step_ms: 0.0,
        };
        world.add_attractor(field, particle_count)?;
        Ok(world)
    }

    /// Add another cloud with its field's usual timestep.
    #[wasm_bindgen]
    pub fn add_attractor(&mut self, field: &str, particle_count: usize) -> Result<(), JsError> {
        let field: VectorField = field.parse().map_err(js_error)?;
        let config = AttractorConfig { particle_count, ..AttractorConfig::for_field(field) };
        let attractor = Attractor::new(&config, &mut self.rng).map_err(js_error)?;
        log(&format!("WASM attractor added: {} with {} particles", field, particle_count));
        self.attractors.push(attractor);
        self.write_gpu_output();
        Ok(())
    }

    /// Advance every cloud one step and return the buffer pointer.
    #[wasm_bindgen]
    pub fn step(&mut self, time: f32, duration: f32, dt: f32) -> *const f32 {
        let start = js_sys::Date::now();
        let frame = Frame::looping(time, duration, dt);
        for attractor in &mut self.attractors {
            attractor.update(&frame);
        }
        self.write_gpu_output();
        self.last_step_ms = (js_sys::Date::now() - start) as f32;
        self.get_gpu_buffer_ptr()
    }

    #[wasm_bindgen]
    pub fn last_step_ms(&self) -> f32 {
        self.last_step_ms
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_ptr(&self) -> *const f32 {
        self.gpu_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_byte_length(&self) -> usize {
        self.gpu_buffer.len() * std::mem::size_of::<GpuPoint>()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.attractors.iter().map(|a| a.particles.count).sum()
    }

    #[wasm_bindgen]
    pub fn set_scale(&mut self, scale: f32) -> Result<(), JsError> {
        for attractor in &mut self.attractors {
            attractor.set_scale(scale).map_err(js_error)?;
        }
        Ok(())
    }

    /// Keep diverging particles in place instead of letting them fly off.
    #[wasm_bindgen]
    pub fn set_hold_divergent(&mut self, hold: bool) {
        let policy = if hold { DivergencePolicy::Hold } else { DivergencePolicy::Propagate };
        for attractor in &mut self.attractors {
            attractor.divergence = policy;
        }
    }

    #[wasm_bindgen]
    pub fn reinitialize(&mut self, seed: u32) {
        self.rng = RngSource::seeded(u64::from(seed));
        for attractor in &mut self.attractors {
            attractor.reinitialize(&mut self.rng);
        }
        self.write_gpu_output();
    }
}

impl AttractorWorld {
    fn write_gpu_output(&mut self) {
        self.gpu_buffer.clear();
        for attractor in &self.attractors {
            self.gpu_buffer.extend(
                attractor
                    .positions()
                    .iter()
                    .map(|p| GpuPoint { position: p.to_array(), _pad: 0.0 }),
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Morphing sculptures
// ---------------------------------------------------------------------------

/// A morph sequence over randomly built sculptures.
#[wasm_bindgen]
pub struct FoldSculpture {
    sequence: MorphSequence,
    gpu_buffer: Vec<GpuVertex>,
}

#[wasm_bindgen]
impl FoldSculpture {
    /// Folded-paper grid; `folds` is `per-face`, `any`, `layouts` or a
    /// single fold name.
    #[wasm_bindgen(constructor)]
    pub fn new(
        folds: &str,
        cols: usize,
        rows: usize,
        targets: usize,
        seed: Option<u32>,
    ) -> Result<FoldSculpture, JsError> {
        console_error_panic_hook::set_once();
        let folds: FoldSet = folds.parse().map_err(js_error)?;
        let config = TileConfig { cols, rows, folds, ..TileConfig::default() };
        let mut rng = rng_for(seed);
        let sequence = MorphSequence::generate(&MorphConfig::with_targets(targets), |_| {
            tiles::fold_sculpture(&config, &mut rng)
        })
        .map_err(js_error)?;
        log(&format!(
            "WASM FoldSculpture created: {}x{} cells, {} targets",
            cols, rows, targets
        ));
        Ok(Self::from_sequence(sequence))
    }

    /// Grid of diagonal ridge tiles instead of folds. `rate` defaults to
    /// the ridge loop's fixed rate.
    #[wasm_bindgen]
    pub fn ridges(
        segments: usize,
        targets: usize,
        rate: Option<f32>,
        seed: Option<u32>,
    ) -> Result<FoldSculpture, JsError> {
        console_error_panic_hook::set_once();
        let config = RidgeConfig { segments, ..RidgeConfig::default() };
        let mut morph = MorphConfig::for_ridges(targets);
        if let Some(rate) = rate {
            morph.rate = rate;
        }
        let mut rng = rng_for(seed);
        let sequence = MorphSequence::generate(&morph, |_| {
            tiles::ridge_sculpture(&config, &mut rng)
        })
        .map_err(js_error)?;
        log(&format!("WASM ridge sculpture created: {} segments, {} targets", segments, targets));
        Ok(Self::from_sequence(sequence))
    }

    /// Ease toward this frame's target and return the buffer pointer.
    #[wasm_bindgen]
    pub fn render(&mut self, time: f32, duration: f32, dt: f32) -> *const f32 {
        let frame = Frame::looping(time, duration, dt);
        self.sequence.update(&frame);
        write_mesh(self.sequence.current(), &mut self.gpu_buffer);
        self.get_gpu_buffer_ptr()
    }

    #[wasm_bindgen]
    pub fn rewind(&mut self) {
        self.sequence.rewind();
        write_mesh(self.sequence.current(), &mut self.gpu_buffer);
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_ptr(&self) -> *const f32 {
        self.gpu_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_byte_length(&self) -> usize {
        mesh_byte_length(&self.gpu_buffer)
    }

    #[wasm_bindgen]
    pub fn vertex_count(&self) -> usize {
        self.sequence.current().vertex_count()
    }
}

impl FoldSculpture {
    fn from_sequence(sequence: MorphSequence) -> Self {
        let mut gpu_buffer = Vec::with_capacity(sequence.current().vertex_count());
        write_mesh(sequence.current(), &mut gpu_buffer);
        Self { sequence, gpu_buffer }
    }
}

// ---------------------------------------------------------------------------
// Pyramids
// ---------------------------------------------------------------------------

#[wasm_bindgen]
pub struct PyramidField {
    field: tiles::PyramidField,
    gpu_buffer: Vec<GpuVertex>,
}

#[wasm_bindgen]
impl PyramidField {
    #[wasm_bindgen(constructor)]
    pub fn new(span: f32, min_count: usize, max_count: usize) -> Result<PyramidField, JsError> {
        console_error_panic_hook::set_once();
        let config = PyramidConfig { span, min_count, max_count, ..PyramidConfig::default() };
        let field = tiles::PyramidField::new(&config).map_err(js_error)?;
        log(&format!("WASM PyramidField created: {} pyramids", field.len()));
        let mut gpu_buffer = Vec::new();
        write_mesh(field.mesh(), &mut gpu_buffer);
        Ok(PyramidField { field, gpu_buffer })
    }

    /// Centre the convergence point wanders around, in field coordinates.
    #[wasm_bindgen]
    pub fn set_convergence(&mut self, x: f32, y: f32, z: f32) {
        self.field.set_origin(glam::Vec3::new(x, y, z));
    }

    #[wasm_bindgen]
    pub fn render(&mut self, time: f32, duration: f32, dt: f32) -> *const f32 {
        let frame = Frame::looping(time, duration, dt);
        self.field.update(&frame);
        write_mesh(self.field.mesh(), &mut self.gpu_buffer);
        self.get_gpu_buffer_ptr()
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_ptr(&self) -> *const f32 {
        self.gpu_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn get_gpu_buffer_byte_length(&self) -> usize {
        mesh_byte_length(&self.gpu_buffer)
    }

    #[wasm_bindgen]
    pub fn pyramid_count(&self) -> usize {
        self.field.len()
    }
}
