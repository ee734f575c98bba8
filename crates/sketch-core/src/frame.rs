use glam::Vec3;

/// Timing handed to every component once per animation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    /// Seconds since the loop started.
    pub elapsed: f32,
    /// Position within the loop, in `[0, 1)`.
    pub playhead: f32,
    /// Seconds since the previous frame.
    pub delta_time: f32,
}

impl Frame {
    pub fn new(elapsed: f32, playhead: f32, delta_time: f32) -> Self {
        Self { elapsed, playhead, delta_time }
    }

    /// Derive the playhead of a loop lasting `duration` seconds.
    ///
    /// A non-positive duration pins the playhead at zero.
    pub fn looping(time: f32, duration: f32, delta_time: f32) -> Self {
        let playhead = if duration > 0.0 {
            (time.rem_euclid(duration) / duration).min(1.0 - f32::EPSILON)
        } else {
            0.0
        };
        Self { elapsed: time, playhead, delta_time }
    }
}

/// Something the host advances once per frame and then uploads.
pub trait Animated {
    fn update(&mut self, frame: &Frame);

    /// Current vertex or particle positions.
    fn positions(&self) -> &[Vec3];

    /// `positions` as interleaved `x, y, z` floats, ready for a vertex buffer.
    fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(self.positions())
    }
}
