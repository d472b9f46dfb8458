//! Real-time pacing for replaying a finished trajectory.
//!
//! A run can hold tens of thousands of samples, far more than a GIF or a
//! viewer needs. The trajectory is subsampled with a fixed stride and the
//! requested playback duration is split evenly across the kept frames.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackTiming {
    pub stride: usize, // keep every `stride`-th sample
    pub frames: usize, // number of frames after subsampling
    pub frame_interval_ms: f64, // total duration / frames
}

impl PlaybackTiming {
    /// `max_frames == 0` means no subsampling
    pub fn new(total_duration_secs: f64, samples: usize, max_frames: usize) -> Self {
        if samples == 0 {
            return Self { stride: 1, frames: 0, frame_interval_ms: 0.0 };
        }

        let stride = if max_frames == 0 { 1 } else { samples.div_ceil(max_frames).max(1) };
        let frames = samples.div_ceil(stride);

        Self {
            stride,
            frames,
            frame_interval_ms: total_duration_secs * 1000.0 / frames as f64,
        }
    }

    /// Sample indices in playback order
    pub fn frame_indices(&self, samples: usize) -> impl Iterator<Item = usize> {
        (0..samples).step_by(self.stride).take(self.frames)
    }
}
