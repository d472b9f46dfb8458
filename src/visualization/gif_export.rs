//! Animated GIF export of a finished run using plotters.
//!
//! Black background, a marker per body at the current sample and the full
//! trail behind it. Body colors follow body order: cyan, magenta, yellow.

use anyhow::Result;
use log::{info, warn};
use plotters::prelude::*;

use crate::configuration::config::RenderConfig;
use crate::simulation::engine::SimulationOutput;
use crate::simulation::states::NVec2;
use crate::visualization::playback::PlaybackTiming;

const BODY_COLORS: [RGBColor; 3] = [CYAN, MAGENTA, YELLOW];
const TRAIL_ALPHA: f64 = 0.7;
const TRAIL_WIDTH: u32 = 2;
const MARKER_RADIUS: i32 = 6;

// GIF stores delays in centiseconds
const MIN_FRAME_DELAY_MS: f64 = 10.0;

fn finite(p: &&NVec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Write `render.output` and return the number of frames in it
/// An empty trajectory writes no file
pub fn export_gif(output: &SimulationOutput, render: &RenderConfig) -> Result<usize> {
    let trajectory = &output.trajectory;
    let samples = trajectory.len();
    let timing = PlaybackTiming::new(render.duration, samples, render.max_frames);

    if timing.frames == 0 {
        warn!("trajectory is empty, skipping GIF export");
        return Ok(0);
    }

    let delay_ms = timing.frame_interval_ms.max(MIN_FRAME_DELAY_MS).round() as u32;
    let root = BitMapBackend::gif(&render.output, (render.size, render.size), delay_ms)?
        .into_drawing_area();
    let e = render.extent;

    for frame in timing.frame_indices(samples) {
        root.fill(&BLACK)?;
        let mut chart = ChartBuilder::on(&root).build_cartesian_2d(-e..e, -e..e)?;

        for (path, color) in trajectory.bodies().iter().zip(BODY_COLORS) {
            let head = path[frame];
            let trail = path[..frame]
                .iter()
                .step_by(timing.stride)
                .chain(std::iter::once(&head))
                .filter(finite)
                .map(|p| (p.x, p.y));
            chart.draw_series(LineSeries::new(
                trail,
                color.mix(TRAIL_ALPHA).stroke_width(TRAIL_WIDTH),
            ))?;

            if head.x.is_finite() && head.y.is_finite() {
                chart.draw_series(std::iter::once(Circle::new(
                    (head.x, head.y),
                    MARKER_RADIUS,
                    color.filled(),
                )))?;
            }
        }

        root.present()?;
    }

    info!(
        "wrote {} frames ({} ms each) to {}",
        timing.frames,
        delay_ms,
        render.output.display()
    );

    Ok(timing.frames)
}
