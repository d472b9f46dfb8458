use std::path::PathBuf;

use tbsim::{export_gif, Integrator, PlaybackTiming, RenderConfig, Scenario, ScenarioConfig, SimulationOutput};

/// Short equilateral run, capped at `steps`
fn short_run(steps: usize) -> SimulationOutput {
    let mut cfg = ScenarioConfig::equilateral_triangle();
    cfg.parameters.steps = steps;
    let mut integrator = Integrator::new(Scenario::build_scenario(&cfg).unwrap());
    integrator.run().unwrap();
    integrator.into_output().unwrap()
}

fn temp_gif(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("tbsim-tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let _ = std::fs::remove_file(&path);
    path
}

// ==================================================================================
// Playback timing
// ==================================================================================

#[test]
fn timing_splits_duration_over_samples() {
    let t = PlaybackTiming::new(10.0, 200, 0);

    assert_eq!(t.stride, 1);
    assert_eq!(t.frames, 200);
    assert!((t.frame_interval_ms - 50.0).abs() < 1e-12);
}

#[test]
fn timing_subsamples_long_runs() {
    let t = PlaybackTiming::new(10.0, 20_000, 300);

    assert_eq!(t.stride, 67);
    assert_eq!(t.frames, 299);
    assert!(t.frames <= 300);
    assert!((t.frame_interval_ms - 10_000.0 / 299.0).abs() < 1e-9);

    let indices: Vec<usize> = t.frame_indices(20_000).collect();
    assert_eq!(indices.len(), t.frames);
    assert_eq!(indices[0], 0);
    assert_eq!(indices[1], 67);
    assert!(*indices.last().unwrap() < 20_000);
}

#[test]
fn timing_with_fewer_samples_than_frames() {
    let t = PlaybackTiming::new(2.0, 7, 300);

    assert_eq!(t.stride, 1);
    assert_eq!(t.frames, 7);
}

#[test]
fn timing_for_empty_run_has_no_frames() {
    let t = PlaybackTiming::new(10.0, 0, 300);

    assert_eq!(t.frames, 0);
    assert_eq!(t.frame_indices(0).count(), 0);
}

// ==================================================================================
// GIF export
// ==================================================================================

#[test]
fn exports_animated_gif() {
    let output = short_run(20);
    let render = RenderConfig {
        output: temp_gif("short.gif"),
        size: 64,
        max_frames: 5,
        ..RenderConfig::default()
    };

    let frames = export_gif(&output, &render).unwrap();

    assert_eq!(frames, 5);
    let bytes = std::fs::read(&render.output).unwrap();
    assert!(bytes.starts_with(b"GIF8"), "not a GIF header");
}

#[test]
fn empty_run_writes_nothing() {
    let mut cfg = ScenarioConfig::equilateral_triangle();
    cfg.parameters.bound = 0.5;
    for (b, x) in cfg.bodies.iter_mut().zip([[1.0, 1.0], [-1.0, 1.0], [1.0, -1.0]]) {
        b.x = x;
    }
    let mut integrator = Integrator::new(Scenario::build_scenario(&cfg).unwrap());
    integrator.run().unwrap();
    let output = integrator.into_output().unwrap();
    assert!(output.trajectory.is_empty());

    let render = RenderConfig { output: temp_gif("empty.gif"), ..RenderConfig::default() };

    assert_eq!(export_gif(&output, &render).unwrap(), 0);
    assert!(!render.output.exists());
}
