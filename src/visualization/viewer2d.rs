use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::configuration::config::RenderConfig;
use crate::simulation::engine::SimulationOutput;
use crate::simulation::trajectory::Trajectory;
use crate::visualization::playback::PlaybackTiming;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Finished run being replayed. Nothing here writes back into the physics
#[derive(Resource)]
struct Playback {
    trajectory: Trajectory,
    timing: PlaybackTiming,
    scale: f32, // pixels per simulation unit
    frame: usize, // index into the subsampled frames
    elapsed: f32, // seconds since the current frame was shown
}

impl Playback {
    fn sample_index(&self) -> usize {
        (self.frame * self.timing.stride).min(self.trajectory.len().saturating_sub(1))
    }
}

const BODY_RADIUS_PX: f32 = 8.0;

fn body_color(i: usize) -> Color {
    match i {
        0 => Color::srgb(0.0, 1.0, 1.0),
        1 => Color::srgb(1.0, 0.0, 1.0),
        _ => Color::srgb(1.0, 1.0, 0.0),
    }
}

pub fn run_2d(output: SimulationOutput, render: &RenderConfig) {
    let timing = PlaybackTiming::new(render.duration, output.trajectory.len(), render.max_frames);
    log::info!("viewer: replaying {} frames at {:.1} ms/frame", timing.frames, timing.frame_interval_ms);

    if timing.frames == 0 {
        log::warn!("viewer: nothing to replay");
        return;
    }

    let playback = Playback {
        trajectory: output.trajectory,
        timing,
        scale: 0.5 * render.size as f32 / render.extent as f32,
        frame: 0,
        elapsed: 0.0,
    };

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(playback)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (advance_playback_system, sync_transforms_system, draw_trails_system).chain())
        .run();
}

fn setup_bodies_system(mut commands: Commands, playback: Res<Playback>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let Some(first) = playback.trajectory.sample(0) else {
        return;
    };

    for (i, x) in first.iter().enumerate() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(BODY_RADIUS_PX))),
                material: materials.add(ColorMaterial::from(body_color(i))),
                transform: Transform::from_xyz(x.x as f32 * playback.scale, x.y as f32 * playback.scale, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn advance_playback_system(time: Res<Time>, mut playback: ResMut<Playback>) {
    let interval = (playback.timing.frame_interval_ms / 1000.0) as f32;
    playback.elapsed += time.delta_seconds();

    // Loop back to the start once the last frame has been shown
    while playback.elapsed >= interval && interval > 0.0 {
        playback.elapsed -= interval;
        playback.frame = (playback.frame + 1) % playback.timing.frames;
    }
}

fn sync_transforms_system(playback: Res<Playback>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let Some(sample) = playback.trajectory.sample(playback.sample_index()) else {
        return;
    };
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(x) = sample.get(*i) {
            transform.translation.x = (x.x as f32) * playback.scale;
            transform.translation.y = (x.y as f32) * playback.scale;
        }
    }
}

fn draw_trails_system(playback: Res<Playback>, mut gizmos: Gizmos) {
    let end = playback.sample_index();
    for (i, path) in playback.trajectory.bodies().iter().enumerate() {
        let points = path[..=end]
            .iter()
            .step_by(playback.timing.stride)
            .map(|x| Vec2::new(x.x as f32, x.y as f32) * playback.scale);
        gizmos.linestrip_2d(points, body_color(i).with_alpha(0.7));
    }
}
