use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;

use crate::simulation::integrator::rk4_step;
use crate::simulation::scenario::Scenario;
use crate::visualization::trails::TrailSet;

#[derive(Component)]
struct BodyIndex(pub usize);

/// World-space -> screen-space scaling factor for positions
const SCALE: f32 = 2.0;

/// Background tone of the viewer window
const BACKGROUND: Color = Color::srgb(0.043, 0.071, 0.125);

/// Per-body colors, cycled for ensembles larger than three:
/// blue / amber / green for bodies A / B / C
const BODY_COLORS: [Color; 3] = [
    Color::srgb(0.145, 0.388, 0.922),
    Color::srgb(0.961, 0.620, 0.043),
    Color::srgb(0.063, 0.725, 0.506),
];

/// Start the Bevy 2D viewer and drive the simulation.
///
/// Keys: Space toggles play/pause, S advances one step while paused,
/// R resets to the initial ensemble.
pub fn run_2d(scenario: Scenario) {
    log::info!(
        "run_2d: starting Bevy 2D viewer with {} bodies",
        scenario.system.bodies.len()
    );

    // Trails are maintained here in the driver, outside the numerical
    // core; seed each with its body's starting position
    let mut trails = TrailSet::new(scenario.system.bodies.len(), scenario.engine.trail_length);
    trails.record(&scenario.system);

    App::new()
        .insert_resource(scenario)
        .insert_resource(trails)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                control_system,
                physics_step_system,
                sync_transforms_system,
                draw_trails_system,
            )
                .chain(),
        )
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera on a dark background
    commands.spawn(Camera2dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(BACKGROUND),
            ..Default::default()
        },
        ..Default::default()
    });

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        // Radius tracks mass, with a minimum so light bodies stay visible
        let radius_screen = (body.m.sqrt() as f32).max(3.0);
        let color = BODY_COLORS[i % BODY_COLORS.len()];

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(color)),
                transform: Transform::from_xyz(
                    body.x.x as f32 * SCALE,
                    body.x.y as f32 * SCALE,
                    0.0,
                ),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Keyboard controls: Space = play/pause, S = single step while paused,
/// R = reset to the initial ensemble and clear trails
fn control_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut scenario: ResMut<Scenario>,
    mut trails: ResMut<TrailSet>,
) {
    if keys.just_pressed(KeyCode::Space) {
        scenario.engine.playing = !scenario.engine.playing;
    }

    if keys.just_pressed(KeyCode::KeyS) && !scenario.engine.playing {
        // One step at the base dt, no speed scaling
        let Scenario {
            system,
            parameters,
            forces,
            ..
        } = &mut *scenario;
        *system = rk4_step(system, forces, parameters);
        trails.record(system);
    }

    if keys.just_pressed(KeyCode::KeyR) {
        scenario.reset();
        trails.clear();
        trails.record(&scenario.system);
    }
}

/// Per-frame physics: advance the system by `dt * speed`, split into
/// sub-steps so the per-step size stays bounded at high speeds, and
/// append each new position to the trails
fn physics_step_system(mut scenario: ResMut<Scenario>, mut trails: ResMut<TrailSet>) {
    if !scenario.engine.playing {
        return;
    }

    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        engine,
        system,
        parameters,
        forces,
        ..
    } = &mut *scenario;

    let sub_steps = engine.sub_steps();
    let mut step_params = parameters.clone();
    step_params.dt = parameters.dt * engine.speed / sub_steps as f64;

    for _ in 0..sub_steps {
        *system = rk4_step(system, forces, &step_params);
        trails.record(system);
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            transform.translation.x = (b.x.x as f32) * SCALE;
            transform.translation.y = (b.x.y as f32) * SCALE;
        }
    }
}

/// Draw each trail as a polyline in its body's color
fn draw_trails_system(trails: Res<TrailSet>, mut gizmos: Gizmos) {
    for (i, trail) in trails.iter().enumerate() {
        if trail.len() < 2 {
            continue;
        }
        let color = BODY_COLORS[i % BODY_COLORS.len()].with_alpha(0.8);
        gizmos.linestrip_2d(
            trail.iter().map(|p| Vec2::new(p.x as f32 * SCALE, p.y as f32 * SCALE)),
            color,
        );
    }
}
