use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_easings::Lerp;
use bevy_egui::EguiContexts;
use tianqiao_scene::GLOBE_RADIUS;

const ROTATE_SPEED: f32 = 0.005;
const ZOOM_STEP: f32 = 0.1;
const ZOOM_EASE: f32 = 8.0;
// just shy of ±90° so the view never flips over the poles
const PITCH_LIMIT: f32 = 1.54;

/// True while egui owns the pointer; orbit input and picking stand down.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EguiWantsFocus(pub bool);

/// Orbit state around the globe center. `radius` eases toward
/// `target_radius` so wheel zoom lands softly.
#[derive(Component)]
pub struct PanOrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
    pub target_radius: f32,
}

impl Default for PanOrbitCamera {
    fn default() -> Self {
        let radius = (GLOBE_RADIUS * 3.0) as f32;
        Self {
            yaw: 0.0,
            pitch: 0.0,
            radius,
            target_radius: radius,
        }
    }
}

pub struct CameraPlugin;

impl bevy::app::Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EguiWantsFocus>();
        app.add_systems(Startup, setup);
        app.add_systems(Update, (check_egui_wants_focus, pan_orbit_camera).chain());
    }
}

fn setup(mut commands: Commands) {
    let camera = PanOrbitCamera::default();
    commands.spawn((
        Camera3dBundle {
            transform: orbit_transform(&camera),
            ..default()
        },
        camera,
    ));
}

fn orbit_transform(camera: &PanOrbitCamera) -> Transform {
    let rotation = Quat::from_euler(EulerRot::YXZ, camera.yaw, camera.pitch, 0.0);
    Transform::from_translation(rotation * Vec3::new(0.0, 0.0, camera.radius))
        .looking_at(Vec3::ZERO, Vec3::Y)
}

fn check_egui_wants_focus(mut contexts: EguiContexts, mut wants_focus: ResMut<EguiWantsFocus>) {
    let ctx = contexts.ctx_mut();
    wants_focus.0 = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
}

fn pan_orbit_camera(
    time: Res<Time>,
    egui_focus: Res<EguiWantsFocus>,
    mouse_input: Res<Input<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    mut cameras: Query<(&mut PanOrbitCamera, &mut Transform)>,
) {
    let motion = mouse_motion.iter().map(|event| event.delta).sum::<Vec2>();
    let scroll = scroll_events
        .iter()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / 16.0,
        })
        .sum::<f32>();

    for (mut camera, mut transform) in &mut cameras {
        if !egui_focus.0 {
            if mouse_input.pressed(MouseButton::Left) {
                camera.yaw -= motion.x * ROTATE_SPEED;
                camera.pitch =
                    (camera.pitch - motion.y * ROTATE_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
            }
            if scroll.abs() > f32::EPSILON {
                let min = (GLOBE_RADIUS * 1.1) as f32;
                let max = (GLOBE_RADIUS * 8.0) as f32;
                camera.target_radius =
                    (camera.target_radius * (1.0 - scroll * ZOOM_STEP)).clamp(min, max);
            }
        }
        let t = (ZOOM_EASE * time.delta_seconds()).min(1.0);
        camera.radius = camera.radius.lerp(&camera.target_radius, &t);
        *transform = orbit_transform(&camera);
    }
}
