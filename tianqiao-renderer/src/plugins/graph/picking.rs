use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use tianqiao_scene::intersect::{ray_sphere, Ray as PickRay};
use tianqiao_scene::NodeId;

use super::{CityGraph, GraphSettings};
use crate::plugins::camera::{EguiWantsFocus, PanOrbitCamera};

/// Emitted on every left click: the node under the cursor, or `None` when
/// the click hit empty space or the globe itself. The overlay consumes this;
/// the graph core knows nothing about selection.
#[derive(Event, Debug, Clone, Copy)]
pub struct NodePicked {
    pub node: Option<NodeId>,
}

pub(super) fn pick_node(
    buttons: Res<Input<MouseButton>>,
    egui_focus: Res<EguiWantsFocus>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<PanOrbitCamera>>,
    graph: Option<Res<CityGraph>>,
    settings: Res<GraphSettings>,
    mut picked: EventWriter<NodePicked>,
) {
    if !buttons.just_pressed(MouseButton::Left) || egui_focus.0 {
        return;
    }
    let Some(city_graph) = graph else {
        return;
    };
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Some(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let ray = PickRay::new(ray.origin.as_dvec3(), ray.direction.as_dvec3());
    // a little slack over the visual radius keeps small markers clickable
    let pick_radius = f64::from(settings.marker_radius) * 1.5;

    let mut nearest: Option<(f64, NodeId)> = None;
    for node in city_graph.graph.nodes() {
        if let Some(t) = ray_sphere(&ray, node.position(), pick_radius) {
            if nearest.map_or(true, |(best, _)| t < best) {
                nearest = Some((t, node.id()));
            }
        }
    }
    picked.send(NodePicked {
        node: nearest.map(|(_, id)| id),
    });
}
