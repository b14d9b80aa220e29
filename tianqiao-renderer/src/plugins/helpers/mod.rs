use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};
use bevy_prototype_debug_lines::{DebugLines, DebugLinesPlugin};
use bevy_screen_diagnostics::{ScreenDiagnosticsPlugin, ScreenFrameDiagnosticsPlugin};
use tianqiao_scene::{Projection, GLOBE_RADIUS};

use super::graph::{CityGraph, NodePicked};

mod ui_state;
pub use ui_state::UiState;

pub struct HelpersPlugin;

impl bevy::app::Plugin for HelpersPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugin(EguiPlugin)
            .add_plugin(DebugLinesPlugin::with_depth_test(true))
            .add_plugin(ScreenDiagnosticsPlugin::default())
            .add_plugin(ScreenFrameDiagnosticsPlugin)
            .init_resource::<UiState>()
            .add_systems(Startup, ui_state::configure_ui_state)
            .add_systems(Update, (track_selection, info_window, draw_axes));
    }
}

fn track_selection(mut picked: EventReader<NodePicked>, mut ui_state: ResMut<UiState>) {
    for event in picked.iter() {
        ui_state.selected = event.node;
    }
}

fn info_window(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    graph: Option<Res<CityGraph>>,
) {
    if !ui_state.is_window_open {
        return;
    }
    let ctx = contexts.ctx_mut();
    egui::Window::new("天桥")
        .resizable(true)
        .default_pos([16.0, 16.0])
        .default_width(280.0)
        .show(ctx, |ui| {
            egui::Grid::new("info_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    if let Some(city_graph) = graph.as_ref() {
                        ui.label("cities");
                        ui.label(city_graph.graph.node_count().to_string());
                        ui.end_row();
                        ui.label("arcs");
                        ui.label(city_graph.graph.edge_count().to_string());
                        ui.end_row();
                    }
                    ui.label("axes");
                    ui.checkbox(&mut ui_state.show_axes, "");
                    ui.end_row();
                    ui.label("show arcs");
                    ui.checkbox(&mut ui_state.show_arcs, "");
                    ui.end_row();
                    ui.label("show markers");
                    ui.checkbox(&mut ui_state.show_markers, "");
                    ui.end_row();
                });

            if let (Some(city_graph), Some(id)) = (graph.as_ref(), ui_state.selected) {
                if let Some(node) = city_graph.graph.node(id) {
                    ui.separator();
                    ui.heading(node.label());
                    ui.label(node.coordinate().to_string());
                    let position = node.position();
                    ui.label(format!(
                        "x={:.0} y={:.0} z={:.0}",
                        position.x, position.y, position.z
                    ));
                    let roundtrip = city_graph.projection.unproject(&position);
                    ui.label(format!("unprojected: {roundtrip}"));
                }
            }
        });
}

fn draw_axes(ui_state: Res<UiState>, mut lines: ResMut<DebugLines>) {
    if !ui_state.show_axes {
        return;
    }
    let length = (GLOBE_RADIUS as f32) * 1.5;
    lines.line_colored(Vec3::ZERO, Vec3::new(length, 0.0, 0.0), 0.0, Color::RED);
    lines.line_colored(Vec3::ZERO, Vec3::new(0.0, length, 0.0), 0.0, Color::GREEN);
    lines.line_colored(Vec3::ZERO, Vec3::new(0.0, 0.0, length), 0.0, Color::BLUE);
}
