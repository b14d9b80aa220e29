use bevy::prelude::*;
use tianqiao_scene::NodeId;

#[derive(Default, Resource)]
pub struct UiState {
    pub selected: Option<NodeId>,
    pub show_axes: bool,
    pub show_arcs: bool,
    pub show_markers: bool,
    pub is_window_open: bool,
}

pub fn configure_ui_state(mut ui_state: ResMut<UiState>) {
    ui_state.is_window_open = true;
    ui_state.show_arcs = true;
    ui_state.show_markers = true;
}
