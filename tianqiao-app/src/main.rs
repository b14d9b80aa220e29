//! Seven cities on a globe, every pair joined by an arc.

use bevy::prelude::*;
use tianqiao_renderer::GraphSettings;
use tianqiao_scene::CityDataset;

fn main() {
    App::new()
        .insert_resource(CityDataset::default())
        .insert_resource(GraphSettings::default())
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "天桥 tianqiao".to_owned(),
                ..default()
            }),
            ..default()
        }))
        .add_plugin(tianqiao_renderer::Plugin)
        .run();
}
