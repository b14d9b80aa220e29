#![warn(
    clippy::unwrap_used,
    clippy::cast_lossless,
    clippy::unimplemented,
    clippy::indexing_slicing,
    clippy::expect_used
)]

//! Bevy plugins that present the city graph: the textured globe, node
//! markers and arc polylines, a pan-orbit camera, and the egui overlay.

use bevy::prelude::*;

pub mod plugins;

pub use plugins::graph::{CityGraph, GraphSettings, NodePicked};

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_plugin(plugins::globe::GlobePlugin);
        app.add_plugin(plugins::graph::GraphPlugin);
        app.add_plugin(plugins::camera::CameraPlugin);
        app.add_plugin(plugins::helpers::HelpersPlugin);
    }
}
