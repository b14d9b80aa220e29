use bevy::prelude::*;
use bevy_prototype_debug_lines::DebugLines;
use tianqiao_scene::{
    ArcPathBuilder, CityDataset, Graph, Node, NodeId, SphericalProjection,
};

use super::helpers::UiState;

mod picking;
pub use picking::NodePicked;

const ARC_COLOR: Color = Color::rgb(1.0, 0.62, 0.12);
const MARKER_COLOR: Color = Color::rgb(0.92, 0.22, 0.18);

/// Configuration consumed when the graph is built at startup. Insert it
/// before [`GraphPlugin`] to override the defaults.
#[derive(Resource, Debug, Clone, Copy)]
pub struct GraphSettings {
    /// Upper bound on graph nodes; inserts beyond it are rejected and logged.
    pub node_limit: Option<usize>,
    pub marker_radius: f32,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            node_limit: Some(64),
            marker_radius: 60.0,
        }
    }
}

/// The built graph plus the projection that placed its nodes. Read-only
/// after startup.
#[derive(Resource)]
pub struct CityGraph {
    pub graph: Graph,
    pub projection: SphericalProjection,
}

#[derive(Component)]
pub struct CityMarker(pub NodeId);

/// Sampled arc for one edge, in world coordinates. The polyline is redrawn
/// from these points every frame.
#[derive(Component)]
pub struct CityArc {
    pub source: NodeId,
    pub target: NodeId,
    points: Vec<Vec3>,
}

pub struct GraphPlugin;

impl bevy::app::Plugin for GraphPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CityDataset>();
        app.init_resource::<GraphSettings>();
        app.add_event::<NodePicked>();
        app.add_systems(Startup, setup_graph);
        app.add_systems(
            Update,
            (draw_arcs, apply_marker_visibility, picking::pick_node),
        );
    }
}

fn setup_graph(
    mut commands: Commands,
    dataset: Res<CityDataset>,
    settings: Res<GraphSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let projection = SphericalProjection::default();
    let mut graph = match settings.node_limit {
        Some(limit) => Graph::with_node_limit(limit),
        None => Graph::new(),
    };

    for (i, record) in dataset.cities.iter().enumerate() {
        let node = Node::new(
            NodeId(i as u32),
            record.name.clone(),
            record.coordinate(),
            &projection,
        );
        if let Err(e) = graph.add_node(node) {
            warn!("skipping city {}: {e}", record.name);
        }
    }

    // every earlier city paired with every later one
    let ids: Vec<NodeId> = graph.nodes().iter().map(Node::id).collect();
    for (i, &a) in ids.iter().enumerate() {
        for &b in ids.iter().skip(i + 1) {
            if let Err(e) = graph.add_edge(a, b) {
                warn!("skipping edge: {e}");
            }
        }
    }
    info!(
        "city graph ready: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let marker_mesh = meshes.add(
        shape::UVSphere {
            radius: settings.marker_radius,
            sectors: 16,
            stacks: 16,
        }
        .into(),
    );
    let marker_material = materials.add(StandardMaterial {
        base_color: MARKER_COLOR,
        unlit: true,
        ..default()
    });

    for node in graph.nodes() {
        commands.spawn((
            PbrBundle {
                mesh: marker_mesh.clone(),
                material: marker_material.clone(),
                transform: Transform::from_translation(node.position().as_vec3()),
                ..default()
            },
            CityMarker(node.id()),
        ));
    }

    let builder = ArcPathBuilder::default();
    for edge in graph.edges() {
        // both endpoints are present: the graph accepted the edge
        let (Some(source), Some(target)) =
            (graph.node(edge.source()), graph.node(edge.target()))
        else {
            continue;
        };
        // sampled in world space; no per-entity transform needed
        let points = builder
            .build(source.position(), target.position())
            .iter()
            .map(|p| p.as_vec3())
            .collect();
        commands.spawn(CityArc {
            source: edge.source(),
            target: edge.target(),
            points,
        });
    }

    commands.insert_resource(CityGraph { graph, projection });
}

fn draw_arcs(ui_state: Res<UiState>, arcs: Query<&CityArc>, mut lines: ResMut<DebugLines>) {
    if !ui_state.show_arcs {
        return;
    }
    for arc in &arcs {
        for pair in arc.points.windows(2) {
            if let [start, end] = pair {
                lines.line_colored(*start, *end, 0.0, ARC_COLOR);
            }
        }
    }
}

fn apply_marker_visibility(
    ui_state: Res<UiState>,
    mut markers: Query<&mut Visibility, With<CityMarker>>,
) {
    for mut visibility in &mut markers {
        *visibility = if ui_state.show_markers {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
