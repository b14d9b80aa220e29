use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use tianqiao_scene::GLOBE_RADIUS;

#[derive(Component)]
pub struct Globe;

pub struct GlobePlugin;

impl bevy::app::Plugin for GlobePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK));
        app.insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 0.6,
        });
        app.add_systems(Startup, setup);
    }
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut images: ResMut<Assets<Image>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let globe_material = materials.add(StandardMaterial {
        base_color_texture: Some(images.add(latitude_band_texture())),
        perceptual_roughness: 0.9,
        metallic: 0.0,
        ..default()
    });

    let radius = GLOBE_RADIUS as f32;
    commands.spawn((
        PbrBundle {
            mesh: meshes.add(
                shape::UVSphere {
                    radius,
                    sectors: 64,
                    stacks: 64,
                }
                .into(),
            ),
            material: globe_material,
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..default()
        },
        Globe,
    ));

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 5e10,
            range: radius * 40.0,
            shadows_enabled: false,
            ..default()
        },
        transform: Transform::from_xyz(radius * 4.0, radius * 4.0, radius * 4.0),
        ..default()
    });
}

/// Generated stand-in texture: latitude bands from polar white through
/// temperate green to equatorial blue. Asset loading stays out of this crate.
fn latitude_band_texture() -> Image {
    const TEXTURE_SIZE: usize = 64;

    let bands: [[u8; 4]; 8] = [
        [235, 240, 245, 255],
        [180, 205, 190, 255],
        [96, 150, 110, 255],
        [70, 120, 160, 255],
        [60, 110, 165, 255],
        [90, 140, 115, 255],
        [170, 200, 185, 255],
        [230, 236, 242, 255],
    ];

    let mut texture_data = vec![0; TEXTURE_SIZE * TEXTURE_SIZE * 4];
    for y in 0..TEXTURE_SIZE {
        let band = bands[y * bands.len() / TEXTURE_SIZE];
        for x in 0..TEXTURE_SIZE {
            let offset = (y * TEXTURE_SIZE + x) * 4;
            texture_data[offset..offset + 4].copy_from_slice(&band);
        }
    }

    Image::new_fill(
        Extent3d {
            width: TEXTURE_SIZE as u32,
            height: TEXTURE_SIZE as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &texture_data,
        TextureFormat::Rgba8UnormSrgb,
    )
}
