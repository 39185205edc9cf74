use glam::{Mat4, Quat, Vec3};

use crate::types::{InstanceRaw, Vertex};

const CUBE_COLOR: [f32; 3] = [0.78, 0.52, 0.29];
const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const LIGHT_SCALE: f32 = 0.2;

const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

const POINT_LIGHT_POSITIONS: [Vec3; 4] = [
    Vec3::new(0.7, 0.2, 2.0),
    Vec3::new(2.3, -3.3, -4.0),
    Vec3::new(-4.0, 2.0, -12.0),
    Vec3::new(0.0, 0.0, -3.0),
];

/// Geometry and instances for the demo scene: rotated crates plus light markers
#[derive(Debug, Clone)]
pub struct Scene {
    pub vertices: Vec<Vertex>,
    pub instances: Vec<InstanceRaw>,
}

impl Scene {
    pub fn demo() -> Self {
        let axis = Vec3::new(1.0, 0.3, 0.5).normalize();
        let cubes = CUBE_POSITIONS.iter().enumerate().map(|(i, &position)| {
            let angle = (20.0 * i as f32).to_radians();
            let model = Mat4::from_rotation_translation(Quat::from_axis_angle(axis, angle), position);
            InstanceRaw::new(model, CUBE_COLOR, false)
        });
        let lights = POINT_LIGHT_POSITIONS.iter().map(|&position| {
            let model = Mat4::from_scale_rotation_translation(
                Vec3::splat(LIGHT_SCALE),
                Quat::IDENTITY,
                position,
            );
            InstanceRaw::new(model, LIGHT_COLOR, true)
        });

        Self {
            vertices: unit_cube(),
            instances: cubes.chain(lights).collect(),
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }
}

/// Unit cube centred on the origin, two counter-clockwise triangles per face
pub fn unit_cube() -> Vec<Vertex> {
    let faces = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];
    let mut vertices = Vec::with_capacity(36);
    for normal in faces {
        let u = normal.any_orthonormal_vector();
        let v = normal.cross(u);
        let corner = |a: f32, b: f32| {
            let p = (normal + u * a + v * b) * 0.5;
            Vertex::new(p.to_array(), normal.to_array())
        };
        let (c0, c1, c2, c3) = (corner(-1.0, -1.0), corner(1.0, -1.0), corner(1.0, 1.0), corner(-1.0, 1.0));
        vertices.extend_from_slice(&[c0, c1, c2, c2, c3, c0]);
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_counts() {
        let scene = Scene::demo();
        assert_eq!(scene.vertex_count(), 36);
        assert_eq!(scene.instance_count(), 14);
        assert_eq!(scene.instances.iter().filter(|i| i.emissive > 0.0).count(), 4);
    }

    #[test]
    fn test_unit_cube_faces_wind_outwards() {
        for tri in unit_cube().chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|v| Vec3::from_array(v.position));
            let face_normal = (b - a).cross(c - a).normalize();
            assert!(face_normal.abs_diff_eq(Vec3::from_array(tri[0].normal), 1e-5));
            assert!(a.abs().max_element() <= 0.5 + 1e-6);
        }
    }

    #[test]
    fn test_first_cube_is_unrotated_at_origin() {
        let scene = Scene::demo();
        assert_eq!(Mat4::from_cols_array_2d(&scene.instances[0].model), Mat4::IDENTITY);
    }
}
