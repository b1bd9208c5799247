//! The crate cube geometry and its vertex layout.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use glow::HasContext;

use crate::abs::{Mesh, Vertex};

#[derive(Clone, Copy, Debug)]
#[repr(C)]
pub struct CubeVertex {
    pub position: Vec3,
    pub uv: Vec2,
}

impl Vertex for CubeVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<CubeVertex>() as i32;

            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);

            // Texture coordinate attribute
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 2, glow::FLOAT, false, stride, size_of::<Vec3>() as i32);
        }
    }
}

/// The 24 vertices of the cube, four per face so every face gets its own
/// texture coordinates.
pub fn cube_vertices() -> [CubeVertex; 24] {
    let v = |x: f32, y: f32, z: f32, u: f32, w: f32| CubeVertex {
        position: Vec3::new(x, y, z),
        uv: Vec2::new(u, w),
    };
    [
        // Top
        v(-1.0, 1.0, -1.0, 0.0, 0.0),
        v(-1.0, 1.0, 1.0, 0.0, 1.0),
        v(1.0, 1.0, 1.0, 1.0, 1.0),
        v(1.0, 1.0, -1.0, 1.0, 0.0),
        // Left
        v(-1.0, 1.0, 1.0, 1.0, 1.0),
        v(-1.0, -1.0, 1.0, 0.0, 1.0),
        v(-1.0, -1.0, -1.0, 0.0, 0.0),
        v(-1.0, 1.0, -1.0, 1.0, 0.0),
        // Right
        v(1.0, 1.0, 1.0, 1.0, 1.0),
        v(1.0, -1.0, 1.0, 0.0, 1.0),
        v(1.0, -1.0, -1.0, 0.0, 0.0),
        v(1.0, 1.0, -1.0, 1.0, 0.0),
        // Front
        v(1.0, 1.0, 1.0, 1.0, 1.0),
        v(1.0, -1.0, 1.0, 1.0, 0.0),
        v(-1.0, -1.0, 1.0, 0.0, 0.0),
        v(-1.0, 1.0, 1.0, 0.0, 1.0),
        // Back
        v(1.0, 1.0, -1.0, 1.0, 1.0),
        v(1.0, -1.0, -1.0, 1.0, 0.0),
        v(-1.0, -1.0, -1.0, 0.0, 0.0),
        v(-1.0, 1.0, -1.0, 0.0, 1.0),
        // Bottom
        v(-1.0, -1.0, -1.0, 0.0, 0.0),
        v(-1.0, -1.0, 1.0, 0.0, 1.0),
        v(1.0, -1.0, 1.0, 1.0, 1.0),
        v(1.0, -1.0, -1.0, 1.0, 0.0),
    ]
}

/// Two triangles per face, wound counter-clockwise seen from outside the cube
/// so back-face culling keeps the faces toward the camera.
pub fn cube_indices() -> [u16; 36] {
    [
        // Top
        0, 1, 2, 0, 2, 3, //
        // Left
        5, 4, 6, 6, 4, 7, //
        // Right
        8, 9, 10, 8, 10, 11, //
        // Front
        13, 12, 14, 15, 14, 12, //
        // Back
        16, 17, 18, 16, 18, 19, //
        // Bottom
        21, 20, 22, 22, 20, 23,
    ]
}

/// Uploads the cube into a GPU-resident mesh.
pub fn build_cube_mesh(gl: &Arc<glow::Context>) -> Result<Mesh, String> {
    Mesh::new(gl, &cube_vertices(), &cube_indices())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_four_vertices_per_face() {
        assert_eq!(cube_vertices().len(), 24);
    }

    #[test]
    fn indices_cover_two_triangles_per_face() {
        let indices = cube_indices();
        assert_eq!(indices.len(), 36);
        assert!(
            indices
                .iter()
                .all(|&index| (index as usize) < cube_vertices().len())
        );
    }

    #[test]
    fn positions_and_uvs_stay_on_the_unit_cube() {
        for vertex in cube_vertices() {
            for component in vertex.position.to_array() {
                assert_eq!(component.abs(), 1.0);
            }
            for component in vertex.uv.to_array() {
                assert!((0.0..=1.0).contains(&component));
            }
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise_toward_the_outside() {
        let vertices = cube_vertices();
        for triangle in cube_indices().chunks(3) {
            let a = vertices[triangle[0] as usize].position;
            let b = vertices[triangle[1] as usize].position;
            let c = vertices[triangle[2] as usize].position;
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(
                normal.dot(centroid) > 0.0,
                "triangle {triangle:?} faces inward"
            );
        }
    }
}
