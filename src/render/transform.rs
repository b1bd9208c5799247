//! The model, view and projection matrices for the scene.
//!
//! View and projection are computed once at startup and never change; the
//! model matrix is a pure function of elapsed wall-clock time so the spin rate
//! is independent of the achieved frame rate.

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};

/// Seconds per full turn about the vertical axis.
const TURN_PERIOD: f32 = 6.0;

const EYE: Vec3 = Vec3::new(0.0, 0.0, -6.0);
const FOV_Y_DEGREES: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// The fixed camera matrices.
pub struct Transforms {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Transforms {
    /// Builds the static camera looking at the origin from [`EYE`].
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            view: Mat4::look_at_rh(EYE, Vec3::ZERO, Vec3::Y),
            projection: Mat4::perspective_rh_gl(
                FOV_Y_DEGREES.to_radians(),
                aspect_ratio,
                Z_NEAR,
                Z_FAR,
            ),
        }
    }
}

/// Rotation about the vertical axis after `elapsed` seconds.
pub fn spin_angle(elapsed: f32) -> f32 {
    elapsed / TURN_PERIOD * TAU
}

/// The cube turns about the vertical axis once every [`TURN_PERIOD`] seconds
/// and about the horizontal axis at a third of that rate, both angles sampled
/// from the same instant.
pub fn model_matrix(elapsed: f32) -> Mat4 {
    let angle = spin_angle(elapsed);
    Mat4::from_rotation_y(angle) * Mat4::from_rotation_x(angle / 3.0)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn spin_angle_tracks_elapsed_time() {
        assert_eq!(spin_angle(0.0), 0.0);
        assert!((spin_angle(3.0) - PI).abs() < 1e-6);
        assert!((spin_angle(6.0) - TAU).abs() < 1e-6);
    }

    #[test]
    fn model_matrix_is_identity_at_start() {
        assert_eq!(model_matrix(0.0), Mat4::IDENTITY);
    }

    #[test]
    fn model_matrix_composes_vertical_then_horizontal() {
        for elapsed in [0.5, 1.7, 3.0, 11.25] {
            let angle = spin_angle(elapsed);
            let expected = Mat4::from_rotation_y(angle) * Mat4::from_rotation_x(angle / 3.0);
            assert_eq!(model_matrix(elapsed).to_cols_array(), expected.to_cols_array());
        }
    }

    #[test]
    fn half_turn_flips_the_up_axis_by_a_third() {
        // At t = 3s the vertical angle is pi and the horizontal angle pi / 3.
        // The horizontal rotation tilts +Y to (0, 1/2, sqrt(3)/2), then the
        // half turn about Y negates its z component.
        let rotated = model_matrix(3.0).transform_vector3(Vec3::Y);
        let expected = Vec3::new(0.0, 0.5, -(3.0f32.sqrt()) / 2.0);
        assert!(rotated.abs_diff_eq(expected, 1e-6), "got {rotated}");
    }

    #[test]
    fn camera_matrices_are_stable_across_rebuilds() {
        let first = Transforms::new(16.0 / 9.0);
        let second = Transforms::new(16.0 / 9.0);
        assert_eq!(first.view.to_cols_array(), second.view.to_cols_array());
        assert_eq!(
            first.projection.to_cols_array(),
            second.projection.to_cols_array()
        );
    }

    #[test]
    fn view_matrix_puts_the_eye_at_the_origin() {
        let transforms = Transforms::new(1.0);
        let eye_in_view = transforms.view.transform_point3(EYE);
        assert!(eye_in_view.abs_diff_eq(Vec3::ZERO, 1e-6));
    }
}
