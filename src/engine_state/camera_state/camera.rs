//! # Camera Implementation
//!
//! This module contains the core camera implementation including:
//! - Camera location and orthonormal orientation frame
//! - View matrix derivation and screen-to-world ray unprojection
//! - Projection matrix handling
//! - Camera controller for pan input
//! - GPU uniform data for the renderer
//!
//! ## Conventions
//! - World space is right-handed with +Y up
//! - Camera space looks down -Z; the stored frame's Z column points away
//!   from the look target
//! - Clip-space depth runs from 0 at the near plane to 1 at the far plane

use cgmath::*;

use crate::core::Ray;
use crate::engine_state::PlayerAction;

/// Transformation matrix converting OpenGL clip space to a [0, 1] depth range.
///
/// cgmath's `perspective` produces OpenGL-style clip coordinates where depth
/// spans -1 (near) to 1 (far). Backends with a [0, 1] depth buffer expect the
/// near plane at 0 instead, so this matrix:
/// 1. Scales the Z coordinate from [-1, 1] to [-0.5, 0.5]
/// 2. Translates the Z coordinate from [-0.5, 0.5] to [0, 1]
#[rustfmt::skip]
pub const OPENGL_TO_ZERO_ONE_DEPTH: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,  // Scale Z from [-1,1] to [-0.5,0.5]
    0.0, 0.0, 0.5, 1.0,  // Translate Z from [-0.5,0.5] to [0,1]
);

/// Represents the camera in 3D space.
///
/// The camera stores its world-space location and a 3x3 frame whose columns
/// are the camera's right, up and back axes in world space. The columns are
/// always mutually orthogonal unit vectors, so the frame's transpose is its
/// inverse.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// The camera's location in world space
    pub location: Point3<f32>,
    /// Right (x), up (y) and back (z) axes of the camera in world space
    pub axis: Matrix3<f32>,
}

impl Camera {
    /// Creates a camera at `location` aligned with the world axes, looking
    /// down -Z.
    pub fn new<V: Into<Point3<f32>>>(location: V) -> Self {
        Self {
            location: location.into(),
            axis: Matrix3::identity(),
        }
    }

    /// The world-to-camera rotation, the transpose of the camera frame.
    pub fn rotation(&self) -> Matrix3<f32> {
        self.axis.transpose()
    }

    /// Gets the camera's forward direction vector.
    pub fn get_view_vec(&self) -> Vector3<f32> {
        -self.axis.z
    }

    /// Turns the camera to face `target`.
    ///
    /// `target` must differ from the camera location and must not be straight
    /// above or below it; the frame is undefined for those inputs.
    pub fn look_at(&mut self, target: Point3<f32>) {
        let forward = (target - self.location).normalize();
        let right = forward.cross(Vector3::unit_y()).normalize();
        let up = right.cross(forward);

        self.axis = Matrix3::from_cols(right, up, -forward);
    }

    /// Calculates the view matrix for this camera.
    ///
    /// The view matrix is the inverse of the camera's world transform: the
    /// transposed frame followed by a translation of `-rotation * location`.
    ///
    /// # Returns
    /// A 4x4 matrix mapping world-space points into camera space
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        let rotation = self.rotation();
        let translation = -(rotation * self.location.to_vec());

        let mut view = Matrix4::from(rotation);
        view.w = translation.extend(1.0);
        view
    }

    /// Horizontal forward direction: the forward axis with its vertical
    /// component removed.
    fn pan_forward_direction(&self) -> Vector3<f32> {
        -self.axis.x.cross(Vector3::unit_y())
    }

    fn pan_right_direction(&self) -> Vector3<f32> {
        self.axis.x
    }

    /// Moves the camera forward along the ground plane.
    pub fn pan_forward(&mut self, amount: f32) {
        self.location += self.pan_forward_direction() * amount;
    }

    /// Moves the camera backward along the ground plane.
    pub fn pan_backward(&mut self, amount: f32) {
        self.location -= self.pan_forward_direction() * amount;
    }

    /// Moves the camera left along the ground plane.
    pub fn pan_left(&mut self, amount: f32) {
        self.location -= self.pan_right_direction() * amount;
    }

    /// Moves the camera right along the ground plane.
    pub fn pan_right(&mut self, amount: f32) {
        self.location += self.pan_right_direction() * amount;
    }

    /// Builds the world-space ray passing through a point on the screen.
    ///
    /// # Arguments
    /// * `ndc` - The screen point in normalized device coordinates, with
    ///   (-1, -1) at the bottom-left and (1, 1) at the top-right
    /// * `projection` - The projection the frame is drawn with
    ///
    /// # Returns
    /// A ray starting at the camera location with a normalized direction, or
    /// `None` if the view or projection matrix is singular.
    pub fn ray_through(&self, ndc: Point2<f32>, projection: &Projection) -> Option<Ray> {
        let clip = Vector4::new(ndc.x, ndc.y, 1.0, 1.0);

        let camera_space = projection.calc_matrix().invert()? * clip;
        let camera_direction = (camera_space.truncate() / camera_space.w).normalize();

        let world_direction = self.calc_matrix().invert()? * camera_direction.extend(0.0);

        Some(Ray::new(self.location, world_direction.truncate().normalize()))
    }

    /// Applies pending pan input from `controller` and clears it.
    pub fn apply_controller_updates_and_reset_controller(
        &mut self,
        controller: &mut CameraController,
    ) {
        self.pan_forward(controller.amount_forward);
        self.pan_backward(controller.amount_backward);
        self.pan_left(controller.amount_left);
        self.pan_right(controller.amount_right);

        controller.amount_forward = 0.0;
        controller.amount_backward = 0.0;
        controller.amount_left = 0.0;
        controller.amount_right = 0.0;
    }
}

/// Represents a camera's projection matrix and related parameters.
///
/// This handles the perspective projection used to render the 3D scene.
/// It manages the aspect ratio, field of view, and near/far clipping planes.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Aspect ratio (width / height)
    aspect: f32,
    /// Vertical field of view in radians
    fovy: Rad<f32>,
    /// Near clipping plane distance
    znear: f32,
    /// Far clipping plane distance
    zfar: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `width` - Viewport width in pixels
    /// * `height` - Viewport height in pixels
    /// * `fovy` - Vertical field of view (can be any type convertible to `Rad<f32>`)
    /// * `znear` - Near clipping plane distance
    /// * `zfar` - Far clipping plane distance
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        let aspect = width as f32 / height as f32;
        let fovy: Rad<f32> = fovy.into();
        Self {
            aspect,
            fovy,
            znear,
            zfar,
        }
    }

    /// Updates the projection's aspect ratio for viewport resizing.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    /// Current aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Calculates the projection matrix.
    ///
    /// Combines a right-handed perspective projection with the conversion to
    /// [0, 1] depth, so `z_clip / w_clip` is 0 at the near plane and 1 at the
    /// far plane.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_ZERO_ONE_DEPTH * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// Handles camera movement based on user input.
///
/// This struct tracks which pan directions were requested this frame and
/// applies them to the camera, a fixed distance per frame, when updated.
#[derive(Debug)]
pub struct CameraController {
    // Pan distances for the current frame
    amount_left: f32,
    amount_right: f32,
    amount_forward: f32,
    amount_backward: f32,

    // Distance moved per frame while a direction is held
    speed: f32,
}

impl CameraController {
    /// Creates a new camera controller that pans `speed` units per frame.
    pub fn new(speed: f32) -> Self {
        Self {
            amount_left: 0.0,
            amount_right: 0.0,
            amount_forward: 0.0,
            amount_backward: 0.0,
            speed,
        }
    }

    /// Processes player actions and updates controller state accordingly.
    pub fn intake_actions(&mut self, actions: &PlayerAction) {
        if actions.move_forward {
            self.amount_forward = self.speed;
        }
        if actions.move_backward {
            self.amount_backward = self.speed;
        }
        if actions.move_left {
            self.amount_left = self.speed;
        }
        if actions.move_right {
            self.amount_right = self.speed;
        }
    }

    /// Checks if there are any pending updates that would move the camera.
    pub fn has_updates(&self) -> bool {
        self.amount_forward > 0.0
            || self.amount_backward > 0.0
            || self.amount_left > 0.0
            || self.amount_right > 0.0
    }
}

/// GPU-friendly representation of camera data for shaders.
///
/// This struct is handed to the renderer in the layout a uniform buffer
/// expects.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    // cgmath matrices are not Pod, so they're stored as 4x4 f32 arrays
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_proj_inverse: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    /// Creates a new camera uniform with identity matrices and zero position.
    pub fn new() -> Self {
        Self {
            view: Matrix4::identity().into(),
            projection: Matrix4::identity().into(),
            view_proj_inverse: Matrix4::identity().into(),
            position: [0.0, 0.0, 0.0, 0.0],
        }
    }

    /// Updates the matrices and position based on the current camera state.
    ///
    /// # Arguments
    /// * `camera` - The camera to get the view matrix and location from
    /// * `projection` - The projection to use
    pub fn update_view_proj_and_pos(&mut self, camera: &Camera, projection: &Projection) {
        let view = camera.calc_matrix();
        let proj = projection.calc_matrix();
        self.view = view.into();
        self.projection = proj.into();
        if let Some(inverse) = (proj * view).invert() {
            self.view_proj_inverse = inverse.into();
        }
        let pos3: [f32; 3] = camera.location.into();

        self.position = [pos3[0], pos3[1], pos3[2], 0.0];
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_vec_close(actual: Vector3<f32>, expected: Vector3<f32>) {
        assert!(
            (actual - expected).magnitude() < EPSILON,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn assert_orthonormal(axis: &Matrix3<f32>) {
        for column in [axis.x, axis.y, axis.z] {
            assert!((column.magnitude() - 1.0).abs() < EPSILON, "{column:?} is not unit");
        }
        assert!(axis.x.dot(axis.y).abs() < EPSILON);
        assert!(axis.y.dot(axis.z).abs() < EPSILON);
        assert!(axis.z.dot(axis.x).abs() < EPSILON);
    }

    fn square_projection() -> Projection {
        Projection::new(800, 800, Deg(90.0), 1.0, 100.0)
    }

    #[test]
    fn look_at_builds_right_handed_frame() {
        let mut camera = Camera::new(Point3::new(0.0, 0.0, 10.0));
        camera.look_at(Point3::new(0.0, 0.0, 0.0));

        assert_vec_close(camera.axis.x, Vector3::new(1.0, 0.0, 0.0));
        assert_vec_close(camera.axis.y, Vector3::new(0.0, 1.0, 0.0));
        assert_vec_close(camera.axis.z, Vector3::new(0.0, 0.0, 1.0));
        assert_vec_close(camera.get_view_vec(), Vector3::new(0.0, 0.0, -1.0));
        assert_vec_close(camera.axis.x.cross(camera.axis.y), camera.axis.z);
    }

    #[test]
    fn look_at_keeps_frame_orthonormal() {
        let mut camera = Camera::new(Point3::new(40.0, 50.0, 30.0));
        let targets = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(-12.0, 3.0, 7.5),
            Point3::new(100.0, 49.0, -20.0),
            Point3::new(40.5, 0.0, 30.5),
        ];

        for target in targets {
            camera.look_at(target);
            assert_orthonormal(&camera.axis);
            camera.location += Vector3::new(1.5, -0.5, 2.0);
        }
    }

    #[test]
    fn view_matrix_maps_camera_to_origin_and_target_down_negative_z() {
        let mut camera = Camera::new(Point3::new(40.0, 50.0, 30.0));
        let target = Point3::new(0.0, 0.0, 0.0);
        camera.look_at(target);
        let view = camera.calc_matrix();

        let eye = view * camera.location.to_homogeneous();
        assert_vec_close(eye.truncate(), Vector3::new(0.0, 0.0, 0.0));

        let distance = (target - camera.location).magnitude();
        let looked_at = view * target.to_homogeneous();
        assert_vec_close(looked_at.truncate(), Vector3::new(0.0, 0.0, -distance));
    }

    #[test]
    fn projection_depth_is_zero_at_near_and_one_at_far() {
        let projection = Projection::new(1600, 900, Deg(30.0), 1.0, 100.0);
        let matrix = projection.calc_matrix();

        let near = matrix * Vector4::new(0.0, 0.0, -1.0, 1.0);
        let far = matrix * Vector4::new(0.0, 0.0, -100.0, 1.0);

        assert!((near.z / near.w).abs() < 1e-4);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut projection = square_projection();
        assert_eq!(projection.aspect(), 1.0);
        projection.resize(1920, 1080);
        assert!((projection.aspect() - 16.0 / 9.0).abs() < EPSILON);
    }

    #[test]
    fn screen_center_unprojects_to_forward() {
        let mut camera = Camera::new(Point3::new(0.0, 0.0, 10.0));
        camera.look_at(Point3::new(0.0, 0.0, 0.0));

        let ray = camera
            .ray_through(Point2::new(0.0, 0.0), &square_projection())
            .expect("matrices are invertible");

        assert_eq!(ray.origin, camera.location);
        assert_vec_close(ray.direction, Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn screen_edge_unprojects_at_half_field_of_view() {
        let mut camera = Camera::new(Point3::new(0.0, 0.0, 10.0));
        camera.look_at(Point3::new(0.0, 0.0, 0.0));
        let projection = square_projection();

        let right = camera.ray_through(Point2::new(1.0, 0.0), &projection).unwrap();
        let top = camera.ray_through(Point2::new(0.0, 1.0), &projection).unwrap();

        let diagonal = std::f32::consts::FRAC_1_SQRT_2;
        assert_vec_close(right.direction, Vector3::new(diagonal, 0.0, -diagonal));
        assert_vec_close(top.direction, Vector3::new(0.0, diagonal, -diagonal));
    }

    #[test]
    fn unprojected_center_matches_view_vec_for_tilted_camera() {
        let mut camera = Camera::new(Point3::new(40.0, 50.0, 30.0));
        camera.look_at(Point3::new(0.0, 0.0, 0.0));

        let ray = camera
            .ray_through(Point2::new(0.0, 0.0), &Projection::new(1280, 720, Deg(30.0), 1.0, 100.0))
            .unwrap();
        assert_vec_close(ray.direction, camera.get_view_vec());
    }

    #[test]
    fn pans_stay_on_the_ground_plane() {
        let mut camera = Camera::new(Point3::new(0.0, 10.0, 10.0));
        camera.look_at(Point3::new(0.0, 0.0, 0.0));

        camera.pan_forward(2.0);
        assert_vec_close(camera.location.to_vec(), Vector3::new(0.0, 10.0, 8.0));
        camera.pan_right(1.0);
        assert_vec_close(camera.location.to_vec(), Vector3::new(1.0, 10.0, 8.0));
        camera.pan_backward(3.0);
        assert_vec_close(camera.location.to_vec(), Vector3::new(1.0, 10.0, 11.0));
        camera.pan_left(4.0);
        assert_vec_close(camera.location.to_vec(), Vector3::new(-3.0, 10.0, 11.0));
    }

    #[test]
    fn controller_applies_fixed_step_then_resets() {
        let mut camera = Camera::new(Point3::new(0.0, 0.0, 0.0));
        let mut controller = CameraController::new(0.3);
        let actions = PlayerAction {
            move_forward: true,
            move_right: true,
            ..PlayerAction::default()
        };

        controller.intake_actions(&actions);
        assert!(controller.has_updates());
        camera.apply_controller_updates_and_reset_controller(&mut controller);

        assert_vec_close(camera.location.to_vec(), Vector3::new(0.3, 0.0, -0.3));
        assert!(!controller.has_updates());
    }

    #[test]
    fn opposite_pans_cancel_out() {
        let mut camera = Camera::new(Point3::new(5.0, 5.0, 5.0));
        let mut controller = CameraController::new(0.3);
        let actions = PlayerAction {
            move_left: true,
            move_right: true,
            ..PlayerAction::default()
        };

        controller.intake_actions(&actions);
        camera.apply_controller_updates_and_reset_controller(&mut controller);
        assert_vec_close(camera.location.to_vec(), Vector3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn uniform_carries_view_and_projection() {
        let mut camera = Camera::new(Point3::new(1.0, 2.0, 3.0));
        camera.look_at(Point3::new(0.0, 0.0, 0.0));
        let projection = square_projection();

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj_and_pos(&camera, &projection);

        let view: [[f32; 4]; 4] = camera.calc_matrix().into();
        let proj: [[f32; 4]; 4] = projection.calc_matrix().into();
        assert_eq!(uniform.view, view);
        assert_eq!(uniform.projection, proj);
        assert_eq!(uniform.position, [1.0, 2.0, 3.0, 0.0]);
    }
}
