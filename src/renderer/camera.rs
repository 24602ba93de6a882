use glam::{Mat3, Mat4, Vec2, Vec3};

/// Rotation angles are kept in sixteenths of a degree.
pub const FULL_TURN: i32 = 360 * 16;

const MIN_FOV: f32 = 5.0;
const MAX_FOV: f32 = 150.0;
const DEFAULT_FOV: f32 = 45.0;
/// Sixteenths of a degree per dragged pixel.
const DRAG_SENSITIVITY: i32 = 8;
/// Wheel angle (eighths of a degree) per degree of fov.
const ZOOM_DIVISOR: f32 = 50.0;

pub fn normalize_angle(angle: i32) -> i32 {
    angle.rem_euclid(FULL_TURN)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragButton {
    Left,
    Right,
}

/// Fixed camera looking at a model that the user spins and zooms.
pub struct ViewCamera {
    pub x_rot: i32,
    pub y_rot: i32,
    pub z_rot: i32,

    /// Vertical field of view, degrees.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    pub eye_offset: Vec3,
    pub light_pos: Vec3,
}

impl Default for ViewCamera {
    fn default() -> Self {
        Self {
            x_rot: 0,
            y_rot: 0,
            z_rot: 0,

            fov: DEFAULT_FOV,
            aspect: 1.0,
            near: 0.01,
            far: 100.0,

            eye_offset: Vec3::new(0.0, 0.0, -8.0),
            light_pos: Vec3::new(10.0, 30.0, 70.0),
        }
    }
}

impl ViewCamera {
    pub fn set_x_rotation(&mut self, angle: i32) -> bool {
        replace_angle(&mut self.x_rot, angle)
    }

    pub fn set_y_rotation(&mut self, angle: i32) -> bool {
        replace_angle(&mut self.y_rot, angle)
    }

    pub fn set_z_rotation(&mut self, angle: i32) -> bool {
        replace_angle(&mut self.z_rot, angle)
    }

    /// Left drag pitches and yaws, right drag pitches and rolls.
    /// Returns whether any angle changed.
    pub fn process_drag(&mut self, button: DragButton, delta: Vec2) -> bool {
        let dx = delta.x.round() as i32;
        let dy = delta.y.round() as i32;

        let pitched = self.set_x_rotation(self.x_rot + DRAG_SENSITIVITY * dy);
        let turned = match button {
            DragButton::Left => self.set_y_rotation(self.y_rot + DRAG_SENSITIVITY * dx),
            DragButton::Right => self.set_z_rotation(self.z_rot + DRAG_SENSITIVITY * dx),
        };
        pitched || turned
    }

    /// `angle_delta` is in eighths of a degree, one wheel notch being 120.
    pub fn process_scroll(&mut self, angle_delta: f32) {
        self.fov = (self.fov - angle_delta / ZOOM_DIVISOR).clamp(MIN_FOV, MAX_FOV);
    }

    pub fn reset(&mut self) {
        let aspect = self.aspect;
        *self = Self {
            aspect,
            ..Self::default()
        };
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x((180.0 - self.x_rot as f32 / 16.0).to_radians())
            * Mat4::from_rotation_y((-self.y_rot as f32 / 16.0).to_radians())
            * Mat4::from_rotation_z((self.z_rot as f32 / 16.0).to_radians())
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.eye_offset)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn normal_matrix(&self) -> Mat3 {
        Mat3::from_mat4(self.world_matrix()).inverse().transpose()
    }
}

fn replace_angle(slot: &mut i32, angle: i32) -> bool {
    let angle = normalize_angle(angle);
    if angle == *slot {
        return false;
    }
    *slot = angle;
    true
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub proj: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
    /// WGSL `mat3x3<f32>`: three columns, each padded to 16 bytes.
    pub normal_matrix: [[f32; 4]; 3],
    pub light_pos: [f32; 3],
    pub _padding0: f32,
    pub color: [f32; 3],
    pub _padding1: f32,
}

impl SceneUniform {
    pub fn from_camera(camera: &ViewCamera, color: Vec3) -> Self {
        let normal = camera.normal_matrix();
        Self {
            proj: camera.projection_matrix().to_cols_array_2d(),
            model_view: (camera.view_matrix() * camera.world_matrix()).to_cols_array_2d(),
            normal_matrix: [
                normal.x_axis.extend(0.0).to_array(),
                normal.y_axis.extend(0.0).to_array(),
                normal.z_axis.extend(0.0).to_array(),
            ],
            light_pos: camera.light_pos.to_array(),
            _padding0: 0.0,
            color: color.to_array(),
            _padding1: 0.0,
        }
    }
}
