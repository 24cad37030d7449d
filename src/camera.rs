use crate::anim::ease_toward;
use crate::constants::{
    CAMERA_DISTANCE_MAX, CAMERA_DISTANCE_MIN, CAMERA_FAR, CAMERA_FOCUS, CAMERA_FOV_Y,
    CAMERA_INITIAL_EYE, CAMERA_NEAR, CAMERA_TAU_SEC, ORBIT_SPEED, PITCH_LIMIT, ZOOM_SPEED,
};
use glam::{Mat4, Vec3, Vec4};

/// Damped orbit camera around the globe.
///
/// Pointer drags and wheel events move the *targets*; `update` eases the
/// actual yaw/pitch/distance toward them every frame, giving the same
/// inertial feel as the usual orbit-controls helpers.
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    target_yaw: f32,
    target_pitch: f32,
    target_distance: f32,
    aspect: f32,
}

impl OrbitCamera {
    pub fn new() -> Self {
        let offset = CAMERA_INITIAL_EYE - CAMERA_FOCUS;
        let distance = offset.length();
        let pitch = (offset.y / distance).asin();
        let yaw = offset.x.atan2(offset.z);
        Self {
            yaw,
            pitch,
            distance,
            target_yaw: yaw,
            target_pitch: pitch,
            target_distance: distance,
            aspect: 1.0,
        }
    }

    /// Apply a pointer drag, in CSS pixels.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32) {
        self.target_yaw -= dx_px * ORBIT_SPEED;
        self.target_pitch =
            (self.target_pitch + dy_px * ORBIT_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply a wheel delta; positive deltas move the camera away.
    pub fn zoom(&mut self, delta_y: f32) {
        self.target_distance = (self.target_distance * (1.0 + delta_y * ZOOM_SPEED))
            .clamp(CAMERA_DISTANCE_MIN, CAMERA_DISTANCE_MAX);
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Ease toward the targets. Call once per frame.
    pub fn update(&mut self, dt_sec: f32) {
        self.yaw = ease_toward(self.yaw, self.target_yaw, dt_sec, CAMERA_TAU_SEC);
        self.pitch = ease_toward(self.pitch, self.target_pitch, dt_sec, CAMERA_TAU_SEC);
        self.distance = ease_toward(self.distance, self.target_distance, dt_sec, CAMERA_TAU_SEC);
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_y, cos_y) = self.yaw.sin_cos();
        let (sin_p, cos_p) = self.pitch.sin_cos();
        CAMERA_FOCUS + Vec3::new(cos_p * sin_y, sin_p, cos_p * cos_y) * self.distance
    }

    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(CAMERA_FOV_Y, self.aspect, CAMERA_NEAR, CAMERA_FAR);
        let view = Mat4::look_at_rh(self.eye(), CAMERA_FOCUS, Vec3::Y);
        proj * view
    }

    /// Compute a world-space ray from canvas backing-store coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn screen_ray(&self, width: f32, height: f32, sx: f32, sy: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p_far: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye();
        let rd = (p_far - ro).normalize();
        (ro, rd)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
