use crate::constants::{HOVER_FALL_TAU_SEC, HOVER_RISE_TAU_SEC, HOVER_SCALE};

/// Frame-rate independent exponential approach toward `target`.
#[inline]
pub fn ease_toward(current: f32, target: f32, dt_sec: f32, tau_sec: f32) -> f32 {
    let alpha = 1.0 - (-dt_sec / tau_sec).exp();
    current + (target - current) * alpha
}

/// Per-location hover animation state: marker scale and card opacity.
#[derive(Debug, Clone, Copy)]
pub struct HoverAnim {
    pub scale: f32,
    pub opacity: f32,
}

impl Default for HoverAnim {
    fn default() -> Self {
        Self {
            scale: 1.0,
            opacity: 0.0,
        }
    }
}

impl HoverAnim {
    /// Ease toward the hovered targets, or back toward baseline.
    /// Rise is snappier than fall so cards linger briefly.
    pub fn step(&mut self, hovered: bool, dt_sec: f32) {
        let (scale_target, opacity_target) = if hovered {
            (HOVER_SCALE, 1.0)
        } else {
            (1.0, 0.0)
        };
        let tau = if hovered {
            HOVER_RISE_TAU_SEC
        } else {
            HOVER_FALL_TAU_SEC
        };
        self.scale = ease_toward(self.scale, scale_target, dt_sec, tau);
        self.opacity = ease_toward(self.opacity, opacity_target, dt_sec, tau);
    }
}
