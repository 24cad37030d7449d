use glam::Vec3;

/// Scene layout and interaction tuning constants.
///
/// These express intended behavior (radii, time constants, clamp limits)
/// and keep magic numbers out of the code.

// Globe shells, innermost to outermost
pub const WATER_RADIUS: f32 = 7.85;
pub const GLOBE_RADIUS: f32 = 8.0;
pub const MARKER_ALTITUDE: f32 = 8.01; // markers sit just above the surface
pub const ATMOSPHERE_RADIUS: f32 = 8.15;
pub const CLOUDS_RADIUS: f32 = 8.2;

// Sphere tessellation (matches the source art's equirectangular maps)
pub const SPHERE_SEGMENTS: u32 = 90;

// Marker discs
pub const MARKER_RADIUS: f32 = 0.1;
pub const MARKER_HEIGHT: f32 = 0.01;
pub const MARKER_SEGMENTS: u32 = 24;

// Hover interaction
pub const PICK_RADIUS: f32 = 0.45; // ray-sphere radius for picking
pub const HOVER_SCALE: f32 = 2.5; // marker scale when hovered
pub const HOVER_RISE_TAU_SEC: f32 = 0.12;
pub const HOVER_FALL_TAU_SEC: f32 = 0.25;
pub const CARD_OFFSET_PX: f64 = 14.0; // info card offset from the cursor

// Flight path arcs
pub const ARC_SAMPLES: usize = 11; // lerp samples per arc, endpoints included
pub const ARC_BULGE: f32 = 2.0; // half-sine outward bulge at mid-arc
pub const TUBE_SEGMENTS: usize = 50;
pub const TUBE_RADIUS: f32 = 0.02;
pub const TUBE_RADIAL_SEGMENTS: usize = 5;

// Rotation: the globe spins slowly; clouds drift the other way
pub const BASE_ANGULAR_VEL: f32 = 0.006; // radians per second
pub const GLOBE_SPIN_FACTOR: f32 = 5.0;
pub const INITIAL_SPIN: f32 = -0.3 * std::f32::consts::PI;

// Camera
pub const CAMERA_FOV_Y: f32 = std::f32::consts::FRAC_PI_2;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
pub const CAMERA_FOCUS: Vec3 = Vec3::new(0.0, 2.5, 0.0);
pub const CAMERA_INITIAL_EYE: Vec3 = Vec3::new(7.5, 10.0, 7.5);
pub const CAMERA_DISTANCE_MIN: f32 = 9.0;
pub const CAMERA_DISTANCE_MAX: f32 = 40.0;
pub const CAMERA_TAU_SEC: f32 = 0.15; // orbit damping time constant
pub const ORBIT_SPEED: f32 = 0.005; // radians per CSS pixel dragged
pub const ZOOM_SPEED: f32 = 0.001; // distance factor per wheel delta unit
pub const PITCH_LIMIT: f32 = 1.4; // keep the camera away from the poles

// Lighting and palette
pub const AMBIENT_LIGHT: f32 = 0.7;
pub const POINT_LIGHT: f32 = 0.3;
pub const EARTH_TINT: [f32; 3] = [0.533, 0.686, 0.204];
pub const WATER_TINT: [f32; 3] = [0.220, 0.741, 0.973];
pub const CLOUDS_TINT: [f32; 3] = [1.0, 1.0, 1.0];
pub const ATMOSPHERE_TINT: [f32; 3] = [0.0, 0.0, 0.0];
pub const ATMOSPHERE_ALPHA: f32 = 0.45;
pub const CLEAR_COLOR: [f64; 3] = [1.0, 0.8, 0.2];

// Canvas backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Texture assets, served next to index.html
pub const EARTH_MAP_URL: &str = "textures/water.png";
pub const CLOUDS_MAP_URL: &str = "textures/clouds.jpg";
