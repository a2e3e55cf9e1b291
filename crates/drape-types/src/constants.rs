//! Reference configuration and fixed simulation constants.
//!
//! The `REFERENCE_*` values describe the canonical cloth drape: a 30×30
//! sheet released 100 units above a sphere of radius 5.
//!
//! Physical quantities are `f64`. The drape's stopping step is sensitive
//! to rounding, and single precision settles a step late.

/// Grid side length N (particles per row and per column).
pub const REFERENCE_GRID_SIZE: usize = 30;

/// Mass of a single particle.
pub const REFERENCE_MASS: f64 = 0.3;

/// Spring stiffness K shared by structural and shear springs.
pub const REFERENCE_STIFFNESS: f64 = 100.0;

/// Neighbor-velocity friction coefficient.
pub const REFERENCE_FRICTION: f64 = 0.05;

/// Gravitational acceleration vector. The sheet falls along -Z.
pub const REFERENCE_GRAVITY: [f64; 3] = [0.0, 0.0, 10.0];

/// Initial height H of the flat sheet.
pub const REFERENCE_HEIGHT: f64 = 100.0;

/// Integration step.
pub const REFERENCE_DT: f64 = 0.03;

/// Collision sphere radius R.
pub const REFERENCE_SPHERE_RADIUS: f64 = 5.0;

/// Fraction of H at which the default sphere center sits.
pub const SPHERE_HEIGHT_FRACTION: f64 = 0.7;

/// Host timer interval T between ticks (milliseconds).
pub const REFERENCE_TIMER_INTERVAL_MS: u64 = 1;

/// Momentum magnitude at or below which a run that has touched the
/// sphere is considered quiescent.
pub const REFERENCE_MOMENTUM_THRESHOLD: f64 = 100.0;

/// Fixed buffer added to the sphere radius in the collision test.
/// Not configurable.
pub const COLLISION_MARGIN: f64 = 1.0;

/// Rest length of structural (axis-aligned) springs.
pub const STRUCTURAL_REST_LENGTH: f64 = 1.0;

/// Rest length of shear (diagonal) springs.
pub const SHEAR_REST_LENGTH: f64 = std::f64::consts::SQRT_2;

/// Force magnitude mapped to full color saturation by the shading helpers.
pub const FORCE_COLOR_SCALE: f32 = 30.0;
