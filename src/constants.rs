//! Constants used throughout the crate

/// Pose landmark indices as numbered by the upstream 33-point body model
pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// Default moving average window per joint series
pub const DEFAULT_SMOOTHING_WINDOW: usize = 20;

/// Maximum nose-to-shoulder-midpoint distance (pixels) for a front view
pub const DEFAULT_FRONT_VIEW_TOLERANCE: f64 = 2.0;

/// Knee and hip angles (degrees) of an upright leg
pub const STANDING_ANGLE_MIN: f64 = 140.0;
pub const STANDING_ANGLE_MAX: f64 = 180.0;

/// Knee angle (degrees) of the leading leg in a lunge
pub const KNEELING_ANGLE_MIN: f64 = 50.0;
pub const KNEELING_ANGLE_MAX: f64 = 110.0;

/// Hip angle window signalling the subject has almost stood back up
pub const RISING_HIP_MIN: f64 = 130.0;
pub const RISING_HIP_MAX: f64 = 138.0;

/// Hip angle window signalling the start of the descent
pub const DESCENT_HIP_MIN: f64 = 115.0;
pub const DESCENT_HIP_MAX: f64 = 120.0;

/// Progress checkpoints emitted to the feedback sink
pub const PROGRESS_RESET: f32 = 0.0;
pub const PROGRESS_DESCENT: f32 = 0.25;
pub const PROGRESS_KNEELING: f32 = 0.5;
pub const PROGRESS_RISING: f32 = 1.0;

/// Angle reported for a joint whose arm vectors have collapsed to a point
pub const DEGENERATE_ANGLE: f64 = 0.0;

/// Advisory sent when a frame carries no pose
pub const NO_POSE_MESSAGE: &str = "No pose detected. Please adjust your position.";

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-10;
