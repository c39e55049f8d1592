//! Camera-to-subject orientation from head and shoulder positions.
//!
//! When the subject faces the camera the depth estimate is the least
//! reliable axis, so angles are measured in the image plane. Once the body
//! turns away, depth carries real information and full 3D angles are used.

use crate::constants::DEFAULT_FRONT_VIEW_TOLERANCE;
use crate::geometry::Projection;
use std::fmt;

/// Camera viewing angle relative to the subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Facing the camera
    Front,
    /// Turned partly away, nose still between the shoulders
    Angled,
    /// Profile, nose outside the shoulders
    Side,
}

impl ViewMode {
    /// Geometry used for the view-dependent angle measurements
    #[must_use]
    pub fn projection(self) -> Projection {
        match self {
            Self::Front => Projection::Planar,
            Self::Angled | Self::Side => Projection::Spatial,
        }
    }

    /// Human readable position label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Front => "FRONT VIEW",
            Self::Angled => "ANGLE VIEW",
            Self::Side => "SIDE VIEW",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies each frame from nose and shoulder x-coordinates
#[derive(Debug, Clone, Copy)]
pub struct ViewClassifier {
    front_tolerance: f64,
}

impl Default for ViewClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_FRONT_VIEW_TOLERANCE)
    }
}

impl ViewClassifier {
    /// `front_tolerance` is the largest nose-to-shoulder-midpoint distance,
    /// in the same units as the coordinates, still counted as a front view.
    #[must_use]
    pub fn new(front_tolerance: f64) -> Self {
        Self { front_tolerance }
    }

    #[must_use]
    pub fn classify(&self, nose_x: f64, left_shoulder_x: f64, right_shoulder_x: f64) -> ViewMode {
        let low = left_shoulder_x.min(right_shoulder_x);
        let high = left_shoulder_x.max(right_shoulder_x);

        if !(low..=high).contains(&nose_x) {
            return ViewMode::Side;
        }

        let midpoint = (left_shoulder_x + right_shoulder_x) / 2.0;
        if (midpoint - nose_x).abs() <= self.front_tolerance {
            ViewMode::Front
        } else {
            ViewMode::Angled
        }
    }
}
