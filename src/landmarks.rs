//! Per-frame pose landmark input and extraction of the joints the counter uses.

use crate::constants::{
    LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, NOSE, RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE,
    RIGHT_SHOULDER,
};
use crate::geometry::Position;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single body landmark in normalized image coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, 0-1 across the image width
    pub x: f32,
    /// Vertical position, 0-1 down the image height
    pub y: f32,
    /// Relative depth, on roughly the same scale as `x`
    pub z: f32,
}

impl Landmark {
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// All landmarks detected for one person
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub landmarks: Vec<Landmark>,
}

/// Everything the pose detector reports for one video frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseResultBundle {
    /// Detected poses, possibly none
    #[serde(default)]
    pub poses: Vec<Pose>,
    /// Source image width in pixels
    pub image_width: u32,
    /// Source image height in pixels
    pub image_height: u32,
}

impl PoseResultBundle {
    /// The pose the counter tracks. Additional people are ignored.
    #[must_use]
    pub fn first_pose(&self) -> Option<&Pose> {
        self.poses.first()
    }
}

/// Shoulder, hip, knee and ankle of one side of the body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegChain {
    pub shoulder: Position,
    pub hip: Position,
    pub knee: Position,
    pub ankle: Position,
}

/// The subset of a pose consumed per frame, scaled to pixel units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFrame {
    pub nose: Position,
    pub left: LegChain,
    pub right: LegChain,
}

impl BodyFrame {
    /// Scale the consumed landmarks of `pose` by the image dimensions.
    ///
    /// `x` and `z` are multiplied by the width and `y` by the height so all
    /// three axes share comparable units.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingLandmark`] if the pose is shorter than the
    /// skeleton layout requires.
    pub fn from_pose(pose: &Pose, image_width: u32, image_height: u32) -> Result<Self> {
        let scale = Scale {
            width: f64::from(image_width),
            height: f64::from(image_height),
        };
        let at = |index: usize| -> Result<Position> {
            pose.landmarks
                .get(index)
                .map(|landmark| scale.apply(landmark))
                .ok_or(Error::MissingLandmark {
                    index,
                    available: pose.landmarks.len(),
                })
        };

        Ok(Self {
            nose: at(NOSE)?,
            left: LegChain {
                shoulder: at(LEFT_SHOULDER)?,
                hip: at(LEFT_HIP)?,
                knee: at(LEFT_KNEE)?,
                ankle: at(LEFT_ANKLE)?,
            },
            right: LegChain {
                shoulder: at(RIGHT_SHOULDER)?,
                hip: at(RIGHT_HIP)?,
                knee: at(RIGHT_KNEE)?,
                ankle: at(RIGHT_ANKLE)?,
            },
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Scale {
    width: f64,
    height: f64,
}

impl Scale {
    fn apply(self, landmark: &Landmark) -> Position {
        Position::new(
            f64::from(landmark.x) * self.width,
            f64::from(landmark.y) * self.height,
            f64::from(landmark.z) * self.width,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose_with(len: usize) -> Pose {
        Pose {
            landmarks: (0..len)
                .map(|i| Landmark::new(i as f32 / 100.0, 0.5, 0.25))
                .collect(),
        }
    }

    #[test]
    fn test_scaling_uses_width_for_depth() {
        let frame = BodyFrame::from_pose(&pose_with(33), 640, 480).unwrap();

        assert!((frame.nose.x - 0.0).abs() < 1e-9);
        assert!((frame.nose.y - 240.0).abs() < 1e-9);
        assert!((frame.nose.z - 160.0).abs() < 1e-9);
        assert!((frame.left.hip.x - 0.23 * 640.0).abs() < 1e-3);
        assert!((frame.right.ankle.x - 0.28 * 640.0).abs() < 1e-3);
    }

    #[test]
    fn test_short_pose_is_rejected() {
        let err = BodyFrame::from_pose(&pose_with(20), 640, 480).unwrap_err();
        match err {
            Error::MissingLandmark { available, .. } => assert_eq!(available, 20),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_first_pose_only() {
        let bundle = PoseResultBundle {
            poses: vec![pose_with(33), pose_with(5)],
            image_width: 100,
            image_height: 100,
        };
        assert_eq!(bundle.first_pose().map(|p| p.landmarks.len()), Some(33));
        assert!(PoseResultBundle::default().first_pose().is_none());
    }
}
