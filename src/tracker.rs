//! Smoothed knee and hip angles for both legs.
//!
//! Every frame yields two sets of four angles. The standing set is always
//! measured in the image plane so the upright test behaves the same from any
//! viewing angle. The current set uses the projection picked by the view
//! classifier and drives the kneeling and progress checks.
//!
//! By default both sets feed the same four moving-average series, standing
//! values first, so each series receives two samples per frame. Setting
//! `split_standing_history` gives the standing set its own series.

use crate::filters::{AngleFilter, MovingAverageFilter};
use crate::geometry::{joint_angle, Projection};
use crate::landmarks::{BodyFrame, LegChain};
use crate::view::ViewMode;

/// Tracked joints, in the order their series are updated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    LeftKnee,
    LeftHip,
    RightKnee,
    RightHip,
}

impl Joint {
    pub const ALL: [Joint; 4] = [Joint::LeftKnee, Joint::LeftHip, Joint::RightKnee, Joint::RightHip];

    fn slot(self) -> usize {
        match self {
            Joint::LeftKnee => 0,
            Joint::LeftHip => 1,
            Joint::RightKnee => 2,
            Joint::RightHip => 3,
        }
    }
}

/// Knee and hip angles of both legs, in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JointAngles {
    pub left_knee: f64,
    pub left_hip: f64,
    pub right_knee: f64,
    pub right_hip: f64,
}

impl JointAngles {
    /// Raw angles of one frame.
    #[must_use]
    pub fn measure(frame: &BodyFrame, projection: Projection) -> Self {
        let (left_knee, left_hip) = leg_angles(&frame.left, projection);
        let (right_knee, right_hip) = leg_angles(&frame.right, projection);
        Self {
            left_knee,
            left_hip,
            right_knee,
            right_hip,
        }
    }

    #[must_use]
    pub fn get(&self, joint: Joint) -> f64 {
        match joint {
            Joint::LeftKnee => self.left_knee,
            Joint::LeftHip => self.left_hip,
            Joint::RightKnee => self.right_knee,
            Joint::RightHip => self.right_hip,
        }
    }

    /// The more flexed of the two hips
    #[must_use]
    pub fn min_hip(&self) -> f64 {
        self.left_hip.min(self.right_hip)
    }
}

/// Knee angle is hip-knee-ankle, hip angle is shoulder-hip-knee.
fn leg_angles(leg: &LegChain, projection: Projection) -> (f64, f64) {
    (
        joint_angle(&leg.hip, &leg.knee, &leg.ankle, projection),
        joint_angle(&leg.shoulder, &leg.hip, &leg.knee, projection),
    )
}

/// Both smoothed angle sets produced for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackedAngles {
    /// Image-plane angles used for the upright test
    pub standing: JointAngles,
    /// View-dependent angles used for kneeling and progress
    pub current: JointAngles,
}

#[derive(Debug, Clone)]
struct JointSeries {
    filters: [MovingAverageFilter; 4],
}

impl JointSeries {
    fn new(window_size: usize) -> Self {
        Self {
            filters: std::array::from_fn(|_| MovingAverageFilter::new(window_size)),
        }
    }

    fn smooth(&mut self, raw: &JointAngles) -> JointAngles {
        let mut smoothed = [0.0; 4];
        for joint in Joint::ALL {
            smoothed[joint.slot()] = self.filters[joint.slot()].apply(raw.get(joint));
        }
        JointAngles {
            left_knee: smoothed[0],
            left_hip: smoothed[1],
            right_knee: smoothed[2],
            right_hip: smoothed[3],
        }
    }

    fn len(&self, joint: Joint) -> usize {
        self.filters[joint.slot()].len()
    }

    fn reset(&mut self) {
        self.filters.iter_mut().for_each(|filter| filter.reset());
    }
}

/// Owns the per-joint angle histories of one session
#[derive(Debug, Clone)]
pub struct AngleTracker {
    series: JointSeries,
    standing_series: Option<JointSeries>,
}

impl AngleTracker {
    /// Tracker whose standing and current measurements share one history per joint.
    ///
    /// # Panics
    ///
    /// Panics if `window_size` is zero.
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        Self::with_history(window_size, false)
    }

    /// # Panics
    ///
    /// Panics if `window_size` is zero.
    #[must_use]
    pub fn with_history(window_size: usize, split_standing_history: bool) -> Self {
        Self {
            series: JointSeries::new(window_size),
            standing_series: split_standing_history.then(|| JointSeries::new(window_size)),
        }
    }

    /// Measure and smooth one frame.
    pub fn update(&mut self, frame: &BodyFrame, view: ViewMode) -> TrackedAngles {
        let standing_raw = JointAngles::measure(frame, Projection::Planar);
        let current_raw = JointAngles::measure(frame, view.projection());

        let standing = match self.standing_series.as_mut() {
            Some(series) => series.smooth(&standing_raw),
            None => self.series.smooth(&standing_raw),
        };
        let current = self.series.smooth(&current_raw);

        TrackedAngles { standing, current }
    }

    /// Samples held in the history feeding the current angle of `joint`
    #[must_use]
    pub fn history_len(&self, joint: Joint) -> usize {
        self.series.len(joint)
    }

    /// Samples held in the history feeding the standing angle of `joint`
    #[must_use]
    pub fn standing_history_len(&self, joint: Joint) -> usize {
        self.standing_series
            .as_ref()
            .map_or_else(|| self.series.len(joint), |series| series.len(joint))
    }

    #[must_use]
    pub fn is_split(&self) -> bool {
        self.standing_series.is_some()
    }

    pub fn reset(&mut self) {
        self.series.reset();
        if let Some(series) = self.standing_series.as_mut() {
            series.reset();
        }
    }
}
