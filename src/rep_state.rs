//! Phase tracking and rep counting for the lunge.
//!
//! A rep is one standing, kneeling, standing cycle. Progress checkpoints are
//! emitted on phase edges only, so holding a position never repeats them.

use crate::config::ThresholdConfig;
use crate::constants::{PROGRESS_DESCENT, PROGRESS_KNEELING, PROGRESS_RESET, PROGRESS_RISING};
use crate::feedback::FeedbackSink;
use crate::tracker::TrackedAngles;
use log::debug;

/// Movement phase of the current rep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepPhase {
    /// No upright pose seen yet
    #[default]
    Initial,
    Standing,
    Kneeling,
}

/// Leg that qualified as the kneeling leg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    Left,
    Right,
}

/// Edge-triggered state machine over smoothed joint angles
#[derive(Debug, Clone)]
pub struct RepStateMachine {
    thresholds: ThresholdConfig,
    phase: RepPhase,
    standing: bool,
    reps: u32,
}

impl Default for RepStateMachine {
    fn default() -> Self {
        Self::new(ThresholdConfig::default())
    }
}

impl RepStateMachine {
    #[must_use]
    pub fn new(thresholds: ThresholdConfig) -> Self {
        Self {
            thresholds,
            phase: RepPhase::Initial,
            standing: false,
            reps: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> RepPhase {
        self.phase
    }

    /// Whether the last standing edge has not yet been followed by a kneel
    #[must_use]
    pub fn is_standing(&self) -> bool {
        self.standing
    }

    #[must_use]
    pub fn rep_count(&self) -> u32 {
        self.reps
    }

    #[must_use]
    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    /// Back to the pre-first-frame state. The rep count is kept.
    pub fn reset_phase(&mut self) {
        self.phase = RepPhase::Initial;
        self.standing = false;
    }

    /// Both the knee and the hip are extended
    #[must_use]
    pub fn is_upright(&self, knee: f64, hip: f64) -> bool {
        self.thresholds.standing.contains(knee) && self.thresholds.standing.contains(hip)
    }

    /// Leg whose knee is bent into the lunge while its hip stays open.
    /// The left leg is checked first.
    #[must_use]
    pub fn kneeling_leg(&self, angles: &TrackedAngles) -> Option<Leg> {
        let current = &angles.current;
        let bent = |knee: f64, hip: f64| {
            self.thresholds.kneeling.contains(knee) && self.thresholds.standing.contains(hip)
        };

        if bent(current.left_knee, current.left_hip) {
            Some(Leg::Left)
        } else if bent(current.right_knee, current.right_hip) {
            Some(Leg::Right)
        } else {
            None
        }
    }

    /// Advance by one frame of smoothed angles, notifying `sink` on edges.
    pub fn step<S: FeedbackSink + ?Sized>(&mut self, angles: &TrackedAngles, sink: &mut S) {
        let hip = angles.current.min_hip();

        if !self.standing && self.phase == RepPhase::Kneeling && self.thresholds.rising_hip.contains(hip) {
            sink.send_progress_update(PROGRESS_RISING);
        }

        let standing = &angles.standing;
        if self.is_upright(standing.left_knee, standing.left_hip)
            && self.is_upright(standing.right_knee, standing.right_hip)
        {
            if !self.standing {
                if self.phase == RepPhase::Kneeling {
                    self.reps += 1;
                    sink.increment_rep_count();
                    sink.send_progress_update(PROGRESS_RESET);
                }
                self.phase = RepPhase::Standing;
                self.standing = true;
                debug!("User is standing (reps: {})", self.reps);
            }
        } else if self.standing {
            if self.thresholds.descent_hip.contains(hip) {
                sink.send_progress_update(PROGRESS_DESCENT);
            }

            if let Some(leg) = self.kneeling_leg(angles) {
                sink.send_progress_update(PROGRESS_KNEELING);
                self.standing = false;
                self.phase = RepPhase::Kneeling;
                debug!("User is kneeling with leg: {leg:?}");
            }
        }
    }
}
