//! Recorded landmark streams and offline replay.
//!
//! A recording is a YAML document holding the pose detector output of a
//! session, one bundle per frame:
//!
//! ```yaml
//! frames:
//!   - image_width: 640
//!     image_height: 480
//!     poses:
//!       - landmarks:
//!           - { x: 0.51, y: 0.12, z: -0.30 }
//!           # ... 33 landmarks
//!   - image_width: 640
//!     image_height: 480
//!     poses: []
//! ```

use crate::feedback::FeedbackSink;
use crate::landmarks::PoseResultBundle;
use crate::session::{FrameOutcome, LungeRepCounter};
use crate::{Error, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pose detector output for a sequence of frames
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    #[serde(default)]
    pub frames: Vec<PoseResultBundle>,
}

/// Frame tallies from one replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Frames measured and fed to the state machine
    pub processed: usize,
    /// Frames without any pose
    pub no_pose: usize,
    /// Frames skipped because the pose was incomplete
    pub rejected: usize,
}

impl Recording {
    /// Load a recording from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a recording from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::RecordingError(format!("Failed to parse recording: {e}")))
    }

    /// Save the recording to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::RecordingError(format!("Failed to serialize recording: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Feed every frame to `counter` in order.
    ///
    /// Incomplete poses are logged and skipped so one bad frame does not end
    /// the replay.
    pub fn replay<S: FeedbackSink>(&self, counter: &mut LungeRepCounter<S>) -> ReplaySummary {
        let mut summary = ReplaySummary::default();

        for (index, bundle) in self.frames.iter().enumerate() {
            match counter.process_frame(bundle) {
                Ok(FrameOutcome::Processed { view, angles }) => {
                    summary.processed += 1;
                    debug!(
                        "Frame {index}: {view}, knees {:.1}/{:.1}, hips {:.1}/{:.1}",
                        angles.current.left_knee,
                        angles.current.right_knee,
                        angles.current.left_hip,
                        angles.current.right_hip
                    );
                }
                Ok(FrameOutcome::NoPose) => summary.no_pose += 1,
                Err(e) => {
                    warn!("Skipping frame {index}: {e}");
                    summary.rejected += 1;
                }
            }
        }

        info!(
            "Replayed {} frames ({} without pose, {} rejected)",
            self.frames.len(),
            summary.no_pose,
            summary.rejected
        );
        summary
    }
}
