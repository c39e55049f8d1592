//! Per-session frame processing.
//!
//! [`LungeRepCounter`] owns everything one exercise session mutates: the
//! joint angle histories, the phase machine and the feedback sink. Frames
//! must be delivered one at a time, in order.

use crate::config::Config;
use crate::constants::NO_POSE_MESSAGE;
use crate::feedback::FeedbackSink;
use crate::landmarks::{BodyFrame, PoseResultBundle};
use crate::rep_state::{RepPhase, RepStateMachine};
use crate::tracker::{AngleTracker, TrackedAngles};
use crate::view::{ViewClassifier, ViewMode};
use crate::Result;

/// What happened to one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// The bundle held no pose; the advisory message was sent
    NoPose,
    /// The first pose was measured and fed through the state machine
    Processed {
        view: ViewMode,
        angles: TrackedAngles,
    },
}

/// Counts lunge repetitions for one exercise session
#[derive(Debug)]
pub struct LungeRepCounter<S: FeedbackSink> {
    classifier: ViewClassifier,
    tracker: AngleTracker,
    machine: RepStateMachine,
    view: Option<ViewMode>,
    sink: S,
}

impl<S: FeedbackSink> LungeRepCounter<S> {
    /// Session with default settings.
    pub fn new(sink: S) -> Self {
        Self::build(&Config::default(), sink)
    }

    /// Session configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConfigError`] if the configuration is invalid.
    pub fn with_config(config: &Config, sink: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, sink))
    }

    fn build(config: &Config, sink: S) -> Self {
        Self {
            classifier: ViewClassifier::new(config.view.front_tolerance),
            tracker: AngleTracker::with_history(
                config.smoothing.window_size,
                config.smoothing.split_standing_history,
            ),
            machine: RepStateMachine::new(config.thresholds.clone()),
            view: None,
            sink,
        }
    }

    /// Process one frame of pose detector output.
    ///
    /// A bundle without poses produces the advisory message and leaves all
    /// state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingLandmark`] if the first pose lacks a
    /// consumed landmark. Session state is not modified in that case.
    pub fn process_frame(&mut self, bundle: &PoseResultBundle) -> Result<FrameOutcome> {
        let Some(pose) = bundle.first_pose() else {
            self.sink.send_feedback_message(NO_POSE_MESSAGE);
            return Ok(FrameOutcome::NoPose);
        };

        let frame = BodyFrame::from_pose(pose, bundle.image_width, bundle.image_height)?;

        let view = self.classifier.classify(frame.nose.x, frame.left.shoulder.x, frame.right.shoulder.x);
        self.view = Some(view);

        let angles = self.tracker.update(&frame, view);
        self.machine.step(&angles, &mut self.sink);

        Ok(FrameOutcome::Processed { view, angles })
    }

    #[must_use]
    pub fn phase(&self) -> RepPhase {
        self.machine.phase()
    }

    #[must_use]
    pub fn is_standing(&self) -> bool {
        self.machine.is_standing()
    }

    #[must_use]
    pub fn rep_count(&self) -> u32 {
        self.machine.rep_count()
    }

    /// View of the most recently processed frame
    #[must_use]
    pub fn view_mode(&self) -> Option<ViewMode> {
        self.view
    }

    #[must_use]
    pub fn tracker(&self) -> &AngleTracker {
        &self.tracker
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Clear angle histories and return to the initial phase, keeping the count.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.machine.reset_phase();
        self.view = None;
    }
}
