//! Lunge repetition counting from per-frame 3D body landmarks.
//!
//! An upstream pose detector delivers one [`PoseResultBundle`] per video
//! frame. This crate turns that stream into rep counts and progress
//! checkpoints:
//! 1. The camera view is classified from nose and shoulder positions
//! 2. Knee and hip angles of both legs are measured, in 2D or 3D depending on
//!    the view, and smoothed with a moving average
//! 3. A phase machine tracks standing and kneeling and notifies a
//!    [`FeedbackSink`] on every edge
//!
//! # Examples
//!
//! ```
//! use lunge_rep_counter::{EventLog, LungeRepCounter, PoseResultBundle};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut counter = LungeRepCounter::new(EventLog::new());
//!
//! // A frame in which nobody was detected
//! let empty = PoseResultBundle {
//!     poses: Vec::new(),
//!     image_width: 640,
//!     image_height: 480,
//! };
//! counter.process_frame(&empty)?;
//!
//! assert_eq!(counter.rep_count(), 0);
//! assert_eq!(counter.sink().events().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Loading a configuration
//!
//! ```no_run
//! use lunge_rep_counter::{config::Config, LogSink, LungeRepCounter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_file("lunge.yaml")?;
//! let counter = LungeRepCounter::with_config(&config, LogSink::new())?;
//! # let _ = counter;
//! # Ok(())
//! # }
//! ```

/// Error types and result handling
pub mod error;

/// Constants used throughout the crate
pub mod constants;

/// Configuration management
pub mod config;

/// Joint angle geometry
pub mod geometry;

/// Signal filtering algorithms for smoothing joint angles
pub mod filters;

/// Pose detector input types
pub mod landmarks;

/// Camera view classification
pub mod view;

/// Per-joint angle histories
pub mod tracker;

/// Rep phase state machine
pub mod rep_state;

/// Outbound notifications
pub mod feedback;

/// Per-session frame processing
pub mod session;

/// Replay of recorded landmark streams
pub mod recording;

pub use error::{Error, Result};
pub use feedback::{EventLog, FeedbackEvent, FeedbackSink, LogSink};
pub use landmarks::{Landmark, Pose, PoseResultBundle};
pub use rep_state::RepPhase;
pub use session::{FrameOutcome, LungeRepCounter};
pub use view::ViewMode;
