//! End-to-end rep counting over synthetic landmark streams


use lunge_rep_counter::config::Config;
use lunge_rep_counter::constants::NO_POSE_MESSAGE;
use lunge_rep_counter::tracker::Joint;
use lunge_rep_counter::{EventLog, FeedbackEvent, FrameOutcome, LungeRepCounter, RepPhase, ViewMode};
use test_helpers::{
    bundle, empty_bundle, left_lunge_frame, pose, pose_with_nose, right_lunge_frame, standing_frame, LegAngles,
    UPRIGHT,
};

fn feed(counter: &mut LungeRepCounter<EventLog>, frame: &lunge_rep_counter::PoseResultBundle, times: usize) {
    for _ in 0..times {
        counter.process_frame(frame).unwrap();
    }
}

#[test]
fn test_first_standing_does_not_count() {
    let mut counter = LungeRepCounter::new(EventLog::new());
    feed(&mut counter, &standing_frame(), 20);

    assert_eq!(counter.phase(), RepPhase::Standing);
    assert!(counter.is_standing());
    assert_eq!(counter.rep_count(), 0);
    assert!(counter.sink().events().is_empty());
}

#[test]
fn test_single_left_leg_rep() {
    let mut counter = LungeRepCounter::new(EventLog::new());
    feed(&mut counter, &standing_frame(), 20);

    feed(&mut counter, &left_lunge_frame(), 15);
    assert_eq!(counter.phase(), RepPhase::Kneeling);
    assert!(!counter.is_standing());
    assert_eq!(counter.sink().progress_updates(), vec![0.5]);

    feed(&mut counter, &standing_frame(), 20);
    assert_eq!(counter.phase(), RepPhase::Standing);
    assert_eq!(counter.rep_count(), 1);
    assert_eq!(
        counter.sink().events(),
        &[
            FeedbackEvent::Progress(0.5),
            FeedbackEvent::RepCompleted,
            FeedbackEvent::Progress(0.0),
        ]
    );
}

#[test]
fn test_kneel_is_detected_once_smoothed_knee_drops() {
    let mut counter = LungeRepCounter::new(EventLog::new());
    feed(&mut counter, &standing_frame(), 20);

    // Two samples per frame per joint: the knee average falls 9 degrees a
    // frame and crosses 110 on the seventh lunge frame.
    feed(&mut counter, &left_lunge_frame(), 6);
    assert_eq!(counter.phase(), RepPhase::Standing);
    assert!(counter.is_standing());

    feed(&mut counter, &left_lunge_frame(), 1);
    assert_eq!(counter.phase(), RepPhase::Kneeling);
}

#[test]
fn test_right_leg_rep() {
    let mut counter = LungeRepCounter::new(EventLog::new());
    feed(&mut counter, &standing_frame(), 20);
    feed(&mut counter, &right_lunge_frame(), 15);
    assert_eq!(counter.phase(), RepPhase::Kneeling);

    feed(&mut counter, &standing_frame(), 20);
    assert_eq!(counter.rep_count(), 1);
}

#[test]
fn test_repeated_reps() {
    let mut counter = LungeRepCounter::new(EventLog::new());
    feed(&mut counter, &standing_frame(), 20);

    for rep in 1..=3 {
        let lunge = if rep % 2 == 0 { right_lunge_frame() } else { left_lunge_frame() };
        feed(&mut counter, &lunge, 15);
        feed(&mut counter, &standing_frame(), 20);
        assert_eq!(counter.rep_count(), rep);
    }

    assert_eq!(counter.sink().rep_count(), 3);
    assert_eq!(
        counter.sink().progress_updates(),
        vec![0.5, 0.0, 0.5, 0.0, 0.5, 0.0]
    );
}

#[test]
fn test_holding_standing_is_edge_triggered() {
    let mut counter = LungeRepCounter::new(EventLog::new());
    feed(&mut counter, &standing_frame(), 20);
    feed(&mut counter, &left_lunge_frame(), 15);
    feed(&mut counter, &standing_frame(), 20);
    counter.sink_mut().clear();

    feed(&mut counter, &standing_frame(), 100);

    assert_eq!(counter.rep_count(), 1);
    assert!(counter.sink().events().is_empty());
}

#[test]
fn test_no_pose_frame_is_skipped() {
    let mut counter = LungeRepCounter::new(EventLog::new());
    feed(&mut counter, &standing_frame(), 20);
    feed(&mut counter, &left_lunge_frame(), 15);
    counter.sink_mut().clear();

    let lengths: Vec<usize> = Joint::ALL.iter().map(|&j| counter.tracker().history_len(j)).collect();
    let outcome = counter.process_frame(&empty_bundle()).unwrap();

    assert_eq!(outcome, FrameOutcome::NoPose);
    assert_eq!(
        counter.sink().events(),
        &[FeedbackEvent::Message(NO_POSE_MESSAGE.to_string())]
    );
    assert_eq!(counter.rep_count(), 0);
    assert_eq!(counter.phase(), RepPhase::Kneeling);
    let after: Vec<usize> = Joint::ALL.iter().map(|&j| counter.tracker().history_len(j)).collect();
    assert_eq!(lengths, after);
}

#[test]
fn test_no_pose_frame_does_not_touch_histories() {
    let mut reference = LungeRepCounter::new(EventLog::new());
    let mut interrupted = LungeRepCounter::new(EventLog::new());

    // Histories are only partly filled, so any extra sample would move the mean
    for counter in [&mut reference, &mut interrupted] {
        feed(counter, &standing_frame(), 3);
    }
    interrupted.process_frame(&empty_bundle()).unwrap();

    let stream: Vec<_> = std::iter::repeat_with(left_lunge_frame)
        .take(8)
        .chain(std::iter::repeat_with(standing_frame).take(12))
        .collect();
    for frame in &stream {
        let expected = reference.process_frame(frame).unwrap();
        let actual = interrupted.process_frame(frame).unwrap();

        let (
            FrameOutcome::Processed { angles: expected, .. },
            FrameOutcome::Processed { angles: actual, .. },
        ) = (expected, actual)
        else {
            panic!("expected processed frames");
        };
        for joint in Joint::ALL {
            assert_eq!(expected.current.get(joint).to_bits(), actual.current.get(joint).to_bits());
            assert_eq!(expected.standing.get(joint).to_bits(), actual.standing.get(joint).to_bits());
        }
    }

    assert_eq!(reference.rep_count(), interrupted.rep_count());
    assert_eq!(reference.phase(), interrupted.phase());
}

#[test]
fn test_squat_does_not_count() {
    let squat = LegAngles { knee: 90.0, hip: 95.0 };
    let mut counter = LungeRepCounter::new(EventLog::new());
    feed(&mut counter, &standing_frame(), 20);
    feed(&mut counter, &bundle(pose(squat, squat)), 20);
    feed(&mut counter, &standing_frame(), 20);

    assert_eq!(counter.rep_count(), 0);
    assert_eq!(counter.phase(), RepPhase::Standing);
}

#[test]
fn test_processed_frame_reports_angles() {
    let mut counter = LungeRepCounter::new(EventLog::new());
    let left = LegAngles { knee: 95.0, hip: 150.0 };
    let outcome = counter.process_frame(&bundle(pose(left, UPRIGHT))).unwrap();

    let FrameOutcome::Processed { view, angles } = outcome else {
        panic!("expected a processed frame");
    };
    assert_eq!(view, ViewMode::Front);
    assert!((angles.current.left_knee - 95.0).abs() < 1e-3);
    assert!((angles.current.left_hip - 150.0).abs() < 1e-3);
    assert!((angles.standing.right_knee - 170.0).abs() < 1e-3);
}

#[test]
fn test_view_follows_nose() {
    let mut counter = LungeRepCounter::new(EventLog::new());

    counter.process_frame(&bundle(pose_with_nose(0.52, UPRIGHT, UPRIGHT))).unwrap();
    assert_eq!(counter.view_mode(), Some(ViewMode::Angled));

    counter.process_frame(&bundle(pose_with_nose(0.7, UPRIGHT, UPRIGHT))).unwrap();
    assert_eq!(counter.view_mode(), Some(ViewMode::Side));

    counter.process_frame(&standing_frame()).unwrap();
    assert_eq!(counter.view_mode(), Some(ViewMode::Front));
}

#[test]
fn test_split_history_counts_reps() {
    let mut config = Config::default();
    config.smoothing.split_standing_history = true;
    let mut counter = LungeRepCounter::with_config(&config, EventLog::new()).unwrap();

    feed(&mut counter, &standing_frame(), 20);
    feed(&mut counter, &left_lunge_frame(), 25);
    assert_eq!(counter.phase(), RepPhase::Kneeling);
    assert_eq!(counter.tracker().history_len(Joint::LeftKnee), 20);

    feed(&mut counter, &standing_frame(), 25);
    assert_eq!(counter.rep_count(), 1);
}

#[test]
fn test_incomplete_pose_is_an_error() {
    let mut counter = LungeRepCounter::new(EventLog::new());
    let mut short = pose(UPRIGHT, UPRIGHT);
    short.landmarks.truncate(12);

    let err = counter.process_frame(&bundle(short)).unwrap_err();
    assert!(err.to_string().contains("Missing landmark"));
    assert_eq!(counter.phase(), RepPhase::Initial);
    assert_eq!(counter.tracker().history_len(Joint::LeftHip), 0);
}
