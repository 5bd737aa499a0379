use crate::{
    session::{ArmState, RecordingSession, SessionConfig},
    tests::support::{FULL_HAND_LANDMARKS, empty_frame, frame_with_hands, hand},
};

use tokio::time::Instant;

/// WHAT: Frames delivered while idle never grow the buffer
/// WHY: Sampling is only allowed inside an armed window
#[test]
fn given_idle_session_when_frames_arrive_then_buffer_unchanged() {
    // Given: A fresh, idle session
    let mut session = RecordingSession::new(SessionConfig::default());

    // When: Several frames with a full hand arrive
    for _ in 0..5 {
        let appended = session.record_frame(&frame_with_hands(vec![hand(FULL_HAND_LANDMARKS)]));

        // Then: Nothing appended after each frame
        assert_eq!(appended, 0);
        assert_eq!(session.buffer().len(), 0);
    }
}

/// WHAT: Armed frames grow the buffer by 3 x landmarks of the first hand only
/// WHY: Only one hand is sampled per frame even if more are reported
#[test]
fn given_armed_session_when_frame_has_two_hands_then_only_first_sampled() {
    // Given: An armed session
    let mut session = RecordingSession::new(SessionConfig::default());
    session.arm(Instant::now());

    // When: A frame with a 21-landmark hand and a 5-landmark hand arrives
    let appended = session.record_frame(&frame_with_hands(vec![
        hand(FULL_HAND_LANDMARKS),
        hand(5),
    ]));

    // Then: 63 scalars from the first hand
    assert_eq!(appended, 3 * FULL_HAND_LANDMARKS);
    assert_eq!(session.buffer().len(), 3 * FULL_HAND_LANDMARKS);
}

/// WHAT: Armed frames with no hands leave the buffer unchanged
/// WHY: Absent input degrades to a no-op instead of an error
#[test]
fn given_armed_session_when_frame_has_no_hands_then_buffer_unchanged() {
    // Given: An armed session with one sampled frame
    let mut session = RecordingSession::new(SessionConfig::default());
    session.arm(Instant::now());
    session.record_frame(&frame_with_hands(vec![hand(FULL_HAND_LANDMARKS)]));

    // When: An empty frame arrives
    let appended = session.record_frame(&empty_frame());

    // Then: Length unchanged
    assert_eq!(appended, 0);
    assert_eq!(session.buffer().len(), 3 * FULL_HAND_LANDMARKS);
}

/// WHAT: Reset lands in Idle with an empty buffer and full countdown
/// WHY: Reset must always produce a clean session regardless of prior state
#[test]
fn given_armed_session_with_samples_when_reset_then_idle_empty_and_full_countdown() {
    // Given: An armed session with samples and a partly elapsed countdown
    let mut session = RecordingSession::new(SessionConfig::default());
    session.arm(Instant::now());
    session.record_frame(&frame_with_hands(vec![hand(FULL_HAND_LANDMARKS)]));
    for _ in 0..3 {
        session.tick_countdown();
    }

    // When: Resetting
    session.reset();

    // Then: Idle, empty, countdown back at 5 and running
    assert!(!session.is_armed());
    assert_eq!(session.arm_state(), ArmState::Idle);
    assert!(session.buffer().is_empty());
    assert_eq!(session.remaining_seconds(), 5);
    assert!(session.countdown_running());
}

/// WHAT: Disarming hands off the window's samples exactly once
/// WHY: Each armed window publishes once; a second disarm has nothing to give
#[test]
#[allow(clippy::unwrap_used)]
fn given_armed_session_when_disarming_twice_then_samples_returned_once() {
    // Given: An armed session with two sampled frames
    let mut session = RecordingSession::new(SessionConfig::default());
    let armed_id = session.arm(Instant::now());
    session.record_frame(&frame_with_hands(vec![hand(FULL_HAND_LANDMARKS)]));
    session.record_frame(&frame_with_hands(vec![hand(FULL_HAND_LANDMARKS)]));

    // When: Disarming twice
    let first = session.disarm();
    let second = session.disarm();

    // Then: First disarm returns all samples for the same session; second is None
    let (session_id, points) = first.unwrap();
    assert_eq!(session_id, armed_id);
    assert_eq!(points.len(), 2 * 3 * FULL_HAND_LANDMARKS);
    assert!(second.is_none());
    assert!(session.buffer().is_empty());
    assert!(!session.is_armed());
}

/// WHAT: Re-arming keeps the session ID and the samples so far
/// WHY: A second record press restarts the window, it does not start a new one
#[test]
fn given_armed_session_when_arming_again_then_same_session_and_buffer_kept() {
    // Given: An armed session with one sampled frame
    let mut session = RecordingSession::new(SessionConfig::default());
    let first_id = session.arm(Instant::now());
    session.record_frame(&frame_with_hands(vec![hand(FULL_HAND_LANDMARKS)]));

    // When: Arming again
    let second_id = session.arm(Instant::now());

    // Then: Same window, samples kept
    assert_eq!(first_id, second_id);
    assert_eq!(session.buffer().len(), 3 * FULL_HAND_LANDMARKS);
    assert!(session.is_armed());
}
