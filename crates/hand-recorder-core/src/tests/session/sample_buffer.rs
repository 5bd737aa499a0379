use crate::{landmark::Landmark, session::SampleBuffer};

/// WHAT: Landmarks are flattened as x, y, z in detection order
/// WHY: Downstream consumers index the buffer by landmark * 3 + axis
#[test]
fn given_two_landmarks_when_appending_then_coordinates_flattened_in_order() {
    // Given: An empty buffer and two landmarks
    let mut buffer = SampleBuffer::new();
    let hand = [Landmark::new(0.1, 0.2, 0.3), Landmark::new(0.4, 0.5, 0.6)];

    // When: Appending the hand
    let added = buffer.append_hand(&hand);

    // Then: Six scalars in x, y, z order
    assert_eq!(added, 6);
    assert_eq!(buffer.as_slice(), &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
}

/// WHAT: Taking the buffer hands off the samples and leaves it empty
/// WHY: Publication transfers ownership; the next window starts fresh
#[test]
fn given_filled_buffer_when_taking_then_buffer_empty() {
    // Given: A buffer with one landmark
    let mut buffer = SampleBuffer::new();
    buffer.append_hand(&[Landmark::new(1.0, 2.0, 3.0)]);

    // When: Taking the samples
    let points = buffer.take();

    // Then: Samples moved out, buffer empty
    assert_eq!(points, vec![1.0, 2.0, 3.0]);
    assert!(buffer.is_empty());
}

/// WHAT: Appending an empty hand adds nothing
/// WHY: Degenerate detections must not corrupt the buffer
#[test]
fn given_empty_hand_when_appending_then_nothing_added() {
    // Given: An empty buffer
    let mut buffer = SampleBuffer::new();

    // When: Appending an empty landmark list
    let added = buffer.append_hand(&[]);

    // Then: Still empty
    assert_eq!(added, 0);
    assert_eq!(buffer.len(), 0);
}
