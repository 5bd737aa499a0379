use crate::OutputHandler;

use serde_json::Value;
use uuid::Uuid;

/// WHAT: A publication replaces the points state and writes one JSON line
/// WHY: Downstream consumers read recorded windows line by line
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_recorded_points_when_publishing_then_json_line_written() {
    // Given: A handler writing to memory
    let mut handler = OutputHandler::new(Vec::new());
    let session_id = Uuid::new_v4();

    // When: Publishing a window's points
    handler
        .publish(Some(session_id), vec![0.25, 0.5, -0.125])
        .await
        .unwrap();

    // Then: The state holds the points and the line carries them
    assert_eq!(handler.points, vec![0.25, 0.5, -0.125]);

    let written = String::from_utf8(handler.writer.clone()).unwrap();
    assert!(written.ends_with('\n'));
    assert_eq!(written.lines().count(), 1);

    let record: Value = serde_json::from_str(written.trim_end()).unwrap();
    assert_eq!(record["session_id"], Value::String(session_id.to_string()));
    assert_eq!(record["points"], serde_json::json!([0.25, 0.5, -0.125]));
}

/// WHAT: A reset publication empties the points state
/// WHY: Reset must clear previously published points
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_published_points_when_reset_published_then_state_cleared() {
    // Given: A handler holding a previous window
    let mut handler = OutputHandler::new(Vec::new());
    handler
        .publish(Some(Uuid::new_v4()), vec![1.0; 63])
        .await
        .unwrap();

    // When: A reset publication arrives
    handler.publish(None, Vec::new()).await.unwrap();

    // Then: The state is empty and the second line has a null session
    assert!(handler.points.is_empty());

    let written = String::from_utf8(handler.writer.clone()).unwrap();
    let last: Value = serde_json::from_str(written.lines().last().unwrap()).unwrap();
    assert_eq!(last["session_id"], Value::Null);
    assert_eq!(last["points"], serde_json::json!([]));
    assert_eq!(written.lines().count(), 2);
}
