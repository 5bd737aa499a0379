use crate::session::Countdown;

const START: u32 = 5;

/// WHAT: First tick after a restart keeps the start value on display
/// WHY: The display shows the pending count before decrementing it
#[test]
fn given_restarted_countdown_when_first_tick_then_display_unchanged() {
    // Given: A countdown restarted at 5
    let mut countdown = Countdown::new(START);
    countdown.restart(START);

    // When: One period passes
    let tick = countdown.tick();

    // Then: Nothing new to show, still running
    assert_eq!(tick.changed, None);
    assert!(!tick.finished);
    assert_eq!(countdown.displayed(), START);
}

/// WHAT: Display steps down by one per tick and stops at zero
/// WHY: The countdown must never go negative or keep ticking after zero
#[test]
fn given_running_countdown_when_ticking_to_end_then_decreases_by_one_and_finishes() {
    // Given: A countdown restarted at 5
    let mut countdown = Countdown::new(START);
    countdown.restart(START);

    // When: Ticking until it reports finished
    let mut shown = Vec::new();
    let mut ticks = 0;
    loop {
        let tick = countdown.tick();
        ticks += 1;
        if let Some(value) = tick.changed {
            shown.push(value);
        }
        if tick.finished {
            break;
        }
        assert!(ticks < 100, "countdown never finished");
    }

    // Then: 4, 3, 2, 1, 0 after the unchanged first tick
    assert_eq!(shown, vec![4, 3, 2, 1, 0]);
    assert_eq!(ticks, 6);
    assert_eq!(countdown.displayed(), 0);
    assert!(!countdown.is_running());
}

/// WHAT: Ticking a finished countdown is a no-op
/// WHY: Stale timer fires must not move the display
#[test]
fn given_finished_countdown_when_ticking_then_no_change() {
    // Given: A countdown that was never started
    let mut countdown = Countdown::new(0);

    // When: Ticking
    let tick = countdown.tick();

    // Then: Reports finished without a change
    assert_eq!(tick.changed, None);
    assert!(tick.finished);
    assert_eq!(countdown.displayed(), 0);
}

/// WHAT: Restart mid-countdown jumps back to the start value
/// WHY: Reset and record both restart the display from the full duration
#[test]
fn given_partially_elapsed_countdown_when_restarted_then_shows_start_again() {
    // Given: A countdown ticked down to 3
    let mut countdown = Countdown::new(START);
    countdown.restart(START);
    for _ in 0..3 {
        countdown.tick();
    }
    assert_eq!(countdown.displayed(), 3);

    // When: Restarting
    countdown.restart(START);

    // Then: Display is back at the start and running
    assert_eq!(countdown.displayed(), START);
    assert!(countdown.is_running());
}
