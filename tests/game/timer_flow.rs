//! Countdown behavior through the game service.
//!
//! Runs under a paused clock; `tokio::time::sleep` fast-forwards virtual
//! time deterministically.

use std::time::Duration;

use anagrams_bot::application::services::{GameError, GameService};
use tokio_test::assert_ok;

use crate::common::{build_service, CHANNEL, OWNER};

#[tokio::test(start_paused = true)]
async fn test_expiry_reports_missed_words_grouped_by_length() {
    let (service, outbound, registry) = build_service(&["cat", "act", "tac"]);
    service.start_custom(CHANNEL, OWNER, "cat").await.unwrap();

    service.handle_message(CHANNEL, OWNER, "act").await;
    tokio::time::sleep(Duration::from_secs(61)).await;

    assert!(!registry.is_active(CHANNEL));
    let lines = outbound.lines();
    assert!(lines.contains(&"30 seconds remaining!".to_string()));
    assert!(lines.contains(&"10 seconds remaining!".to_string()));
    assert!(lines.contains(&"Time's up!".to_string()));
    assert!(lines.contains(&"Total points: 100".to_string()));
    assert!(lines.contains(&"[Your anagrams] 3 letters: act".to_string()));
    assert!(lines.contains(&"[You missed] 3 letters: cat, tac".to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_milestones_update_the_status_countdown() {
    let (service, _outbound, _registry) = build_service(&["cat", "act"]);
    service.start_custom(CHANNEL, OWNER, "cat").await.unwrap();

    tokio::time::sleep(Duration::from_secs(31)).await;
    let status = assert_ok!(service.status(CHANNEL).await);
    assert_eq!(status.time_remaining_secs, 30);

    tokio::time::sleep(Duration::from_secs(20)).await;
    let status = service.status(CHANNEL).await.unwrap();
    assert_eq!(status.time_remaining_secs, 10);
}

#[tokio::test(start_paused = true)]
async fn test_early_finish_silences_the_timer() {
    let (service, outbound, registry) = build_service(&["cat", "act"]);
    service.start_custom(CHANNEL, OWNER, "cat").await.unwrap();

    service.handle_message(CHANNEL, OWNER, "cat").await;
    service.handle_message(CHANNEL, OWNER, "act").await;

    // Run well past every scheduled milestone
    tokio::time::sleep(Duration::from_secs(120)).await;

    assert!(!registry.is_active(CHANNEL));
    let lines = outbound.lines();
    assert!(!lines.iter().any(|l| l.contains("seconds remaining")));
    assert!(!lines.iter().any(|l| l.contains("Time's up!")));
    assert!(lines.contains(&"You got every anagram, I'm so proud of you.".to_string()));

    let err = service.status(CHANNEL).await.unwrap_err();
    assert!(matches!(err, GameError::NoActiveSession));
}
