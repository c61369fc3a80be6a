//! Full session flows through the game service.
//!
//! The clock is paused in every test, so the round timer never interferes
//! unless a test advances time on purpose.

use anagrams_bot::application::services::{GameError, GameService};

use crate::common::{build_service, wait_for_completion, CHANNEL, OWNER, STRANGER};

#[tokio::test(start_paused = true)]
async fn test_custom_round_scores_and_finishes_on_exhaustion() {
    let (service, outbound, registry) = build_service(&["cat", "act", "at"]);

    service.start_custom(CHANNEL, OWNER, "cat").await.unwrap();
    assert!(outbound.contains("60 seconds to type in anagrams for cat"));

    service.handle_message(CHANNEL, OWNER, "act").await;
    service.handle_message(CHANNEL, OWNER, "act").await;
    service.handle_message(CHANNEL, OWNER, "at").await;
    service.handle_message(CHANNEL, OWNER, "dog").await;
    service.handle_message(CHANNEL, OWNER, "cat").await;
    wait_for_completion(&registry, CHANNEL).await;

    let lines = outbound.lines();
    assert!(lines.contains(&"+ 100".to_string()));
    assert!(lines.contains(&"act (Already used)".to_string()));
    assert!(lines.contains(&"(Words must be at least 3 letters long)".to_string()));
    assert!(lines.contains(&"dog (Not in vocabulary)".to_string()));
    // exhaustion ends the round with a perfect score, timer untouched
    assert!(lines.contains(&"Total points: 200".to_string()));
    assert!(lines.contains(&"You got every anagram, I'm so proud of you.".to_string()));
    assert!(lines.contains(&"[Your anagrams] 3 letters: act, cat".to_string()));

    let err = service.status(CHANNEL).await.unwrap_err();
    assert!(matches!(err, GameError::NoActiveSession));
}

#[tokio::test(start_paused = true)]
async fn test_stranger_guesses_are_filtered_upstream() {
    let (service, outbound, registry) = build_service(&["cat", "act"]);
    service.start_custom(CHANNEL, OWNER, "cat").await.unwrap();

    service.handle_message(CHANNEL, STRANGER, "act").await;
    service.handle_message(CHANNEL, STRANGER, "quit").await;
    tokio::task::yield_now().await;

    // Session unaffected: still active, word still unclaimed
    assert!(registry.is_active(CHANNEL));
    assert!(!outbound.contains("+ 100"));
    assert!(!outbound.contains("Exiting"));

    service.handle_message(CHANNEL, OWNER, "act").await;
    service.handle_message(CHANNEL, OWNER, "quit").await;
    wait_for_completion(&registry, CHANNEL).await;
    assert!(outbound.contains("+ 100"));
}

#[tokio::test(start_paused = true)]
async fn test_channel_is_busy_until_the_round_ends() {
    let (service, _outbound, registry) = build_service(&["cat", "act", "tangle"]);
    service.start_custom(CHANNEL, OWNER, "cat").await.unwrap();

    let err = service
        .start_custom(CHANNEL, STRANGER, "tangle")
        .await
        .unwrap_err();
    assert!(matches!(err, GameError::SessionAlreadyActive));

    service.handle_message(CHANNEL, OWNER, "quit").await;
    wait_for_completion(&registry, CHANNEL).await;

    // A finished round frees the channel for a new game
    service.start_custom(CHANNEL, OWNER, "tangle").await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_parallel_channels_run_independent_sessions() {
    let (service, outbound, registry) = build_service(&["cat", "act"]);

    service.start_custom(1, OWNER, "cat").await.unwrap();
    service.start_custom(2, STRANGER, "act").await.unwrap();
    assert_eq!(registry.active_count(), 2);

    service.handle_message(1, OWNER, "quit").await;
    wait_for_completion(&registry, 1).await;
    assert!(registry.is_active(2));
    assert!(outbound.contains("Exiting"));
}

#[tokio::test(start_paused = true)]
async fn test_quit_command_respects_ownership() {
    let (service, outbound, registry) = build_service(&["cat", "act"]);
    service.start_custom(CHANNEL, OWNER, "cat").await.unwrap();

    let err = service.quit(CHANNEL, STRANGER).await.unwrap_err();
    assert!(matches!(err, GameError::NotOwner));
    assert!(registry.is_active(CHANNEL));

    service.quit(CHANNEL, OWNER).await.unwrap();
    wait_for_completion(&registry, CHANNEL).await;
    assert!(outbound.contains("Exiting"));
    assert!(outbound.contains("[You missed]"));
}

#[tokio::test(start_paused = true)]
async fn test_status_reports_display_and_countdown() {
    let (service, _outbound, _registry) = build_service(&["cat", "act"]);

    let err = service.status(CHANNEL).await.unwrap_err();
    assert!(matches!(err, GameError::NoActiveSession));

    service.start_custom(CHANNEL, OWNER, "cat").await.unwrap();
    let status = service.status(CHANNEL).await.unwrap();
    assert_eq!(status.display, "cat");
    assert_eq!(status.time_remaining_secs, 60);
}

#[tokio::test(start_paused = true)]
async fn test_start_rejections_leave_no_session_behind() {
    let (service, _outbound, registry) = build_service(&["cat", "act", "at"]);

    assert!(matches!(
        service.start_custom(CHANNEL, OWNER, "dog").await,
        Err(GameError::InvalidWord(_))
    ));
    assert!(matches!(
        service.start_custom(CHANNEL, OWNER, "at").await,
        Err(GameError::WordTooShort(_))
    ));
    assert!(matches!(
        service.start_random(CHANNEL, OWNER, 5).await,
        Err(GameError::UnsupportedLength(5))
    ));
    assert_eq!(registry.active_count(), 0);
}
