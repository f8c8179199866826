use std::sync::Arc;
use std::time::Duration;

use nandi_application::{ChatSession, VoiceCall};
use nandi_core::config::NandiConfig;
use nandi_core::responder::ResponseResolver;
use nandi_core::session::TurnRole;

#[tokio::test(start_paused = true)]
async fn test_conversation_keeps_turn_order() {
    let mut config = NandiConfig::default();
    config.chat.reply_delay_ms = 250;
    let session =
        ChatSession::new(Arc::new(ResponseResolver::demo().unwrap()), &config.chat).unwrap();

    let first = session.send("weather?").await.unwrap();
    let second = session.send("mandi rates").await.unwrap();

    let weather = first.wait().await.unwrap();
    let market = second.wait().await.unwrap();
    assert!(weather.text().starts_with("Today's weather forecast"));
    assert!(market.text().starts_with("Today's Mandi Prices"));

    let roles: Vec<TurnRole> = session.snapshot().await.iter().map(|t| t.role()).collect();
    assert_eq!(
        roles,
        [
            TurnRole::Assistant,
            TurnRole::User,
            TurnRole::User,
            TurnRole::Assistant,
            TurnRole::Assistant,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_snapshot_is_detached() {
    let session = ChatSession::new(
        Arc::new(ResponseResolver::demo().unwrap()),
        &NandiConfig::default().chat,
    )
    .unwrap();
    let before = session.snapshot().await;
    session.send("loan").await.unwrap().wait().await.unwrap();
    assert_eq!(before.len(), 1);
    assert_eq!(session.snapshot().await.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_call_uses_configured_tick() {
    let mut config = NandiConfig::default();
    config.call.tick_interval_ms = 500;
    let mut call = VoiceCall::new(&config.call).unwrap();
    call.start();
    tokio::time::sleep(Duration::from_millis(2750)).await;
    assert_eq!(call.elapsed_secs(), 5);
    call.end();
    assert_eq!(call.display(), "00:00");
}
