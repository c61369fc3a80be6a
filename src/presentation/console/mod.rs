//! Console Transport
//!
//! A stdin/stdout stand-in for a real chat connector: each line is an
//! inbound message on a single channel from a single player, outbound
//! messages print to stdout. Lets the game run end-to-end locally
//! without any chat network.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::outbound::{Field, OutboundChannel, OutboundError};
use crate::application::services::{GameError, GameService};
use crate::presentation::commands::{self, Command};

/// Channel id of the single console conversation.
pub const CONSOLE_CHANNEL_ID: i64 = 0;

/// Author id of the console player.
pub const CONSOLE_USER_ID: i64 = 1;

/// Outbound side of the console transport.
pub struct ConsoleChannel {
    message_limit: usize,
}

impl ConsoleChannel {
    pub fn new(message_limit: usize) -> Self {
        Self { message_limit }
    }
}

#[async_trait]
impl OutboundChannel for ConsoleChannel {
    fn message_limit(&self) -> usize {
        self.message_limit
    }

    async fn send_text(&self, _channel_id: i64, text: &str) -> Result<(), OutboundError> {
        println!("{text}");
        Ok(())
    }

    async fn send_structured(
        &self,
        _channel_id: i64,
        title: &str,
        fields: &[Field],
    ) -> Result<(), OutboundError> {
        println!("== {title} ==");
        for field in fields {
            // Bodies arrive pre-chunked to the message limit
            println!("{}: {}", field.heading, field.body);
        }
        Ok(())
    }
}

/// Read stdin lines and dispatch them until EOF.
pub async fn run<S>(service: Arc<S>, prefix: &str) -> anyhow::Result<()>
where
    S: GameService,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        dispatch(service.as_ref(), prefix, line).await;
    }
    tracing::info!("Console input closed, shutting down");
    Ok(())
}

async fn dispatch<S>(service: &S, prefix: &str, line: &str)
where
    S: GameService + ?Sized,
{
    match commands::parse(prefix, line) {
        Some(Command::StartRandom { length }) => {
            let result = service
                .start_random(CONSOLE_CHANNEL_ID, CONSOLE_USER_ID, length)
                .await;
            report(result, prefix);
        }
        Some(Command::StartCustom { word }) => {
            let result = service
                .start_custom(CONSOLE_CHANNEL_ID, CONSOLE_USER_ID, &word)
                .await;
            report(result, prefix);
        }
        Some(Command::Status) => match service.status(CONSOLE_CHANNEL_ID).await {
            Ok(status) => println!(
                "{} ({} seconds remaining)",
                status.display, status.time_remaining_secs
            ),
            Err(e) => println!("{e}"),
        },
        Some(Command::Help) => service.help(CONSOLE_CHANNEL_ID).await,
        Some(Command::MissingArgument) => {
            println!("No given anagram. Type {prefix}help for a list of commands");
        }
        Some(Command::Unrecognized) => {
            println!("Unknown command. Type {prefix}help for a list of commands");
        }
        None => {
            service
                .handle_message(CONSOLE_CHANNEL_ID, CONSOLE_USER_ID, line)
                .await;
        }
    }
}

fn report(result: Result<(), GameError>, prefix: &str) {
    match result {
        Ok(()) => {}
        // Non-owner actions are ignored, not surfaced
        Err(GameError::NotOwner) => {}
        Err(e @ (GameError::InvalidWord(_) | GameError::WordTooShort(_))) => {
            println!("{e}. Type {prefix}help for a list of commands");
        }
        Err(e) => println!("{e}"),
    }
}
