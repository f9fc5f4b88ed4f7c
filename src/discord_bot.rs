use crate::service::PickerService;
use serenity::all::{Client, Context, EventHandler, GatewayIntents, Message, Ready};
use serenity::async_trait;
use std::sync::Arc;
use tracing::{error, info};

/// Gateway handler: matches message content against the draft triggers and
/// answers with exactly one reply per recognized command.
pub struct Handler {
    service: Arc<PickerService>,
}

impl Handler {
    pub fn new(service: Arc<PickerService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let Some(reply) = self.service.handle_command(&msg.content) else {
            return;
        };

        if let Err(e) = msg.channel_id.say(&ctx.http, reply).await {
            error!("failed to send reply: {}", e);
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("champion draft bot initialized as {}", ready.user.name);
    }
}

pub async fn run_discord(
    token: &str,
    service: Arc<PickerService>,
) -> Result<(), serenity::Error> {
    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(token, intents)
        .event_handler(Handler::new(service))
        .await?;

    client.start().await
}
