use std::time::Duration;

use anyhow::Result;
use pantry_shared::{ChatMessage, Synthesis};
use pantry_synth::Conversation;
use serde::Serialize;

use crate::config::Config;

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Ingredient you have, repeatable
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Free text request, e.g. "something spicy"
    #[arg(long)]
    pub prefer: Option<String>,

    #[arg(long)]
    pub json: bool,

    /// Also use the saved ingredient list
    #[arg(long)]
    pub use_saved: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    synthesis: &'a Synthesis,
    conversation: &'a [ChatMessage],
}

#[tracing::instrument(skip_all, fields(ingredients = args.ingredients.len()))]
pub async fn generate(config: &Config, args: GenerateArgs) -> Result<()> {
    println!("{}", generation(config, &args).await?);

    Ok(())
}

/// Builds what `generate` prints, after the configured pacing delay.
pub async fn generation(config: &Config, args: &GenerateArgs) -> Result<String> {
    let ingredients = if args.use_saved {
        let session = super::open_session(config).await?;
        super::merge_ingredients(&args.ingredients, Some(session.ingredients()))
    } else {
        super::merge_ingredients(&args.ingredients, None)
    };

    if config.generator.pacing_ms > 0 {
        tracing::debug!(pacing_ms = config.generator.pacing_ms, "pacing generation");
        tokio::time::sleep(Duration::from_millis(config.generator.pacing_ms)).await;
    }

    let mut conversation = Conversation::new();
    let synthesis = conversation.generate(&mut rand::rng(), &ingredients, args.prefer.as_deref());

    if args.json {
        let output = Output {
            synthesis: &synthesis,
            conversation: conversation.messages(),
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    Ok(format!(
        "{}\n\n{}",
        crate::render::conversation(conversation.messages()),
        crate::render::generated(&synthesis, &ingredients)
    ))
}
