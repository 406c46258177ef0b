use anyhow::Context as _;
use dotenvy::dotenv;
use voxbridge::{InvokerConfig, transcribe};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let mut config = InvokerConfig::default();
    if let Ok(program) = std::env::var("TRANSCRIBE_PROGRAM") {
        config = config.with_program(program);
    }
    if let Ok(script) = std::env::var("TRANSCRIBE_SCRIPT") {
        config = config.with_script(script);
    }

    let result = transcribe(&config)
        .await
        .context("Failed to run transcription script")?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
