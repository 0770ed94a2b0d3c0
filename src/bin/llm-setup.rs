#[path = "llm-setup/app/mod.rs"]
mod app;
#[path = "llm-setup/args.rs"]
mod args;
#[path = "llm-setup/logging.rs"]
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
