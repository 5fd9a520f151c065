//! 列出支持内容生成的 Gemini 模型。

mod render;

use gemini_models::types::ListModelsResponse;
use gemini_models::Client;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_logging();

    for line in render::header() {
        println!("{line}");
    }

    match fetch_models().await {
        Ok(response) => {
            for model in response.generate_content_models() {
                println!("{}", render::row(model));
            }
        }
        Err(err) => {
            println!("{}", render::failure_line(&err));
            println!("{}", render::hint_line());
        }
    }
}

async fn fetch_models() -> gemini_models::Result<ListModelsResponse> {
    let client = Client::from_env()?;
    let response = client.models().list().await?;
    debug!(total = response.models.len(), "received model list");
    Ok(response)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
