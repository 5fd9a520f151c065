use gemini_models::Client;

#[tokio::main]
async fn main() -> gemini_models::Result<()> {
    let client = Client::from_env()?;
    let models = client.models().list().await?;
    println!("{:?}", models.models);
    Ok(())
}
