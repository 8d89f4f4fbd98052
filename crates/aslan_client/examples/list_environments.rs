use aslan_client::{AslanClient, config::Config, http_client::ReqwestAslanClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example: expects ASLAN_API_TOKEN in env
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return Ok(());
        }
    };
    let project = std::env::args().nth(1).unwrap_or_else(|| "demo".into());

    let client = ReqwestAslanClient::new(&cfg.base_url, cfg.api_token);
    let envs = client.list_environments(&project).await?;
    for env in envs {
        println!(
            "{}/{} -> namespace {} ({})",
            env.product_name, env.env_name, env.namespace, env.status
        );
    }
    Ok(())
}
