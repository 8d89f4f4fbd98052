use aslan_client::{AslanClient, config::Config, http_client::ReqwestAslanClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let (Some(project), Some(env), Some(service), Some(image)) =
        (args.next(), args.next(), args.next(), args.next())
    else {
        eprintln!("usage: devmode_patch <project> <env> <service> <dev-image>");
        return Ok(());
    };

    let cfg = Config::from_env()?;
    let client = ReqwestAslanClient::new(&cfg.base_url, cfg.api_token);

    let info = client
        .patch_workload(&project, &env, &service, &image)
        .await?;
    println!("{} ({}) -> {}", info.name, info.r#type, info.status);
    Ok(())
}
