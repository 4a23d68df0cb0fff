use anyhow::Context;
use helpers::{
    exit_code, run_bootstrap, setup_client, AppConfig, BootstrapReport, ClientSetup, SystemClock,
    STACKUP_QUESTS,
};
use log::{error, info};
use std::process::ExitCode;

fn load_config() -> anyhow::Result<AppConfig> {
    dotenv::dotenv()
        .map_err(|err| {
            eprintln!(".env file error: {}", err);
            err
        })
        .ok();

    AppConfig::fetch().context("failed to load configuration from environment")
}

async fn deploy(config: &AppConfig) -> anyhow::Result<BootstrapReport> {
    // instantiate client
    let ClientSetup {
        deployer,
        deployer_address,
    } = setup_client(config).await?;
    info!("Deployer address: {deployer_address}");

    // deploy, read admin, create quests
    let report = run_bootstrap(&deployer, &SystemClock, &STACKUP_QUESTS).await?;

    for quest in &report.quests {
        info!("Quest {:?} created in tx {:?}", quest.title, quest.tx_hash);
    }
    Ok(report)
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::from(exit_code::<(), _>(&Err(err)));
        }
    };

    env_logger::Builder::new()
        .filter_level(config.deploy_config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let result = deploy(&config).await;
    if let Err(err) = &result {
        error!("deployment aborted: {err:#}");
        eprintln!("{err:#}");
    }
    ExitCode::from(exit_code(&result))
}
