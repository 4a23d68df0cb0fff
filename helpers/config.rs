use envconfig::Envconfig;

/// Hardhat / Anvil local account #0. Only meaningful on a local dev node.
pub const LOCAL_DEV_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

#[derive(Debug, Clone, Envconfig)]
pub struct NetworkConfig {
    #[envconfig(from = "ETHEREUM_RPC_URL", default = "http://127.0.0.1:8545")]
    pub rpc_url: String,

    #[envconfig(
        from = "DEPLOYER_PRIVATE_KEY",
        default = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
    )]
    pub private_key: String,

    #[envconfig(from = "STACKUP_CONFIRMATIONS", default = "1")]
    pub confirmations: u64,
}

#[derive(Debug, Clone, Envconfig)]
pub struct DeployConfig {
    #[envconfig(
        from = "STACKUP_ARTIFACT_PATH",
        default = "artifacts/contracts/StackUp.sol/StackUp.json"
    )]
    pub artifact_path: String,

    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: log::Level,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub network_config: NetworkConfig,
    pub deploy_config: DeployConfig,
}

impl AppConfig {
    pub fn fetch() -> Result<Self, envconfig::Error> {
        let network_config = NetworkConfig::init_from_env()?;
        let deploy_config = DeployConfig::init_from_env()?;

        Ok(Self {
            network_config,
            deploy_config,
        })
    }
}
