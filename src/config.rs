use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub basic_user: String,
    pub basic_pass: String,
    pub accounts_path: String,
    pub orders_path: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            basic_user: std::env::var("BASIC_USER")
                .map_err(|_| anyhow::anyhow!("BASIC_USER environment variable required"))
                .and_then(|user| {
                    if user.trim().is_empty() {
                        anyhow::bail!("BASIC_USER cannot be empty");
                    }
                    Ok(user)
                })?,
            basic_pass: std::env::var("BASIC_PASS")
                .map_err(|_| anyhow::anyhow!("BASIC_PASS environment variable required"))
                .and_then(|pass| {
                    if pass.trim().is_empty() {
                        anyhow::bail!("BASIC_PASS cannot be empty");
                    }
                    Ok(pass)
                })?,
            accounts_path: std::env::var("ACCOUNTS_PATH")
                .unwrap_or_else(|_| "data/accounts.json".to_string()),
            orders_path: std::env::var("ORDERS_PATH")
                .unwrap_or_else(|_| "data/orders.json".to_string()),
        };

        // Log successful configuration load (without credential values)
        tracing::debug!("Accounts dataset path: {}", config.accounts_path);
        tracing::debug!("Orders dataset path: {}", config.orders_path);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
