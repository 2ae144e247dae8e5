use anyhow::anyhow;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub api_base_url: String,
    pub api_bearer_token: String,

    pub realtime_url: String,
    pub realtime_buffer_size: usize,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("COTCHEL_ADMIN_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("COTCHEL_ADMIN_NOTIFIER_LOG_FILENAME")?;
        let api_base_url = Self::env_var("COTCHEL_ADMIN_NOTIFIER_API_BASE_URL")?;
        let api_bearer_token = Self::env_var("COTCHEL_ADMIN_NOTIFIER_API_BEARER_TOKEN")?;
        let realtime_url = Self::env_var("COTCHEL_ADMIN_NOTIFIER_REALTIME_URL")?;
        let realtime_buffer_size =
            Self::env_var("COTCHEL_ADMIN_NOTIFIER_REALTIME_BUFFER_SIZE")?.parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            api_base_url,
            api_bearer_token,
            realtime_url,
            realtime_buffer_size,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
