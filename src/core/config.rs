use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bot_api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let bot_api_url = env::var("CHATRELAY_BOT_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());

        Self { bot_api_url }
    }
}
