//! Daemon configuration
//!
//! Every flag has an environment fallback so the server can be configured
//! the usual container way.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use mediaq_api_http::HttpServerConfig;
use mediaq_core::application::IdentityDeriver;

pub const DEFAULT_STORE_URL: &str = "redis://127.0.0.1:6379/";

pub const NO_PEPPER_WARNING: &str = "No MEDIAQ_PEPPER provided, queue ids will be guessable";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "mediaq-server", version, about = "Per-chat media queue server")]
pub struct Config {
    /// Telegram bot token; the bot is disabled when unset
    #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: Option<String>,

    /// Secret mixed into queue id derivation
    #[arg(long, env = "MEDIAQ_PEPPER", hide_env_values = true)]
    pub pepper: Option<String>,

    /// Wipe the whole store at startup
    #[arg(
        long,
        env = "MEDIAQ_DEBUG",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub debug: bool,

    /// redis://, rediss://, sqlite:<path>, a bare file path, or memory://
    #[arg(long, env = "MEDIAQ_STORE_URL", default_value = DEFAULT_STORE_URL)]
    pub store_url: String,

    #[arg(long, env = "MEDIAQ_HTTP_HOST", default_value = "127.0.0.1")]
    pub http_host: String,

    #[arg(long, env = "MEDIAQ_HTTP_PORT", default_value_t = 5000)]
    pub http_port: u16,

    #[arg(long, env = "MEDIAQ_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn http(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.http_host.clone(),
            port: self.http_port,
        }
    }

    /// Token, if set to something non-empty
    pub fn telegram_token(&self) -> Option<&str> {
        self.telegram_token.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn identity_deriver(&self) -> IdentityDeriver {
        IdentityDeriver::new(self.pepper.clone())
    }

    /// Startup warning to log when queue ids are derived without a secret
    pub fn pepper_warning(&self) -> Option<&'static str> {
        (!self.identity_deriver().has_pepper()).then_some(NO_PEPPER_WARNING)
    }
}
