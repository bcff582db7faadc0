use clap::Parser;

pub const DEFAULT_HOTPEPPER_API_URL: &str = "http://webservice.recruit.co.jp/hotpepper/gourmet/v1/";

#[derive(Parser, Clone)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    /// HotPepper gourmet search credential, must never appear in logs or responses.
    #[clap(env, long)]
    pub hotpepper_api_key: String,

    #[clap(env, long, default_value = DEFAULT_HOTPEPPER_API_URL)]
    pub hotpepper_api_url: String,

    /// Comma separated list of origins allowed through CORS.
    #[clap(env, long, default_value = "http://localhost:5173")]
    pub origin_urls: String,

    /// Upper bound on the outbound HotPepper call, in seconds.
    #[clap(env, long, default_value_t = 5)]
    pub upstream_timeout_secs: u64,
}
