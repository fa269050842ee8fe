use clap::Parser;

#[derive(Parser, Clone)]
pub struct Config {
    #[clap(env, long)]
    pub environment: String,

    #[clap(env, long)]
    pub origin_urls: String,

    #[clap(env, long)]
    pub google_api_key: String,

    #[clap(env, long)]
    pub openai_api_key: String,

    #[clap(env, long, default_value = "gpt-4o-mini")]
    pub summary_model: String,
}
