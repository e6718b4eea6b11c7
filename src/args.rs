use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "specsift")]
#[command(about = "Crawls company sites and extracts product specifications")]
#[command(version)]
pub struct Args {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    pub config: String,

    /// Process only the named company instead of every configured one
    #[arg(long)]
    pub company: Option<String>,
}
