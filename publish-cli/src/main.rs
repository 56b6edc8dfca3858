use anyhow::{bail, Context, Result};
use clap::Parser;

/// Publishes a single Blogspot post to a WordPress site.
#[derive(Parser, Debug)]
#[command(name = "publish-cli", version, about = "Blogspot to WordPress publisher")]
struct Cli {
    /// Blogspot post URL
    source_url: String,

    /// WordPress site URL
    wp_url: String,

    /// WordPress username
    #[arg(short, long)]
    username: String,

    /// Application password; falls back to the WP_APP_PASSWORD environment
    /// variable so it stays out of shell history
    #[arg(short, long)]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let password = match cli.password {
        Some(password) => password,
        None => std::env::var("WP_APP_PASSWORD")
            .context("pass --password or set WP_APP_PASSWORD")?,
    };

    match wp_migrate::migrate_post(&cli.source_url, &cli.wp_url, &cli.username, &password).await {
        Ok(post) => {
            println!("Post published.");
            println!("Link: {}", post.link);
            Ok(())
        }
        Err(e) => bail!(e.user_message()),
    }
}
