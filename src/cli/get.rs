use clap::Args;
use tracing::info;

use crate::config::Config;
use crate::core::lrclib::LyricsFetcher;
use crate::error::{LrcFetchError, Result};
use crate::signal::{spawn_ctrl_c, CancelToken};

#[derive(Args)]
pub struct GetArgs {
    /// Artist name
    #[arg(value_name = "ARTIST")]
    artist: String,

    /// Track title
    #[arg(value_name = "TRACK")]
    track: String,

    /// Album name (helps with matching)
    #[arg(short = 'l', long, default_value = "")]
    album: String,

    /// Track duration in seconds (helps with matching)
    #[arg(short, long, default_value_t = 0)]
    duration: i64,

    /// Print only the lyrics, no status line
    #[arg(short, long)]
    quiet: bool,
}

pub async fn execute(args: GetArgs, config: &Config) -> Result<()> {
    let fetcher = LyricsFetcher::new(config.create_client());

    let cancel = CancelToken::new();
    let ctrl_c = spawn_ctrl_c(cancel.clone());

    if !args.quiet {
        info!("Looking up lyrics for: {} - {}", args.artist, args.track);
    }

    let lyrics = fetcher
        .fetch(&cancel, &args.artist, &args.track, &args.album, args.duration)
        .await;

    ctrl_c.abort();

    if lyrics.is_empty() {
        if cancel.is_cancelled() {
            return Err(LrcFetchError::Cancelled);
        }
        if !args.quiet {
            println!("No lyrics found");
        }
        return Err(LrcFetchError::NotFound);
    }

    println!("{}", lyrics);
    Ok(())
}
