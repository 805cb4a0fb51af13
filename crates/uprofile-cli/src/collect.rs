//! `uprofile collect <PROFILE_URL>`.

use std::io::Write;

use clap::Args;

use uprofile_core::AppConfig;
use uprofile_scraper::{ProfileCollector, UserReport};

#[derive(Debug, Args)]
pub struct CollectArgs {
    /// Profile URL, e.g. https://www.reddit.com/user/<name>
    pub profile_url: String,

    /// Posts to request (overrides UPROFILE_POSTS_LIMIT)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub posts_limit: Option<u32>,

    /// Comments to request (overrides UPROFILE_COMMENTS_LIMIT)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub comments_limit: Option<u32>,

    /// Print single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

pub(crate) async fn run_collect(config: &AppConfig, args: &CollectArgs) -> anyhow::Result<()> {
    let collector = ProfileCollector::from_config(config)?.with_limits(
        args.posts_limit.unwrap_or(config.posts_limit),
        args.comments_limit.unwrap_or(config.comments_limit),
    );

    let report = collector.collect_user_data(&args.profile_url).await?;
    log_summary(&report);

    let rendered = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}

fn log_summary(report: &UserReport) {
    match report {
        UserReport::Complete(result) => tracing::info!(
            user = %result.identifier(),
            posts = result.total_posts,
            comments = result.total_comments,
            communities = result.total_communities,
            "collection complete"
        ),
        UserReport::Degraded(degraded) => tracing::warn!(
            user = %degraded.identifier,
            error = %degraded.error,
            "profile unavailable; result carries no karma, posts, or comments"
        ),
    }
}
