mod commands;
mod terminal;

use commands::{CommandLine, discover};
use sweepr_common::config::Config;
use terminal::{input, logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    logging::init_logging(cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    let target: String = match commands.target {
        Some(target) => target,
        None => input::prompt_target()?,
    };

    print::header("getting ready for discovery", cfg.quiet);
    discover::discover(&target, &cfg).await
}
