mod adapters;
mod commands;
mod terminal;

use commands::{CommandLine, Commands, bmi, categories, interactive, profile};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(cfg.json);
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Bmi { mass, height } => {
            print::header("body mass index", cfg.quiet);
            bmi::bmi(&mass, &height, &cfg)
        }
        Commands::Interactive => {
            print::header("interactive calculator", cfg.quiet);
            interactive::interactive(&cfg)
        }
        Commands::Categories => {
            print::header("classification bands", cfg.quiet);
            categories::categories(&cfg)
        }
        Commands::Profile { photo, share, scan, open, user } => {
            print::header("profile", cfg.quiet);
            let opts = profile::ProfileOptions { photo, share, scan, open, user };
            profile::profile(opts, &cfg).await
        }
    }
}
