pub mod bmi;
pub mod categories;
pub mod interactive;
pub mod profile;

use std::path::PathBuf;

use bodyscale_common::config::{Config, Locale};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bodyscale")]
#[command(version, about = "Body-mass-index calculator and profile toolkit.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Language for results and notices (en, es)
    #[arg(short, long, global = true, default_value_t = Locale::En)]
    pub lang: Locale,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Reduce output, repeat for less (-q, -qq)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the BMI for a mass (kg) and a height (m)
    #[command(alias = "b", allow_negative_numbers = true)]
    Bmi { mass: String, height: String },
    /// Prompt for measurements until an empty line
    #[command(alias = "i")]
    Interactive,
    /// Show the classification bands
    #[command(alias = "c")]
    Categories,
    /// Run the mock sign-in flow with photo and QR scanning
    #[command(alias = "p")]
    Profile {
        /// Image file used as the captured photo
        #[arg(long)]
        photo: Option<PathBuf>,
        /// Share the captured photo
        #[arg(long)]
        share: bool,
        /// Read QR payloads from stdin, one per line
        #[arg(long)]
        scan: bool,
        /// Open the scanned payload if it is a link
        #[arg(long, requires = "scan")]
        open: bool,
        /// User name to sign in with
        #[arg(short, long, default_value = "")]
        user: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner || self.json,
            quiet: if self.json { 2 } else { self.quiet },
            locale: self.lang,
            json: self.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = CommandLine::parse_from(["bodyscale", "bmi", "70", "1.75", "--lang", "es", "-qq"]);
        let cfg = cli.config();

        assert_eq!(cfg.locale, Locale::Es);
        assert_eq!(cfg.quiet, 2);
        assert!(matches!(cli.command, Commands::Bmi { ref mass, .. } if mass == "70"));
    }

    #[test]
    fn json_implies_quiet() {
        let cfg = CommandLine::parse_from(["bodyscale", "--json", "c"]).config();
        assert!(cfg.json);
        assert!(cfg.no_banner);
        assert_eq!(cfg.quiet, 2);
    }

    #[test]
    fn negative_numbers_reach_the_evaluator() {
        let cli = CommandLine::parse_from(["bodyscale", "bmi", "-5", "1.75"]);
        assert!(matches!(cli.command, Commands::Bmi { ref mass, .. } if mass == "-5"));
    }

    #[test]
    fn open_requires_scan() {
        assert!(CommandLine::try_parse_from(["bodyscale", "profile", "--open"]).is_err());
        assert!(CommandLine::try_parse_from(["bodyscale", "profile", "--scan", "--open"]).is_ok());
    }
}
