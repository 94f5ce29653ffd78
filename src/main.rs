#[cfg(any(feature = "chrome", feature = "native"))]
mod cli {
    use clap::{ArgAction, Parser};
    use log::LevelFilter;
    use std::path::PathBuf;
    use svgsnap::{convert_file, CaptureConfig, Error, Result};

    pub const DEFAULT_INPUT: &str = "docs/infographic.svg";
    pub const DEFAULT_OUTPUT: &str = "docs/infographic.png";

    #[derive(Parser)]
    #[command(
        name = "svgsnap",
        version,
        about = "Renders a single SVG to a fixed-size PNG through a headless browser screenshot",
        long_about = None
    )]
    pub struct Cli {
        #[clap(short = 'i')]
        #[clap(long = "input")]
        #[clap(help = "Path of the SVG file to render")]
        #[clap(value_name = "SVG")]
        #[clap(default_value = DEFAULT_INPUT)]
        pub input: PathBuf,

        #[clap(short = 'o')]
        #[clap(long = "output")]
        #[clap(help = "Path of the PNG file to write")]
        #[clap(value_name = "PNG")]
        #[clap(default_value = DEFAULT_OUTPUT)]
        pub output: PathBuf,

        #[clap(long = "json")]
        #[clap(help = "Print the conversion report as JSON instead of the summary lines")]
        pub json: bool,

        #[clap(short = 'v')]
        #[clap(long = "verbose")]
        #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
        pub verbosity: u8,
    }

    pub fn init_logger(cli: &Cli) {
        let filter_level: LevelFilter = match cli.verbosity {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .format_timestamp(None)
            .format_target(false)
            .filter_level(filter_level)
            .init();
    }

    pub fn runner() -> Result<()> {
        let cli = Cli::parse();
        init_logger(&cli);

        log::info!(
            "Running {}-{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );

        let report = convert_file(&cli.input, &cli.output, CaptureConfig::default())?;

        if cli.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| Error::Other(format!("Report serialization failed: {}", e)))?;
            println!("{}", json);
        } else {
            println!("✓ PNG generated successfully: {}", report.output.display());
            println!("  File size: {} KB", report.kib());
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use clap::CommandFactory;

        #[test]
        fn cli_parses_defaults() {
            Cli::command().debug_assert();
            let cli = Cli::parse_from(["svgsnap"]);
            assert_eq!(cli.input, PathBuf::from(DEFAULT_INPUT));
            assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
            assert!(!cli.json);
            assert_eq!(cli.verbosity, 0);
        }

        #[test]
        fn cli_accepts_overrides() {
            let cli = Cli::parse_from(["svgsnap", "-i", "a.svg", "-o", "b.png", "--json", "-vv"]);
            assert_eq!(cli.input, PathBuf::from("a.svg"));
            assert_eq!(cli.output, PathBuf::from("b.png"));
            assert!(cli.json);
            assert_eq!(cli.verbosity, 2);
        }
    }
}

#[cfg(any(feature = "chrome", feature = "native"))]
fn main() {
    if let Err(e) = cli::runner() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(any(feature = "chrome", feature = "native")))]
fn main() {
    eprintln!("Error: svgsnap was built without a rendering backend (enable the chrome or native feature)");
    std::process::exit(1);
}
