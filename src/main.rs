// SPDX-License-Identifier: MPL-2.0
use iced_spin::app::{self, Flags, Overrides};
use iced_spin::config::{self, Config};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const HELP: &str = "\
Drag-to-spin image sequence viewer

USAGE:
  iced_spin [OPTIONS] [URL ...]

OPTIONS:
  --demo                     Play once through all frames after loading
  --config PATH              Read settings from PATH instead of the default location
  --max-attempts N           Give up on a frame after N failed decodes
  --retry-delay-ms MS        Pause between two attempts of the same frame
  --demo-interval-ms MS      Delay between two demo steps
  --capture window|surface   Where drag motion is tracked once started
  -h, --help                 Print help
";

struct Cli {
    config_path: Option<PathBuf>,
    overrides: Overrides,
}

fn parse_args() -> Result<Option<Cli>, String> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parse_error = |err: pico_args::Error| err.to_string();
    let demo = args.contains("--demo");
    let config_path = args.opt_value_from_str("--config").map_err(parse_error)?;
    let max_attempts = args.opt_value_from_str("--max-attempts").map_err(parse_error)?;
    let retry_delay_ms = args.opt_value_from_str("--retry-delay-ms").map_err(parse_error)?;
    let demo_interval_ms = args.opt_value_from_str("--demo-interval-ms").map_err(parse_error)?;
    let capture = args.opt_value_from_str("--capture").map_err(parse_error)?;
    let sources = Overrides::sources_from_args(args.finish()).map_err(|err| err.to_string())?;

    Ok(Some(Cli {
        config_path,
        overrides: Overrides {
            sources,
            demo,
            max_attempts,
            retry_delay_ms,
            demo_interval_ms,
            capture,
        },
    }))
}

fn load_config(config_path: Option<&Path>) -> Config {
    let loaded = match config_path {
        Some(path) => {
            config::load_from_path(path).map_err(|err| format!("{}: {err}", path.display()))
        }
        None => {
            let (config, warning) = config::load();
            warning.map_or(Ok(config), Err)
        }
    };
    loaded.unwrap_or_else(|warning| {
        log::warn!("Ignoring configuration: {warning}");
        Config::default()
    })
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match parse_args() {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let config = load_config(cli.config_path.as_deref());
    let flags = Flags::from_config(&config).with_overrides(cli.overrides);

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
