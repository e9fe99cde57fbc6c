use chart_modebar::core::ChartState;
use chart_modebar::modebar::{ModebarConfig, default_button_names, default_registry};
use chart_modebar::telemetry;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

const USAGE: &str =
    "usage: modebar_resolve_tool <resolve|defaults> --input <path> [--output <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    /// Full resolution, written as the v1 toolbar contract.
    Resolve,
    /// Default group names only, ignoring host overrides.
    Defaults,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: PathBuf,
    output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ChartInputFile {
    #[serde(flatten)]
    chart: ChartState,
    #[serde(default)]
    config: Option<Value>,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let input: ChartInputFile =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let payload = match args.command {
        CommandKind::Resolve => {
            let config = match &input.config {
                Some(value) => {
                    ModebarConfig::from_json_value(value).map_err(|err| err.to_string())?
                }
                None => ModebarConfig::default(),
            };
            let toolbar = input
                .chart
                .resolve_toolbar(&config)
                .map_err(|err| err.to_string())?;
            toolbar
                .to_json_contract_v1_pretty()
                .map_err(|err| err.to_string())?
        }
        CommandKind::Defaults => {
            let names = default_button_names(
                input.chart.capabilities(),
                &input.chart.traces,
                &input.chart.axes,
            );
            let unknown: Vec<&str> = names
                .iter()
                .flatten()
                .copied()
                .filter(|name| !default_registry().contains(name))
                .collect();
            if !unknown.is_empty() {
                return Err(format!(
                    "default groups reference unregistered buttons: {unknown:?}"
                ));
            }
            serde_json::to_string_pretty(&names)
                .map_err(|err| format!("failed to serialize json: {err}"))?
        }
    };

    match &args.output {
        Some(path) => fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("resolve") => CommandKind::Resolve,
        Some("defaults") => CommandKind::Defaults,
        _ => return Err(USAGE.to_owned()),
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| "missing --input".to_owned())?;
    Ok(CliArgs {
        command,
        input,
        output,
    })
}
