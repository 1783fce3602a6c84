use std::fs;
use std::path::PathBuf;

use story_charts::api::source_from_config;
use story_charts::{RenderOutcome, StoryApp, StoryConfig, telemetry};

const USAGE: &str = "usage: render_story_page [--config <path>] [--input <path> | --url <base-url>] [--story-path <path>] --output <path>";

#[derive(Debug)]
struct CliArgs {
    config: Option<PathBuf>,
    input: Option<PathBuf>,
    base_url: Option<String>,
    story_path: Option<String>,
    output: PathBuf,
}

fn main() {
    if !telemetry::init_default_tracing() {
        eprintln!("warn: tracing subscriber not installed; load diagnostics are not logged");
    }
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            StoryConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => StoryConfig::new(),
    };
    if let Some(input) = &args.input {
        config.base_url = None;
        config.story_path = input.display().to_string();
    }
    if let Some(base_url) = &args.base_url {
        config.base_url = Some(base_url.clone());
    }
    if let Some(story_path) = &args.story_path {
        config.story_path = story_path.clone();
    }

    let source = source_from_config(&config).map_err(|err| err.to_string())?;
    let app = StoryApp::new(config);
    let (page, outcome) = app.build_page(source.as_ref());

    let html = page.to_html().map_err(|err| err.to_string())?;
    fs::write(&args.output, html)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))?;
    eprintln!("Wrote {}", args.output.display());

    match outcome {
        RenderOutcome::Rendered(_) => Ok(()),
        RenderOutcome::Failed(err) => Err(err.to_string()),
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut config = None::<PathBuf>;
    let mut input = None::<PathBuf>;
    let mut base_url = None::<String>;
    let mut story_path = None::<String>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--url" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --url".to_owned())?;
                base_url = Some(value);
            }
            "--story-path" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --story-path".to_owned())?;
                story_path = Some(value);
            }
            "--output" | "-o" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    if input.is_some() && base_url.is_some() {
        return Err(format!("--input and --url are mutually exclusive\n{USAGE}"));
    }

    Ok(CliArgs {
        config,
        input,
        base_url,
        story_path,
        output: output.ok_or_else(|| format!("missing --output\n{USAGE}"))?,
    })
}
