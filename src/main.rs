//! Turn-Path-Planner CLI.
//!
//! Spielt eine Folge von Zielpunkten durch Controller, Planer und Timeline
//! und gibt jeden geplanten Pfad als JSON auf stdout aus.

use anyhow::{bail, Context};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use turn_path_planner::{AppController, AppIntent, AppState, PlannedPath, PlannerOptions, Point};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

const USAGE: &str = "Aufruf: turn-path-planner [--config <datei.toml>] <x> <y> [<x> <y> ...]";

/// Kommandozeilen-Argumente.
struct CliArgs {
    config: Option<PathBuf>,
    targets: Vec<Point>,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut config = None;
        let mut numbers = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => bail!("{USAGE}"),
                "--config" => {
                    let path = args.next().context("--config erwartet einen Pfad")?;
                    config = Some(PathBuf::from(path));
                }
                value => {
                    let number: f64 = value
                        .parse()
                        .with_context(|| format!("Ungültige Koordinate: {value}"))?;
                    numbers.push(number);
                }
            }
        }

        if numbers.is_empty() || numbers.len() % 2 != 0 {
            bail!("Koordinaten müssen paarweise angegeben werden\n{USAGE}");
        }

        let targets = numbers
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect();

        Ok(Self { config, targets })
    }
}

/// JSON-Ausgabe pro geplanter Fahrt.
#[derive(Serialize)]
struct PathReport<'a> {
    target: Point,
    duration_ms: u128,
    path: &'a PlannedPath,
    polyline: Vec<Point>,
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Turn-Path-Planner v{} startet...", env!("CARGO_PKG_VERSION"));

        let args = CliArgs::parse(std::env::args().skip(1))?;
        let config_path = args.config.unwrap_or_else(PlannerOptions::config_path);
        let options = PlannerOptions::load_from_file(&config_path);

        let mut controller = AppController::new();
        let mut state = AppState::new();
        controller.handle_intent(&mut state, AppIntent::OptionsChanged { options })?;
        let (width, height) = (state.options.canvas_width, state.options.canvas_height);
        controller.handle_intent(&mut state, AppIntent::CanvasResized { width, height })?;

        // Tick 0 würde die Wiedergabe nie beenden
        let tick = state.options.playback_tick().max(Duration::from_millis(1));

        for target in args.targets {
            if let Err(e) =
                controller.handle_intent(&mut state, AppIntent::TargetRequested { target })
            {
                log::error!("Ziel {} übersprungen: {:#}", target, e);
                continue;
            }

            let (Some(playback), Some(path)) = (state.playback.as_ref(), state.last_path.as_ref())
            else {
                continue;
            };

            let report = PathReport {
                target,
                duration_ms: playback.timeline.total_duration().as_millis(),
                path,
                polyline: path.sample_positions(state.options.sample_spacing),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            drop(report);

            while state.is_playing() {
                controller.handle_intent(&mut state, AppIntent::PlaybackAdvanced { delta: tick })?;
            }
        }

        log::info!(
            "{} Commands ausgeführt, End-Richtung {:.4} rad",
            state.command_log.len(),
            state.heading
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_targets_in_pairs() {
        let parsed = CliArgs::parse(args(&["10", "20", "-5.5", "3"])).unwrap();
        assert!(parsed.config.is_none());
        assert_eq!(
            parsed.targets,
            vec![Point::new(10.0, 20.0), Point::new(-5.5, 3.0)]
        );
    }

    #[test]
    fn test_parse_config_flag() {
        let parsed = CliArgs::parse(args(&["--config", "opts.toml", "1", "2"])).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("opts.toml")));
    }

    #[test]
    fn test_parse_rejects_odd_coordinates() {
        assert!(CliArgs::parse(args(&["1", "2", "3"])).is_err());
        assert!(CliArgs::parse(args(&["abc", "2"])).is_err());
        assert!(CliArgs::parse(args(&[])).is_err());
    }
}
