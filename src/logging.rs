// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::Local;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::env;
use std::io::IsTerminal;

const LOG_LEVEL_ENV: &str = "SATORI_ROI_LOG_LEVEL";
const DEFAULT_LOG_LEVEL: &str = "warn";

pub fn parse_level(s: &str) -> Result<LevelFilter> {
    Ok(match s.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        unknown => bail!("Unknown log level: {}", unknown),
    })
}

/// Send log records to stderr so table/JSON output on stdout stays clean.
///
/// The environment variable wins over the level from settings.
pub fn init(level_from_settings: Option<&str>) -> Result<()> {
    let level = env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| {
        level_from_settings
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .to_string()
    });
    let level = parse_level(&level)?;

    let colours = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);
    let use_colour = std::io::stderr().is_terminal();

    Dispatch::new()
        .format(move |out, message, record| {
            let timestamp = Local::now().format("%H:%M:%S");
            if use_colour {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    timestamp,
                    colours.color(record.level()),
                    record.target(),
                    message
                ));
            } else {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    timestamp,
                    record.level(),
                    record.target(),
                    message
                ));
            }
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
