use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

use gridforge::io::ext_repr::ExtSave;

use crate::EPOCH;

pub mod cli;
pub mod layout_to_svg;
pub mod output;
pub mod svg_util;

pub fn read_save(path: &Path) -> Result<ExtSave> {
    let file =
        File::open(path).with_context(|| format!("could not open save file: {path:?}"))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect save file format")
}

pub fn write_json(output: &impl Serialize, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("could not create solution file: {path:?}"))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, output)
        .with_context(|| format!("could not write solution file: {path:?}"))?;

    info!("[FFD] solution written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).with_context(|| format!("could not write svg file: {path:?}"))?;
    info!("[FFD] svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!("[FFD] epoch: {}", jiff::Timestamp::now());
    Ok(())
}
