use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::{info, warn};

use ffd::config::FFDConfig;
use ffd::io;
use ffd::io::cli::Cli;
use ffd::io::layout_to_svg::layout_to_svg;
use ffd::io::output::FFDOutput;
use gridforge::io::{export, export_placed_item, import};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFDConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed FFDConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("input file has no usable file stem")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!("could not create solution folder: {:?}", args.solution_folder)
        })?;
    }

    let ext_save = io::read_save(&args.input_file)?;
    let (mut inventory, saved_sort_config, display_settings) = import(&ext_save)?;
    let sort_config = config.sort_override.unwrap_or(saved_sort_config);

    info!(
        "[FFD] repacking {} active containers with {sort_config:?}",
        inventory.layouts.len()
    );

    let start = Instant::now();
    let mut overflow = vec![];
    for lkey in inventory.layouts.keys().collect_vec() {
        let unplaced = inventory.auto_sort(lkey, &sort_config)?;
        overflow.push(unplaced);
    }

    let n_overflow = overflow.iter().map(|of| of.len()).sum::<usize>();
    info!(
        "[FFD] finished in {:.3}ms, {} items could not be placed",
        start.elapsed().as_secs_f64() * 1000.0,
        n_overflow
    );

    let output = FFDOutput {
        overflow: overflow
            .iter()
            .map(|of| of.iter().map(export_placed_item).collect())
            .collect(),
        save: export(&inventory, sort_config, &display_settings),
        run_time_ms: start.elapsed().as_millis() as u64,
        config,
    };

    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, &solution_path)?;

    for (i, layout) in inventory.layouts.values().enumerate() {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}_{i}.svg"));
        let svg = layout_to_svg(layout, &inventory.catalog, config.svg_draw_options);
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}
