use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use cutplan::io::{export, import};
use cutplan::solver;
use ffd::config::FFDConfig;
use ffd::io;
use ffd::io::cli::Cli;
use ffd::io::layout_to_svg::layout_to_svg;
use ffd::io::output::Output;
use log::{info, warn};

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

    info!("Successfully parsed FFDConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("input file has no valid file stem")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = import::import(&ext_instance)?;
    let solution = solver::optimize(&instance, config.cut_config);

    {
        let output = Output {
            instance: ext_instance,
            solution: export::export(&instance, &solution),
            config,
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    for (i, layout) in solution.layouts.iter().enumerate() {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}_{i}.svg"));
        let svg = layout_to_svg(layout, &instance, config.svg_draw_options);

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
