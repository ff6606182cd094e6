//! Chart command handler
//!
//! Loads plan JSON files and renders one chart per file, as SVG or PNG.

use sap_chart::config::Config;
use sap_chart::core::{
    chart::{layout_program, render_svg, write_png, ChartFormat, Theme},
    loader::load_plan_json,
    models::Program,
};
use sap_chart::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Fallback pixels-per-unit when neither CLI nor config provide a scale
const DEFAULT_SCALE: f32 = 40.0;

/// Options resolved from CLI flags and config for one chart run
pub struct ChartOptions<'a> {
    /// Requested format string (falls back to config `format`, then svg)
    pub format: Option<&'a str>,
    /// Requested pixel scale (falls back to config `scale`)
    pub scale: Option<f32>,
    /// Print SVG to stdout instead of writing a file
    pub to_stdout: bool,
}

/// Run the chart command for one or more input files.
///
/// # Arguments
/// * `input_files` - Paths to plan JSON files
/// * `output_files` - Optional output paths; must match inputs 1:1 when provided
/// * `options` - Format/scale/stdout options resolved from CLI flags
/// * `config` - Configuration containing defaults
/// * `verbose` - Whether to print a per-plan summary
pub fn run(
    input_files: &[PathBuf],
    output_files: &[PathBuf],
    options: &ChartOptions,
    config: &Config,
    verbose: bool,
) {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return;
    }

    if !output_files.is_empty() && output_files.len() != input_files.len() {
        eprintln!(
            "✗ When using -o/--output, provide one output path per input file ({} inputs, {} outputs).",
            input_files.len(),
            output_files.len()
        );
        return;
    }

    if options.to_stdout && input_files.len() > 1 {
        eprintln!("✗ --stdout supports a single input file.");
        return;
    }

    for (idx, input_file) in input_files.iter().enumerate() {
        let output_file = output_files.get(idx).map(PathBuf::as_path);
        if let Err(err) = render_single(input_file, output_file, options, config, verbose) {
            error!("Chart rendering failed for {}: {err}", input_file.display());
            eprintln!("{err}");
        }
    }
}

/// Resolve the effective chart format from CLI flag or config
fn resolve_format(options: &ChartOptions, config: &Config) -> Result<ChartFormat, String> {
    let format_str = options
        .format
        .map(str::to_string)
        .or_else(|| {
            if config.chart.format.is_empty() {
                None
            } else {
                Some(config.chart.format.clone())
            }
        })
        .unwrap_or_else(|| "svg".to_string());

    ChartFormat::from_str(&format_str).map_err(|e| format!("✗ {e}. Use: svg or png"))
}

/// Render one plan file to its chart
fn render_single(
    input_file: &Path,
    output_file: Option<&Path>,
    options: &ChartOptions,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let format = resolve_format(options, config)?;
    let scale = options.scale.unwrap_or(if config.chart.scale > 0.0 {
        config.chart.scale
    } else {
        DEFAULT_SCALE
    });

    let program = load_plan_json(input_file).map_err(|e| {
        error!("Failed to load plan {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    if verbose {
        println!("✓ Plan loaded successfully from: {}", input_file.display());
    } else {
        info!("Plan loaded: {}", input_file.display());
    }

    let theme = if config.chart.font_family.is_empty() {
        Theme::default()
    } else {
        Theme::with_font_family(&config.chart.font_family)
    };

    let layout = layout_program(&program);
    let svg = render_svg(&layout, &theme, scale);

    if options.to_stdout {
        if format != ChartFormat::Svg {
            return Err("✗ --stdout only supports the svg format.".to_string());
        }
        print!("{svg}");
        if verbose {
            print_summary(&program);
        }
        return Ok(());
    }

    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let charts_dir = PathBuf::from(&config.paths.charts_dir);
        std::fs::create_dir_all(&charts_dir).map_err(|e| {
            format!(
                "✗ Failed to create output directory {}: {e}",
                charts_dir.display()
            )
        })?;

        let filename = input_file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("plan")
            .to_string();
        charts_dir.join(format!("{filename}.{}", format.extension()))
    };

    match format {
        ChartFormat::Svg => {
            std::fs::write(&final_output_path, &svg).map_err(|e| {
                format!(
                    "✗ Failed to write chart to {}: {e}",
                    final_output_path.display()
                )
            })?;
        }
        ChartFormat::Png => {
            write_png(&svg, &final_output_path, &theme.font_family).map_err(|e| {
                format!(
                    "✗ Failed to write chart to {}: {e}",
                    final_output_path.display()
                )
            })?;
        }
    }

    println!("✓ Chart generated: {}", final_output_path.display());
    info!("Chart exported to: {}", final_output_path.display());

    if verbose {
        print_summary(&program);
    }

    Ok(())
}

/// Print a summary of the rendered plan
fn print_summary(program: &Program) {
    println!("\n=== Plan Summary for {} ===", program.name);
    for year in &program.years {
        println!(
            "{}: {} courses, {:.1} credits",
            year.label,
            year.courses.len(),
            year.total_credits()
        );
    }
    println!(
        "Total: {} courses, {:.1} credits",
        program.course_count(),
        program.total_credits()
    );
}
