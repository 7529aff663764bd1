//! Command body: resolve the CLI into a generator and drive the sink.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use tracing::info;

use chronogen_format::PRESETS;
use chronogen_generate::{DateGenerator, GeneratorConfig, LineEnding, write_lines, write_to_path};

use crate::cli::Cli;

/// Sample templates shown by `--list-formats`, alongside the presets.
const TEMPLATE_SAMPLES: &[(&str, &str)] = &[
    ("YYYYMMDD", "Year-Month-Day (default ISO style)"),
    ("YYMMDD", "Short year, month, day"),
    ("YYYYMM", "Year-Month"),
    ("DDMMYYYY", "Day-Month-Year"),
    ("DDMMYY", "Day-Month-Short year"),
    ("MMDDYYYY", "Month-Day-Year"),
    ("MMDD", "Month-Day"),
    ("MM", "Month"),
    ("DD", "Day"),
];

/// Run the generation pipeline described by the parsed CLI.
pub fn run(cli: Cli) -> Result<()> {
    if cli.list_formats {
        print_formats();
        return Ok(());
    }
    let (Some(start), Some(end)) = (cli.start, cli.end) else {
        bail!("--start and --end are required unless --list-formats is provided");
    };

    let mut config = GeneratorConfig::new(start, end)
        .with_format(&cli.format)
        .with_separator(&cli.separator)
        .with_prefix(&cli.prefix)
        .with_suffix(&cli.suffix)
        .with_reverse(cli.reverse);
    if let Some(pattern) = cli.custom_pattern {
        config = config.with_custom_pattern(pattern);
    }
    if let Some(months) = cli.months {
        config = config.with_months(months);
    }
    if let Some(days) = cli.days {
        config = config.with_days(days);
    }
    if let Some(case) = cli.case {
        config = config.with_case(case);
    }

    let generator = DateGenerator::new(config)?;

    match cli.output {
        Some(path) => {
            let count = write_to_path(&generator, &path, cli.newline)
                .with_context(|| format!("failed to write wordlist: {}", path.display()))?;
            info!(path = %path.display(), lines = count, "generation complete");
        }
        None => {
            // The --newline flag applies to file output; stdout lines end with LF.
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_lines(&generator, &mut lock, LineEnding::Lf)
                .context("failed to write to stdout")?;
            lock.flush().context("failed to flush stdout")?;
        }
    }
    Ok(())
}

/// Print the preset table and sample templates to stdout.
fn print_formats() {
    println!("Presets:");
    for preset in PRESETS {
        println!("  {:<6} {:<10} {}", preset.key, preset.template, preset.description);
    }
    println!();
    println!("Sample templates:");
    for (template, description) in TEMPLATE_SAMPLES {
        println!("  {template}: {description}");
    }
}
