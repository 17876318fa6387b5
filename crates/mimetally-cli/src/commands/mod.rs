use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mimetally_core::counts::sum_counts;
use mimetally_core::discover::find_file;
use mimetally_core::{Pipeline, RunSummary};

use crate::cli::{ClassifyArgs, Commands, RunArgs, SumArgs};

pub(crate) fn run_from_root(root: &Path, command: Option<Commands>) -> Result<()> {
    match command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run_batch(root, &args),
        Commands::Sum(args) => run_sum(root, &args),
        Commands::Classify(args) => run_classify(root, &args),
    }
}

fn run_batch(root: &Path, args: &RunArgs) -> Result<()> {
    let pipeline = Pipeline::new(root, &args.mapping)
        .with_context(|| format!("failed to load mapping '{}'", args.mapping))?;
    let summary = pipeline.run().context("batch run failed")?;

    if args.json {
        return print_json(&summary);
    }
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    for env in &summary.environments {
        if !env.found {
            println!("File not found: {}", env.input_file);
            continue;
        }
        println!(
            "Sum of counts for possible mime type matches for {}: {}\n",
            env.environment, env.potential_sum
        );
        println!(
            "Sum of counts for valid mime type matches for {}: {}\n",
            env.environment, env.valid_sum
        );
        println!(
            "Sum of counts for invalid mime type matches for {}: {}\n",
            env.environment, env.invalid_sum
        );
    }
    println!("Total count across all files: {}\n", summary.total_count);
}

fn run_sum(root: &Path, args: &SumArgs) -> Result<()> {
    let path = resolve_under_root(root, &args.file)
        .with_context(|| format!("count file not found: {}", args.file))?;
    let total = sum_counts(&path)?;
    println!("{total}");
    Ok(())
}

fn run_classify(root: &Path, args: &ClassifyArgs) -> Result<()> {
    let pipeline = Pipeline::new(root, &args.mapping)
        .with_context(|| format!("failed to load mapping '{}'", args.mapping))?;
    print_json(&pipeline.classify_entry(&args.entry))
}

/// Case-insensitive lookup in the root first, literal path second.
fn resolve_under_root(root: &Path, name: &str) -> Result<PathBuf> {
    if let Some(path) = find_file(root, name)? {
        return Ok(path);
    }
    let direct = root.join(name);
    if direct.is_file() {
        return Ok(direct);
    }
    anyhow::bail!("no such file under {}", root.display());
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
