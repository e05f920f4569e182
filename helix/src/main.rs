use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use tracing::info;

use helix::diff::{compare_chromosome_with_opt, DiffOpt};
use helix::report::{DiffReport, ReportMeta};
use helix::source::{ChromosomeSource, FastaPerson};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "helix", author, version, about = "Position-aligned mismatch diff of genomic sequences", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare one chromosome of two FASTA files and print mismatch intervals (BED)
    Diff {
        /// First FASTA file (one record per chromosome)
        a: String,
        /// Second FASTA file
        b: String,
        /// Chromosome (record) index, 0-based
        #[arg(short, long, default_value_t = 0)]
        chromosome: usize,
        /// Window size in bases; <= 0 compares the whole chromosome at once
        #[arg(short, long, default_value_t = -1, allow_hyphen_values = true)]
        window: i64,
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
        /// Bytes per pull read from each source
        #[arg(long = "chunk-size", default_value_t = 1 << 16)]
        chunk_size: usize,
        /// Save the result as a binary report
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Print a saved report
    Show {
        report: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Diff { a, b, chromosome, window, threads, chunk_size, out } => {
            let opt = DiffOpt { window_size: window, threads };
            run_diff(&a, &b, chromosome, chunk_size, opt, out.as_deref())
        }
        Commands::Show { report } => run_show(&report),
    }
}

fn load_person(path: &str, chunk_size: usize) -> Result<FastaPerson> {
    let person = FastaPerson::from_path(path, chunk_size)
        .map_err(|e| anyhow::anyhow!("cannot read FASTA '{}': {}", path, e))?;
    if person.chromosome_count() == 0 {
        anyhow::bail!("FASTA file '{}' contains no sequences", path);
    }
    info!("{}: {} chromosomes", path, person.chromosome_count());
    Ok(person)
}

fn run_diff(
    path_a: &str,
    path_b: &str,
    chromosome: usize,
    chunk_size: usize,
    opt: DiffOpt,
    out_path: Option<&str>,
) -> Result<()> {
    let a = load_person(path_a, chunk_size)?;
    let b = load_person(path_b, chunk_size)?;

    let start = std::time::Instant::now();
    let intervals = compare_chromosome_with_opt(&a, &b, chromosome, &opt)?;
    info!(
        "chromosome {}: {} mismatch intervals in {:.2}s",
        chromosome,
        intervals.len(),
        start.elapsed().as_secs_f64()
    );

    let name = a.name(chromosome).unwrap_or("*").to_string();
    if let Some(desc) = a.description(chromosome) {
        info!("{}: {}", name, desc);
    }
    let mut report = DiffReport::new(chromosome, name, opt.window_size, intervals);
    report.set_meta(ReportMeta {
        source_a: Some(path_a.to_string()),
        source_b: Some(path_b.to_string()),
        created: Some(chrono::Utc::now().to_rfc3339()),
    });

    let stdout = std::io::stdout();
    let mut w = std::io::BufWriter::new(stdout.lock());
    report.write_bed(&mut w)?;
    w.flush()?;

    if let Some(p) = out_path {
        report
            .save_to_file(p)
            .map_err(|e| anyhow::anyhow!("cannot write report to '{}': {}", p, e))?;
        info!("report saved: {}", p);
    }
    Ok(())
}

fn run_show(path: &str) -> Result<()> {
    let report = DiffReport::load_from_file(path)
        .map_err(|e| anyhow::anyhow!("cannot load report '{}': {}", path, e))?;
    let stdout = std::io::stdout();
    let mut w = std::io::BufWriter::new(stdout.lock());
    report.write_bed(&mut w)?;
    w.flush()?;
    info!("chromosome: {} ({})", report.chromosome, report.name);
    info!("window: {}", report.window_size);
    info!("intervals: {}", report.intervals.len());
    info!("mismatched: {}", report.mismatched_positions());
    if let Some(created) = &report.meta.created {
        info!("created: {}", created);
    }
    Ok(())
}
