use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use keycrumb::format::{self, OutputFormat};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render colon-delimited keys as breadcrumb trails", long_about = None)]
struct Args {
    #[clap(flatten)]
    verbose: Option<Verbosity>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    #[arg(short, long)]
    out_file: Option<PathBuf>,

    /// Keys to render. Read from stdin, one per line, if none are given
    keys: Vec<String>,
}

fn init_logger(args: &Args) {
    env_logger::Builder::new()
        .filter_level(
            args.verbose
                .as_ref()
                .map(|v| v.log_level_filter())
                .unwrap_or_else(|| log::LevelFilter::Error),
        )
        .format_module_path(false)
        .format_target(false)
        .init();
}

fn collect_keys(args: &Args) -> Result<Vec<String>> {
    if !args.keys.is_empty() {
        return Ok(args.keys.clone());
    }

    info!("Reading keys from stdin");
    io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("Unable to read keys from stdin")
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(&args);
    let keys = collect_keys(&args)?;
    info!("Rendering {} key(s) as {:?}", keys.len(), args.format);

    if let Some(out_file) = &args.out_file {
        let out_ctx = || format!("Unable to write output file: {}", out_file.display());
        info!("Writing output file: {}", out_file.display());
        let mut writer = BufWriter::new(File::create(out_file).with_context(out_ctx)?);
        format::write_keys(&mut writer, &keys, args.format).with_context(out_ctx)?;
    } else {
        debug!("Writing to stdout");
        format::write_keys(&mut io::stdout().lock(), &keys, args.format)
            .context("Unable to write to stdout")?;
    }

    info!("Done");

    Ok(())
}
