extern crate env_logger;
#[macro_use]
extern crate log;
extern crate shlex;

use std::env;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use fuzzrank::RankOptions;
use fuzzrank::output::render;
use fuzzrank::util::read_lines;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // if downstream pipe is closed, exit silently
            if err
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
            {
                std::process::exit(0)
            }
            eprintln!("{err:?}");
            std::process::exit(2)
        }
    }
}

fn parse_args() -> RankOptions {
    let mut args: Vec<String> = env::args().take(1).collect();
    args.extend(
        env::var("FZR_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    RankOptions::parse_from(args)
}

fn read_candidates(opts: &RankOptions) -> Result<Vec<String>> {
    if !opts.candidates.is_empty() {
        return Ok(opts.candidates.clone());
    }
    match &opts.input {
        Some(path) => {
            let file = File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
            read_lines(BufReader::new(file)).wrap_err_with(|| format!("failed to read {}", path.display()))
        }
        None => read_lines(io::stdin().lock()).wrap_err("failed to read stdin"),
    }
}

fn real_main() -> Result<i32> {
    color_eyre::install()?;
    let opts = parse_args();

    //------------------------------------------------------------------------------
    // read candidates from args, file or pipe
    let candidates = read_candidates(&opts)?;
    debug!("read {} candidates", candidates.len());

    //------------------------------------------------------------------------------
    // rank and output
    let lines = render(&opts, &candidates);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    Ok(if lines.is_empty() { 1 } else { 0 })
}
