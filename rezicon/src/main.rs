mod cli;
mod manifest;
mod pipeline;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use lib_icn::{
    FamilyPaths, ForkError, QuantizeOptions, ResourceFork, RezOptions, TransparencyRule,
};
use thiserror::Error;

use cli::{BuildArgs, Cli, Command};
use manifest::ManifestError;
use pipeline::BuildError;

#[derive(Error, Debug)]
enum CliError {
    #[error("expected six images in role order (ICN# icl4 icl8 ics# ics4 ics8), got {0}")]
    WrongImageCount(usize),

    #[error("either six image paths or --manifest is required")]
    MissingInputs,

    #[error("invalid --chroma-key {0:?}: expected six hex digits (RRGGBB)")]
    BadChromaKey(String),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("reading {path}: {source}")]
    ReadFork { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Fork(#[from] ForkError),

    #[error("writing {path}: {source}")]
    WritePayload { path: PathBuf, source: io::Error },
}

fn main() {
    lib_icn::init_logging();

    let cli = Cli::parse();
    if let Err(error) = run(cli.command) {
        eprintln!("rezicon: {}", error);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Build(args) => build(args),
        Command::List { fork } => list(&fork),
        Command::Extract {
            fork,
            os_type,
            id,
            out,
        } => extract(&fork, &os_type, id, &out),
    }
}

fn build(args: BuildArgs) -> Result<(), CliError> {
    let paths = match &args.manifest {
        Some(manifest_path) => manifest::load_manifest(manifest_path)?,
        None => family_from_images(&args.images)?,
    };

    let transparency = match &args.chroma_key {
        Some(key) => TransparencyRule::ChromaKey(parse_chroma_key(key)?),
        None => TransparencyRule::AlphaThreshold(args.alpha_threshold),
    };
    let quantize_options = QuantizeOptions {
        metric: args.metric.into(),
        transparency,
    };
    let rez_options = RezOptions {
        resource_id: args.id,
        resource_name: args.name.clone(),
    };

    pipeline::run_build(&paths, &quantize_options, &rez_options, &args.out)?;
    Ok(())
}

/// Maps the six positional paths onto roles. Arity is checked here, before
/// any file is opened.
fn family_from_images(images: &[PathBuf]) -> Result<FamilyPaths, CliError> {
    if images.is_empty() {
        return Err(CliError::MissingInputs);
    }
    if images.len() != 6 {
        return Err(CliError::WrongImageCount(images.len()));
    }

    Ok(FamilyPaths {
        large_mono: images[0].clone(),
        large_4bit: images[1].clone(),
        large_8bit: images[2].clone(),
        small_mono: images[3].clone(),
        small_4bit: images[4].clone(),
        small_8bit: images[5].clone(),
    })
}

fn parse_chroma_key(key: &str) -> Result<[u8; 3], CliError> {
    let digits = key.strip_prefix('#').unwrap_or(key);
    if digits.len() != 6 {
        return Err(CliError::BadChromaKey(key.to_string()));
    }

    let component = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| CliError::BadChromaKey(key.to_string()))
    };
    Ok([component(0..2)?, component(2..4)?, component(4..6)?])
}

fn list(path: &Path) -> Result<(), CliError> {
    let fork = parse_fork(path)?;

    println!("Found {} resources in {}", fork.entries.len(), path.display());
    for entry in &fork.entries {
        let name = if entry.name.is_empty() {
            String::new()
        } else {
            format!(" \"{}\"", entry.name)
        };
        println!(
            "{:4} ({:6})  size={:6}  attrs=0x{:02X}{}",
            entry.os_type,
            entry.id,
            entry.len(),
            entry.attrs,
            name
        );
    }
    Ok(())
}

fn extract(path: &Path, os_type: &str, id: i16, out: &Path) -> Result<(), CliError> {
    let fork = parse_fork(path)?;
    let entry = fork.find(os_type, id)?;

    fs::write(out, fork.payload(entry)).map_err(|source| CliError::WritePayload {
        path: out.to_path_buf(),
        source,
    })?;
    println!(
        "Wrote {}: type={} id={} size={}",
        out.display(),
        entry.os_type,
        entry.id,
        entry.len()
    );
    Ok(())
}

fn parse_fork(path: &Path) -> Result<ResourceFork, CliError> {
    let blob = fs::read(path).map_err(|source| CliError::ReadFork {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ResourceFork::parse(&blob)?)
}
