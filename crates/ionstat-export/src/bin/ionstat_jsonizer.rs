//! `ionstat-jsonizer` — write ionstat `*param` scoring-model files as
//! self-describing JSON documents.
//!
//! Usage:
//!   ionstat-jsonizer <params-dir> <output-dir>
//!
//! The output dir must exist and be empty. Exit codes: 1 usage or
//! load/encode failure, 2 params dir is not a directory, 3 output dir is
//! not an empty directory, 4 write failure.

use std::path::Path;

use ionstat_export::export::{export_dir, ExportError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Please provide the params dir and an output dir as arguments!");
        std::process::exit(1);
    }

    match export_dir(Path::new(&args[1]), Path::new(&args[2])) {
        Ok(summary) => {
            println!("Wrote {} file(s)", summary.written.len());
        }
        Err(ExportError::NotADirectory(path)) => {
            eprintln!("Provided argument is not a directory: {}", path.display());
            std::process::exit(2);
        }
        Err(ExportError::OutputNotEmpty(path)) => {
            eprintln!(
                "Output dir is not an empty directory. Refusing: {}",
                path.display()
            );
            std::process::exit(3);
        }
        Err(ExportError::Io(e)) => {
            eprintln!("Error writing file! {e}");
            std::process::exit(4);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
