//! ionstat-export — writes ionstat scoring-model `*param` files in a JSON
//! representation.
//!
//! The scoring model itself lives in [`model`]; [`loader`] parses the
//! line-oriented `.param` text format into it, and [`export`] batches a
//! whole directory: every `*param` file is loaded, encoded through the
//! `jsonizer` engine, and written as `<file-name>.json` into an empty
//! output directory. The `ionstat-jsonizer` binary is a thin wrapper
//! mapping failures to exit codes.

pub mod export;
pub mod loader;
pub mod model;

pub use export::{export_dir, ExportError, ExportSummary};
pub use loader::{load_params, parse_params, ParamError};
pub use model::RankScorer;
