//! Static asset tooling

pub mod optimize;

pub use optimize::{
    optimize_dir, optimize_png, BatchReport, FileReport, OptimizeError,
};
