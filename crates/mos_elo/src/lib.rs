//! MOS-to-Elo runner
//!
//! This crate connects score files on disk to `elo_core`:
//! - Reading newline-delimited CCR / ACR / difference scores
//! - Loading run settings from a TOML file
//! - Writing bootstrap reports as JSON and plain text
//!
//! # Usage
//!
//! ```bash
//! # Single pass over a CCR score file
//! cargo run -p mos_elo -- replay scores.txt
//!
//! # 5000 shuffled rounds, seeded, with a JSON report
//! cargo run -p mos_elo -- bootstrap scores.txt --rounds 5000 --seed 7 --out report.json
//!
//! # Batch bootstrap over two ACR score files
//! cargo run -p mos_elo -- bootstrap-acr mos_a.txt mos_b.txt --rounds 5000
//! ```

mod config;
mod corpus;
mod error;
mod report;

pub use config::*;
pub use corpus::*;
pub use error::*;
pub use report::*;
