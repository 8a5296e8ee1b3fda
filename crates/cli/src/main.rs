//! s3cli - CLI client for S3-compatible object storage
//!
//! Each invocation maps to a single call (or, for counting, a bounded
//! sequential series of calls) against the configured storage service.

use clap::Parser;

mod commands;
mod exit_code;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let exit_code = commands::execute(cli).await;

    std::process::exit(exit_code.as_i32());
}
