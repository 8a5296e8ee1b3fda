//! CLI command definitions and execution
//!
//! Each subcommand validates its own flags through clap, issues one request
//! (or, for count-objects, a sequential series) through the shared client,
//! and prints a result. The client is built once per invocation and handed
//! to the selected handler by reference.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use s3cli_core::Settings;
use s3cli_s3::{HeaderInjector, S3Client};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod complete_multipart_upload;
mod completions;
mod count_objects;
mod create_bucket;
mod create_multipart_upload;
mod delete_object;
mod list_objects;
mod put_object;
mod upload_part;

/// s3cli - CLI client for S3-compatible object storage
///
/// Maps each invocation to a single call against the configured storage
/// service. Configuration comes from `<config dir>/s3cli/config` and the
/// process environment.
#[derive(Parser, Debug)]
#[command(name = "s3cli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Disable the running counter
    #[arg(long, global = true, default_value = "false")]
    pub no_progress: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a bucket
    CreateBucket(create_bucket::CreateBucketArgs),

    /// Upload a local file as one object
    PutObject(put_object::PutObjectArgs),

    /// Delete an object
    DeleteObject(delete_object::DeleteObjectArgs),

    /// List the first page of objects in a bucket
    ListObjects(list_objects::ListObjectsArgs),

    /// Count all objects in a bucket, following pagination
    CountObjects(count_objects::CountObjectsArgs),

    /// Start a multipart upload and print its upload id
    CreateMultipartUpload(create_multipart_upload::CreateMultipartUploadArgs),

    /// Upload a local file as one part of a multipart upload
    UploadPart(upload_part::UploadPartArgs),

    /// Complete a multipart upload from a parts file
    CompleteMultipartUpload(complete_multipart_upload::CompleteMultipartUploadArgs),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        no_progress: cli.no_progress,
        quiet: cli.quiet,
    };
    let formatter = Formatter::new(output_config.clone());

    // Completions need neither configuration nor a client.
    let command = match cli.command {
        Commands::Completions(args) => return completions::execute(args),
        other => other,
    };

    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    init_tracing(settings.debug);
    tracing::debug!(endpoint = %settings.endpoint_url, "configuration loaded");

    // Environment snapshot for header injection is taken once, here.
    let injector = HeaderInjector::from_env(settings.replace_underscores_with_dashes);

    let client = match S3Client::new(&settings, injector).await {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&format!("Failed to create S3 client: {e}"));
            return ExitCode::from_error(&e);
        }
    };

    match command {
        Commands::CreateBucket(args) => create_bucket::execute(args, &client, output_config).await,
        Commands::PutObject(args) => put_object::execute(args, &client, output_config).await,
        Commands::DeleteObject(args) => delete_object::execute(args, &client, output_config).await,
        Commands::ListObjects(args) => list_objects::execute(args, &client, output_config).await,
        Commands::CountObjects(args) => count_objects::execute(args, &client, output_config).await,
        Commands::CreateMultipartUpload(args) => {
            create_multipart_upload::execute(args, &client, output_config).await
        }
        Commands::UploadPart(args) => upload_part::execute(args, &client, output_config).await,
        Commands::CompleteMultipartUpload(args) => {
            complete_multipart_upload::execute(args, &client, output_config).await
        }
        // Returned before configuration was loaded.
        Commands::Completions(args) => completions::execute(args),
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
