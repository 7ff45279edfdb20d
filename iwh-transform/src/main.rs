use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use iwh_transform::app::TransformUseCase;
use iwh_transform::infra::{CsvRecordSource, CsvWarehouseSink};
use iwh_transform::observability::logging;
use iwh_transform::pipeline::transform_config::TransformConfig;

#[derive(Parser)]
#[command(name = "iwh-transform")]
#[command(about = "Internship warehouse normalization and entity-resolution stage")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full transform: staged raw CSVs in, six export tables out
    Transform {
        /// Directory holding the staged raw CSVs from the scraper
        #[arg(long)]
        input_dir: PathBuf,
        /// Directory to write the six export tables into
        #[arg(long)]
        output_dir: PathBuf,
        /// Optional TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    logging::init_logging();

    match cli.command {
        Commands::Transform {
            input_dir,
            output_dir,
            config,
            json,
        } => {
            let config = match config {
                Some(path) => TransformConfig::from_file(&path)?,
                None => TransformConfig::default(),
            };
            info!(
                input_dir = %input_dir.display(),
                output_dir = %output_dir.display(),
                "Running transform stage"
            );

            let source = Box::new(CsvRecordSource::new(input_dir));
            let sink = Box::new(CsvWarehouseSink::new(output_dir));
            let use_case = TransformUseCase::new(source, sink, config);
            let summary = use_case.run().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "✅ Run {} completed: {} internships, {} companies, {} locations, {} industries",
                    summary.run_id,
                    summary.internships,
                    summary.companies,
                    summary.locations,
                    summary.industries
                );
            }
        }
    }

    Ok(())
}
