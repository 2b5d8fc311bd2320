use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// Swagger generator - build a Swagger 2.0 document from an application's routes and controller doc comments
#[derive(Parser, Debug)]
#[command(name = "swagger-from-routes")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the application root
    #[arg(value_name = "PROJECT_PATH")]
    pub project_path: PathBuf,

    /// Route manifest (JSON output of `php artisan route:list --json`)
    #[arg(short = 'r', long = "routes", value_name = "FILE")]
    pub routes_path: PathBuf,

    /// YAML configuration file (defaults to <PROJECT_PATH>/swagger.yaml when present)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Controller source directory (defaults to <PROJECT_PATH>/app)
    #[arg(short = 's', long = "source", value_name = "DIR")]
    pub source_path: Option<PathBuf>,

    /// Storage root receiving appDoc/resource.json (defaults to <PROJECT_PATH>/storage)
    #[arg(short = 'o', long = "storage", value_name = "DIR")]
    pub storage_path: Option<PathBuf>,

    /// Print the document to stdout instead of writing the output file
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CliArgs {
    pub fn source_dir(&self) -> PathBuf {
        self.source_path
            .clone()
            .unwrap_or_else(|| self.project_path.join("app"))
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(|| self.project_path.join("storage"))
    }
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.project_path.is_dir() {
        anyhow::bail!(
            "Project path is not a directory: {}",
            args.project_path.display()
        );
    }

    if !args.routes_path.is_file() {
        anyhow::bail!(
            "Route manifest does not exist: {}",
            args.routes_path.display()
        );
    }

    let source = args.source_dir();
    if !source.is_dir() {
        anyhow::bail!("Source path is not a directory: {}", source.display());
    }

    info!("Project path: {}", args.project_path.display());
    info!("Route manifest: {}", args.routes_path.display());
    info!("Controller sources: {}", source.display());
    if args.stdout {
        info!("Output: stdout");
    } else {
        info!("Storage root: {}", args.storage_dir().display());
    }

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::adapter::manifest::RouteManifest;
    use crate::adapter::php::DocIndex;
    use crate::config::{self, ApiConfig};
    use crate::openapi_builder::DocumentBuilder;
    use crate::serializer::{serialize_json, serialize_json_pretty, write_document};

    info!("Starting Swagger document generation...");

    // Step 1: Configuration, failing before any document work
    config::load_dotenv(&args.project_path);
    let api_config = ApiConfig::resolve(args.config_path.as_deref(), &args.project_path)?;
    let app_url = config::app_url_from_env();
    let mut builder = DocumentBuilder::initialize(api_config, app_url.as_deref())?;

    // Step 2: Index controller doc comments
    info!("Indexing controller sources...");
    let docs = DocIndex::from_directory(&args.source_dir())?;
    info!("Found {} documented controller methods", docs.len());

    // Step 3: Walk the route table
    info!("Processing routes...");
    let manifest = RouteManifest::new(&args.routes_path);
    let summary = builder.run(&manifest, &docs)?;
    let document = builder.build();

    // Step 4: Output
    if args.stdout {
        println!("{}", serialize_json_pretty(&document)?);
    } else {
        let storage = args.storage_dir();
        info!("Writing output under: {}", storage.display());
        let written = write_document(&serialize_json(&document)?, &storage)?;
        info!("Successfully wrote Swagger document to {}", written.display());
    }

    info!("Generation complete!");
    info!("Summary:");
    info!("  - Routes processed: {}", summary.routes);
    info!("  - Operations written: {}", summary.operations);
    info!("  - Routes without annotations: {}", summary.skipped);
    info!("  - Paths: {}", document.paths.len());

    Ok(())
}
