//! CLI entry point for blogsmith

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogsmith::{commands, Site};

#[derive(Parser)]
#[command(name = "blogsmith")]
#[command(version)]
#[command(about = "A minimal static blog generator: Markdown in, JSON manifest and HTML out", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },

    /// Build the manifest, HTML pages and assets
    #[command(alias = "b")]
    Build {
        /// Rebuild whenever a Markdown source changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Build, then serve the distribution folder
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Remove the distribution folder and the manifest
    Clean,

    /// List posts from the manifest
    List,

    /// Print the full HTML view of one post
    Show {
        /// Slug of the post
        slug: String,
    },

    /// Convert one Markdown file to HTML on stdout
    Convert {
        /// Markdown file, front-matter allowed
        file: PathBuf,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "blogsmith=debug,info"
    } else {
        "blogsmith=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            commands::init::init_site(&target_dir)?;
            println!("Initialized blogsmith site in {:?}", target_dir);
        }

        Commands::New { title } => {
            let site = Site::new(&base_dir)?;
            site.new_post(&title)?;
        }

        Commands::Build { watch } => {
            let site = Site::new(&base_dir)?;
            site.build()?;

            if watch {
                tokio::task::spawn_blocking(move || commands::build::watch(&site)).await??;
            }
        }

        Commands::Serve { port, ip, r#static } => {
            let site = Site::new(&base_dir)?;
            site.build()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            blogsmith::server::start(&site, &ip, port, !r#static).await?;
        }

        Commands::Clean => {
            let site = Site::new(&base_dir)?;
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let site = Site::new(&base_dir)?;
            commands::list::run(&site)?;
        }

        Commands::Show { slug } => {
            let site = Site::new(&base_dir)?;
            commands::show::run(&site, &slug)?;
        }

        Commands::Convert { file } => {
            let path = if file.is_absolute() {
                file
            } else {
                base_dir.join(file)
            };
            commands::convert::run(&path)?;
        }

        Commands::Version => {
            println!("blogsmith version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
