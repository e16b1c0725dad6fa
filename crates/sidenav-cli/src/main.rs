use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "sidenav",
    about = "sidenav — documentation sidebar index tooling",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint sidebar-items.js files under a doc tree (or a single file)
    Check {
        /// Doc root or index file (default: current directory)
        #[arg(short, long, default_value = ".")]
        path: String,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Re-serialize an index file into the generator's canonical shape
    Fmt {
        /// Path to a sidebar-items.js file
        #[arg(short, long)]
        path: String,
        /// Rewrite the file in place instead of printing
        #[arg(short, long)]
        write: bool,
    },
    /// List the entries of a single index file
    Show {
        /// Path to a sidebar-items.js file
        #[arg(short, long)]
        path: String,
    },
    /// Generate a sidenav.toml scaffold
    Init {
        /// Directory to write the manifest into (default: current directory)
        #[arg(short, long, default_value = ".")]
        path: String,
        /// Module path the index documents, e.g. mylib::net
        #[arg(short, long)]
        module: String,
    },
    /// Build sidebar-items.js from a sidenav.toml manifest
    Build {
        /// Directory containing sidenav.toml (default: current directory)
        #[arg(short, long, default_value = ".")]
        path: String,
        /// Output file (default: sidebar-items.js next to the manifest)
        #[arg(short, long)]
        out: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sidenav=info".parse()?)
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { path, format } => commands::check::check(&path, &format),
        Commands::Fmt { path, write } => commands::fmt::fmt(&path, write),
        Commands::Show { path } => commands::fmt::show(&path),
        Commands::Init { path, module } => commands::build::init(&path, &module),
        Commands::Build { path, out } => commands::build::build(&path, out.as_deref()),
    }
}
