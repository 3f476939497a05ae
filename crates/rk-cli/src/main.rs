//! CLI frontend for roomkit.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "roomkit",
    about = "roomkit — load room-based game documents and compose their rooms",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log what the loader and compositor are doing
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a game document and summarize what it contains
    Build {
        /// Game document to load
        #[arg(short, long, default_value = "game.txt")]
        file: PathBuf,
    },

    /// Load a game document and compose every room
    Check {
        /// Game document to load
        #[arg(short, long, default_value = "game.txt")]
        file: PathBuf,
    },

    /// List entities in the loaded world
    List {
        /// Filter by entity kind (e.g. room, tile, sprite)
        kind: Option<String>,

        /// Game document to load
        #[arg(short, long, default_value = "game.txt")]
        file: PathBuf,
    },

    /// Show detailed information about an entity
    Show {
        /// Entity kind (e.g. room, tile, sprite)
        kind: String,

        /// Entity id
        id: String,

        /// Game document to load
        #[arg(short, long, default_value = "game.txt")]
        file: PathBuf,
    },

    /// Compose a room, or preview a single drawing, as a JSON visual tree
    Render {
        /// Id of the room (or drawing) to compose
        id: String,

        /// What to compose: room, tile, sprite, or item
        #[arg(short, long, default_value = "room")]
        kind: String,

        /// Palette for drawing previews (default: the first palette)
        #[arg(short, long)]
        palette: Option<String>,

        /// Units between neighbouring cells
        #[arg(long, default_value = "8")]
        tile_size: u32,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Game document to load
        #[arg(short, long, default_value = "game.txt")]
        file: PathBuf,
    },

    /// Export the loaded world as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Game document to load
        #[arg(short, long, default_value = "game.txt")]
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Build { file } => commands::build::run(&file),
        Commands::Check { file } => commands::check::run(&file),
        Commands::List { kind, file } => commands::list::run(&file, kind.as_deref()),
        Commands::Show { kind, id, file } => commands::show::run(&file, &kind, &id),
        Commands::Render {
            id,
            kind,
            palette,
            tile_size,
            output,
            file,
        } => commands::render::run(
            &file,
            &commands::render::RenderArgs {
                id: &id,
                kind: &kind,
                palette: palette.as_deref(),
                tile_size,
                output: output.as_deref(),
            },
        ),
        Commands::Export { output, file } => commands::export::run(&file, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
