use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{classes_command, complete_command, locate_command, set_package_command};

#[derive(Parser, Debug)]
#[command(name = "css-suggestor")]
#[command(version, about = "Suggest CSS classes from an installed npm package", long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    RUST_LOG=debug                Enable debug logging\n    CSS_SUGGESTOR_PACKAGE=<name>  Override the configured package"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the classes provided by the active package
    #[command(visible_alias = "c")]
    Classes {
        /// Package to scan instead of the configured one
        #[arg(short, long)]
        package: Option<String>,

        /// Project directory (defaults to current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Print the catalog as JSON
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print completion items as JSON for a cursor position
    Complete {
        /// File with 1-based cursor position (e.g., src/App.tsx:12:27)
        filepath: String,

        /// Editor language id (defaults to a guess from the file extension)
        #[arg(short, long)]
        language: Option<String>,

        /// Package to scan instead of the configured one
        #[arg(short, long)]
        package: Option<String>,

        /// Project directory (defaults to the file's project)
        #[arg(long)]
        cwd: Option<String>,
    },
    /// Set the package to load classes from and reload
    SetPackage {
        /// npm package name (e.g., @groww-tech/mint-css)
        package: String,

        /// Project directory (defaults to current directory)
        #[arg(long)]
        cwd: Option<String>,
    },
    /// Show which stylesheet would be read for the active package
    Locate {
        /// Package to locate instead of the configured one
        #[arg(short, long)]
        package: Option<String>,

        /// Project directory (defaults to current directory)
        #[arg(long)]
        cwd: Option<String>,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Classes {
                package,
                cwd,
                verbose,
            } => classes_command(cwd.as_deref(), package.as_deref(), verbose),
            Commands::Complete {
                filepath,
                language,
                package,
                cwd,
            } => complete_command(
                &filepath,
                language.as_deref(),
                package.as_deref(),
                cwd.as_deref(),
            ),
            Commands::SetPackage { package, cwd } => set_package_command(&package, cwd.as_deref()),
            Commands::Locate { package, cwd } => locate_command(cwd.as_deref(), package.as_deref()),
        }
    }
}
