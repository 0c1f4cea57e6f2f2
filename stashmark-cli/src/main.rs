use anyhow::Result;
use clap::{Parser, Subcommand};
use stashmark_cli::{Format, compile_cmd};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stashmark", version, about = "Stashmark CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a markup file into a handlebars template.
    Compile {
        /// Path to the markup file
        input: PathBuf,
        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
        /// How contentless void elements close: `<img>` vs `<img />`
        #[arg(long, value_enum, default_value_t = Format::Xhtml)]
        format: Format,
        /// Do not mark emitted expressions as pre-escaped
        #[arg(long)]
        no_escape: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Compile {
            input,
            out,
            format,
            no_escape,
        } => compile_cmd(&input, out.as_deref(), format, no_escape)?,
    }
    Ok(())
}
