use anyhow::{Context, Result};
use clap::ValueEnum;
use stashmark::{CompileOptions, Compiler, OutputFormat};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    Html,
    Xhtml,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => OutputFormat::Html,
            Format::Xhtml => OutputFormat::Xhtml,
        }
    }
}

/// Compile a markup file into handlebars template text, written to `out`
/// or to stdout.
pub fn compile_cmd(input: &Path, out: Option<&Path>, format: Format, no_escape: bool) -> Result<()> {
    let src =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;

    let options = CompileOptions {
        format: format.into(),
        escape: !no_escape,
    };
    let compiled = Compiler::new(options)
        .compile(&src)
        .with_context(|| format!("failed to compile {}", input.display()))?;

    match out {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
            }
            fs::write(path, format!("{compiled}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Generated: {}", path.display());
        }
        None => println!("{compiled}"),
    }
    Ok(())
}
