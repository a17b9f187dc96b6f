//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pkgcopy - package copy step
///
/// Copy a built software package to an explicit destination, or into a cache
/// directory under the package's own name.
#[derive(Parser, Debug)]
#[command(
    name = "pkgcopy",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Copies built software packages into place",
    long_about = "pkgcopy resolves a package path or glob pattern to exactly one file and \
                  copies it to an explicit destination, or into a cache directory under \
                  the source's own name. Made to run as a single step inside packaging \
                  pipelines.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  pkgcopy copy build/output.pkg --to dist/output.pkg\n    \
                  pkgcopy copy 'build/*.pkg' --cache-dir ~/Library/AutoPkg/Cache\n    \
                  pkgcopy copy --job step.yaml\n    \
                  pkgcopy copy 'build/*.pkg' --dry-run --cache-dir /tmp"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy a package to its destination
    Copy(CopyArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the copy command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Copy to an explicit destination:\n    pkgcopy copy build/output.pkg --to dist/output.pkg\n\n\
                  Resolve a glob and keep the source name:\n    pkgcopy copy 'build/*.pkg' --cache-dir /var/cache/pkgs\n\n\
                  Read the job from a file (no source argument):\n    pkgcopy copy --job step.yaml\n\n\
                  See what would happen without copying:\n    pkgcopy copy 'build/*.pkg' --to out.pkg --dry-run")]
pub struct CopyArgs {
    /// Package path or glob pattern. If not provided, the job file is read
    pub source: Option<String>,

    /// Explicit destination path for the copied package
    #[arg(long, value_name = "PATH")]
    pub to: Option<String>,

    /// Cache directory used to derive the destination when --to is absent
    #[arg(long, value_name = "DIR", env = "PKGCOPY_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Job file with source_pkg, pkg_path and cache_dir keys (YAML or JSON)
    #[arg(long, value_name = "FILE", default_value = "pkgcopy.yaml")]
    pub job: PathBuf,

    /// Resolve the copy and report it without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    pkgcopy completions --shell bash > ~/.bash_completion.d/pkgcopy\n\n\
                  Generate zsh completions:\n    pkgcopy completions --shell zsh > ~/.zfunc/_pkgcopy\n\n\
                  Generate fish completions:\n    pkgcopy completions --shell fish > ~/.config/fish/completions/pkgcopy.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
