use clap::Parser;
use std::path::PathBuf;

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check the whole site:\n    docguard build\n\n\
                  Use a different config file:\n    docguard build --config site/mkdocs.yml\n\n\
                  List every page checked:\n    docguard -v build")]
pub struct BuildArgs {
    /// Site configuration file, relative to the root (defaults to mkdocs.yml)
    #[arg(long, short = 'f')]
    pub config: Option<PathBuf>,

    /// Mark the run as an incremental build (passed to the startup hook)
    #[arg(long)]
    pub dirty: bool,
}
