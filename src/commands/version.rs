//! Version command implementation

use docguard::error::Result;
use docguard::frontmatter::PERMITTED_KEYS;

/// Run version command
pub fn run() -> Result<()> {
    println!("docguard {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Permitted frontmatter keys: {}", PERMITTED_KEYS.join(", "));

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
