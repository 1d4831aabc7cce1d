//! Version command implementation

use crate::bootstrap::default_plan;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    for line in version_lines() {
        println!("{line}");
    }
    Ok(())
}

/// Version banner, toolchain floor and the operations this build performs
fn version_lines() -> Vec<String> {
    let mut lines = vec![
        format!("evm-bootstrap {}", env!("CARGO_PKG_VERSION")),
        String::new(),
        "Build info:".to_string(),
        format!("  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION")),
        format!("  Profile: {}", build_profile()),
        String::new(),
        "Bootstrap targets:".to_string(),
    ];
    lines.extend(default_plan().iter().map(|op| format!("  {op}")));
    lines
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
