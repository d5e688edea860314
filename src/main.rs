use anyhow::Context;
use tracing::info;

use hotbox::init_logging;

/// Load a hotbox file, validate it, and print a summary per hotbox.
fn main() -> anyhow::Result<()> {
    init_logging()?;

    let path = std::env::args()
        .nth(1)
        .context("usage: hotbox <hotboxes.json>")?;

    let hotboxes = hotbox::load_hotboxes(&path)
        .with_context(|| format!("failed to load hotbox file {path}"))?;
    hotbox::validate_unique_names(&hotboxes).context("hotbox file is invalid")?;

    info!(count = hotboxes.len(), %path, "loaded hotbox file");
    for data in &hotboxes {
        let interactive = data.shapes.iter().filter(|s| s.is_interactive()).count();
        println!(
            "{}: {}x{}, {} shapes ({} interactive){}{}",
            data.general.name,
            data.general.width,
            data.general.height,
            data.shapes.len(),
            interactive,
            if data.general.submenu { ", submenu" } else { "" },
            if data.general.aiming { ", aiming" } else { "" },
        );
    }
    Ok(())
}
