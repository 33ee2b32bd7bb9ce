//! Init command implementation.

use crate::domain::AppError;

use super::relative;

pub fn run_init(force: bool) -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    let outcome = crate::app::api::init_at(&root, force)?;

    println!(
        "✅ Exported {} templates to {}/",
        outcome.templates.len(),
        relative(&outcome.template_dir, &root)
    );
    if let Some(marker) = &outcome.marker {
        println!("  Index marker: {}", relative(marker, &root));
    }
    if let Some(config) = &outcome.config {
        println!("  Wrote {}", relative(config, &root));
    }
    Ok(())
}
