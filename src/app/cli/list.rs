use std::path::Path;

use crate::app::api;
use crate::domain::AppError;

use super::json_output;

pub fn run_list(templates: Option<&Path>, json: bool) -> Result<(), AppError> {
    let listing = api::list_templates(templates)?;
    if json {
        return json_output(&listing);
    }

    println!("Templates: {}", listing.location);
    for entry in &listing.entries {
        let status = if entry.available { "ok" } else { "missing" };
        let note = if entry.composite_part { "  (feature)" } else { "" };
        println!("  {:<18} {:<24} {}{}", entry.label, entry.kind.name(), status, note);
    }
    Ok(())
}
