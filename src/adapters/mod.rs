pub mod directory_template_store;
pub mod dry_run_asset_store;
pub mod embedded_templates;
pub mod filesystem_asset_store;
pub mod terminal_name_input;
