mod asset_store;
mod name_input;
mod template_store;

pub use asset_store::AssetStore;
pub use name_input::NameInput;
pub use template_store::TemplateStore;
