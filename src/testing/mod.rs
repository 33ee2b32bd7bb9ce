mod memory_asset_store;
mod mock_template_store;

pub use memory_asset_store::{MemoryAssetStore, StoreCall};
pub use mock_template_store::MockTemplateStore;
