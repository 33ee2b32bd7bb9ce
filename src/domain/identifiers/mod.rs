mod base_name;
pub mod validation;

pub use base_name::BaseName;
