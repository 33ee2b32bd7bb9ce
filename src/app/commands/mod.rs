pub mod create_feature;
pub mod create_script;
pub mod init;
pub mod list;
