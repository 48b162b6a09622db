pub mod formats;
pub mod generate;
pub mod init;
pub mod validate;
