pub mod init;
pub mod plan;
pub mod run;
mod shared;
