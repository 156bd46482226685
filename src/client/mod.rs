pub mod logs;
pub mod restart;
pub mod status;
