pub mod report;
pub mod system_info;
