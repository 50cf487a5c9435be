//! Host context printed ahead of a run
//!
//! Everything here goes to stderr; stdout carries only the report.

use colored::*;

/// Brand string of the CPU running the benchmark
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn cpu_brand() -> String {
    raw_cpuid::CpuId::new()
        .get_processor_brand_string()
        .map(|brand| brand.as_str().trim().to_string())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
pub fn cpu_brand() -> String {
    "Unknown".to_string()
}

/// Lines of the system information block, without styling
pub fn system_info_lines() -> Vec<String> {
    let os = os_info::get();
    vec![
        format!("Version: {}", crate::VERSION),
        format!("OS: {} {}", os.os_type(), os.version()),
        format!("CPU: {}", cpu_brand()),
    ]
}

pub fn print_system_info() {
    eprintln!("{}", "System Information".bold().yellow());
    eprintln!("━━━━━━━━━━━━━━━━━━━");
    for line in system_info_lines() {
        eprintln!("{}", line);
    }
    eprintln!();
}
