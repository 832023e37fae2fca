//! Host readings for the `telemetry` board.
//!
//! - **Linux**: `/proc/stat`, `/proc/meminfo`, `/sys/class/power_supply`,
//!   `/sys/class/thermal`
//! - **Other**: zeroed readings, no battery, no sensor

use std::time::Duration;

use anyhow::Result;

/// Gap between the two CPU samples.
const CPU_SAMPLE_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Battery {
    pub percent: f64,
    pub charging: bool,
}

/// One snapshot of the host.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySample {
    pub cpu_percent: f64,
    pub ram_percent: f64,
    pub ram_used_gb: f64,
    pub battery: Option<Battery>,
    pub temperature_c: Option<f64>,
    /// OS display name.
    pub chassis: String,
}

/// Anything that can produce a [`TelemetrySample`].
///
/// An `Err` means no sample could be taken at all; individual readings that
/// are missing degrade to defaults instead.
pub trait Sensors {
    fn read(&mut self) -> Result<TelemetrySample>;
}

/// Reads the real host.
#[derive(Debug, Default)]
pub struct SystemSensors;

impl Sensors for SystemSensors {
    fn read(&mut self) -> Result<TelemetrySample> {
        let (total_kb, available_kb) = read_memory_info();
        let (ram_percent, ram_used_gb) = memory_usage(total_kb, available_kb);
        let sample = TelemetrySample {
            cpu_percent: read_cpu_percent(),
            ram_percent,
            ram_used_gb,
            battery: read_battery(),
            temperature_c: read_temperature(),
            chassis: chassis_name(std::env::consts::OS),
        };
        tracing::debug!(?sample, "telemetry sample");
        Ok(sample)
    }
}

/// Display name for `std::env::consts::OS`.
pub fn chassis_name(os: &str) -> String {
    match os {
        "linux" => "Linux".to_string(),
        "macos" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        other => other.to_string(),
    }
}

/// Used percentage and used GiB from total/available KB.
pub fn memory_usage(total_kb: u64, available_kb: u64) -> (f64, f64) {
    if total_kb == 0 {
        return (0.0, 0.0);
    }
    let used_kb = total_kb.saturating_sub(available_kb);
    let percent = (used_kb as f64 / total_kb as f64) * 100.0;
    let used_gb = used_kb as f64 / (1024.0 * 1024.0);
    (percent, used_gb)
}

/// Extracts `MemTotal` and `MemAvailable` (KB) from `/proc/meminfo` text.
pub fn parse_meminfo(contents: &str) -> (u64, u64) {
    let mut total_kb = 0u64;
    let mut available_kb = 0u64;

    for line in contents.lines() {
        if let Some(val) = line.strip_prefix("MemTotal:") {
            total_kb = parse_meminfo_value(val);
        } else if let Some(val) = line.strip_prefix("MemAvailable:") {
            available_kb = parse_meminfo_value(val);
        }
    }

    (total_kb, available_kb)
}

fn parse_meminfo_value(s: &str) -> u64 {
    s.trim()
        .trim_end_matches("kB")
        .trim()
        .parse::<u64>()
        .unwrap_or(0)
}

/// Aggregate jiffies from the `cpu` line of `/proc/stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuTimes {
    pub idle: u64,
    pub total: u64,
}

pub fn parse_cpu_times(stat: &str) -> Option<CpuTimes> {
    let line = stat.lines().find(|l| l.starts_with("cpu "))?;
    let values: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .filter_map(|v| v.parse().ok())
        .collect();
    if values.len() < 4 {
        return None;
    }
    // idle + iowait
    let idle = values[3] + values.get(4).copied().unwrap_or(0);
    Some(CpuTimes {
        idle,
        total: values.iter().sum(),
    })
}

/// Busy percentage between two samples.
pub fn cpu_percent_between(before: CpuTimes, after: CpuTimes) -> f64 {
    let total = after.total.saturating_sub(before.total);
    if total == 0 {
        return 0.0;
    }
    let idle = after.idle.saturating_sub(before.idle).min(total);
    ((total - idle) as f64 / total as f64) * 100.0
}

fn read_memory_info() -> (u64, u64) {
    #[cfg(target_os = "linux")]
    {
        match std::fs::read_to_string("/proc/meminfo") {
            Ok(contents) => parse_meminfo(&contents),
            Err(e) => {
                tracing::warn!("read /proc/meminfo: {e}");
                (0, 0)
            }
        }
    }
    #[cfg(not(target_os = "linux"))]
    {
        (0, 0)
    }
}

fn read_cpu_percent() -> f64 {
    #[cfg(target_os = "linux")]
    {
        let read = || {
            std::fs::read_to_string("/proc/stat")
                .ok()
                .and_then(|s| parse_cpu_times(&s))
        };
        let Some(before) = read() else {
            tracing::warn!("/proc/stat unavailable");
            return 0.0;
        };
        std::thread::sleep(CPU_SAMPLE_INTERVAL);
        read().map_or(0.0, |after| cpu_percent_between(before, after))
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = CPU_SAMPLE_INTERVAL;
        0.0
    }
}

fn read_battery() -> Option<Battery> {
    #[cfg(target_os = "linux")]
    {
        let entries = std::fs::read_dir("/sys/class/power_supply").ok()?;
        for entry in entries.flatten() {
            let path = entry.path();
            let kind = std::fs::read_to_string(path.join("type")).unwrap_or_default();
            if kind.trim() != "Battery" {
                continue;
            }
            let Some(percent) = std::fs::read_to_string(path.join("capacity"))
                .ok()
                .and_then(|s| s.trim().parse::<f64>().ok())
            else {
                continue;
            };
            let status = std::fs::read_to_string(path.join("status")).unwrap_or_default();
            return Some(Battery {
                percent,
                charging: matches!(status.trim(), "Charging" | "Full"),
            });
        }
        None
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Parses a sysfs thermal reading in millidegrees Celsius.
pub fn parse_millidegrees(raw: &str) -> Option<f64> {
    raw.trim().parse::<i64>().ok().map(|m| m as f64 / 1000.0)
}

fn read_temperature() -> Option<f64> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/sys/class/thermal/thermal_zone0/temp")
            .ok()
            .and_then(|raw| parse_millidegrees(&raw))
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}
