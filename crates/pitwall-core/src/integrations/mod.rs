//! External collaborators: the OS shell, the headline feed and the speed probe.
//!
//! The dispatcher only sees the traits below. Async implementations are
//! driven through a [`tokio::runtime::Handle`] so the prompt loop itself
//! stays synchronous.

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDateTime;

pub mod feed;
pub mod probe;
pub mod shell;

pub use feed::RssFeed;
pub use probe::HttpProbe;
pub use shell::{DisabledShell, SystemShell};

/// Runs a raw command line in the OS command interpreter.
///
/// Output streams straight to the inherited stdio; the exit status is not
/// inspected. `Err` means the interpreter could not be launched at all.
pub trait CommandRunner {
    fn run(&mut self, command_line: &str, cwd: &Path) -> Result<()>;
}

/// One headline from the paddock feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub published: Option<NaiveDateTime>,
    pub title: String,
    pub link: String,
    pub source: String,
}

impl Headline {
    /// `M/D HH:MM`, or `LIVE` without a usable timestamp.
    pub fn time_label(&self) -> String {
        match self.published {
            Some(ts) => ts.format("%-m/%-d %H:%M").to_string(),
            None => "LIVE".to_string(),
        }
    }
}

/// Source of headlines. An empty list is a valid answer.
pub trait HeadlineFeed {
    fn fetch(&mut self) -> Result<Vec<Headline>>;
}

/// Result of a bandwidth probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedReport {
    pub ping_ms: f64,
    pub download_mbps: f64,
    pub upload_mbps: f64,
}

impl SpeedReport {
    /// Power unit rating by download speed.
    pub fn rating(&self) -> &'static str {
        let down = self.download_mbps;
        if down > 800.0 {
            "JET ENGINE"
        } else if down > 200.0 {
            "MERCEDES W11"
        } else if down > 50.0 {
            "V6 HYBRID"
        } else {
            "TRACTOR"
        }
    }
}

/// Measures latency and throughput.
pub trait NetworkProbe {
    fn measure(&mut self) -> Result<SpeedReport>;
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn headline(published: Option<NaiveDateTime>) -> Headline {
        Headline {
            published,
            title: "t".into(),
            link: "l".into(),
            source: "s".into(),
        }
    }

    #[test]
    fn test_time_label() {
        let ts = NaiveDate::from_ymd_opt(2026, 3, 8)
            .unwrap()
            .and_hms_opt(5, 7, 0)
            .unwrap();
        assert_eq!(headline(Some(ts)).time_label(), "3/8 05:07");
        assert_eq!(headline(None).time_label(), "LIVE");
    }

    #[test]
    fn test_rating_thresholds() {
        let report = |down| SpeedReport {
            ping_ms: 10.0,
            download_mbps: down,
            upload_mbps: 1.0,
        };
        assert_eq!(report(50.0).rating(), "TRACTOR");
        assert_eq!(report(50.1).rating(), "V6 HYBRID");
        assert_eq!(report(200.1).rating(), "MERCEDES W11");
        assert_eq!(report(900.0).rating(), "JET ENGINE");
    }
}
