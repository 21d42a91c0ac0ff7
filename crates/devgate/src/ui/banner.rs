//! Startup banner for the dev and preview servers.

use crate::config::Mode;
use owo_colors::OwoColorize;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// What the server banner reports.
#[derive(Debug, Clone)]
pub struct ServerBanner<'a> {
    /// "dev" or "preview"
    pub kind: &'a str,
    pub addr: SocketAddr,
    pub root: &'a Path,
    pub mode: Mode,
    pub guard: bool,
    pub startup: Duration,
}

/// URL a browser should use for `addr`.
///
/// Wildcard binds (`0.0.0.0`, `::`) are shown as `localhost`.
///
/// ```
/// use devgate::ui::server_url;
///
/// assert_eq!(server_url("0.0.0.0:5173".parse().unwrap()), "http://localhost:5173/");
/// assert_eq!(server_url("127.0.0.1:5173".parse().unwrap()), "http://127.0.0.1:5173/");
/// ```
pub fn server_url(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://localhost:{}/", addr.port())
    } else {
        format!("http://{}/", addr)
    }
}

impl ServerBanner<'_> {
    /// Lines of the banner without styling.
    pub fn lines(&self) -> Vec<(String, String)> {
        vec![
            ("Local".to_string(), server_url(self.addr)),
            ("Root".to_string(), self.root.display().to_string()),
            ("Mode".to_string(), self.mode.to_string()),
            (
                "Guard".to_string(),
                if self.guard {
                    "Chrome 129 requests get a notice page".to_string()
                } else {
                    "off".to_string()
                },
            ),
        ]
    }
}

/// Print the banner to stderr.
pub fn print_server_banner(banner: &ServerBanner<'_>) {
    if !super::colors_enabled() {
        eprintln!("\n  devgate {} ready in {}\n", banner.kind, format_duration(banner.startup));
        for (label, value) in banner.lines() {
            eprintln!("  ➜ {:<6} {}", label, value);
        }
        eprintln!();
        return;
    }

    eprintln!();
    eprintln!(
        "  {} {} ready in {}",
        "devgate".green().bold(),
        banner.kind.bold(),
        format_duration(banner.startup).bold()
    );
    eprintln!();
    for (label, value) in banner.lines() {
        eprintln!("  {} {:<6} {}", "➜".green(), label.bold(), value.cyan());
    }
    eprintln!();
}

/// Format a duration for humans.
///
/// ```
/// use std::time::Duration;
/// use devgate::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
