//! Host identity: user@host header, OS name, kernel, uptime and shell

use std::env;
use std::fs;
use std::path::Path;
use sysinfo::System;

use crate::text::FieldStyle;

pub const OS_RELEASE_PATH: &str = "/etc/os-release";
pub const ISSUE_PATH: &str = "/etc/issue";
pub const UPTIME_PATH: &str = "/proc/uptime";

const UNKNOWN: &str = "unknown";

/// "user@hostname", with "unknown" standing in for either part
pub fn header() -> String {
    let user = user_name(
        env::var("USER").ok().as_deref(),
        env::var("LOGNAME").ok().as_deref(),
    );
    let host = System::host_name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());
    format!("{user}@{host}")
}

/// $USER, then $LOGNAME, skipping empty values
fn user_name(user: Option<&str>, logname: Option<&str>) -> String {
    [user, logname]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

/// Distribution name.
///
/// Tries PRETTY_NAME from os-release, then the first line of /etc/issue,
/// then whatever sysinfo reports.
pub fn os_name(os_release: &Path, issue: &Path) -> String {
    fs::read_to_string(os_release)
        .ok()
        .and_then(|content| pretty_name(&content))
        .or_else(|| {
            fs::read_to_string(issue)
                .ok()
                .and_then(|content| issue_name(&content))
        })
        .or_else(System::name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn pretty_name(os_release: &str) -> Option<String> {
    os_release
        .lines()
        .find(|line| line.starts_with("PRETTY_NAME="))
        .map(|line| FieldStyle::Equals.extract(line))
        .filter(|name| !name.is_empty())
}

/// First line of /etc/issue up to its first getty escape ("\n", "\l")
fn issue_name(issue: &str) -> Option<String> {
    let line = issue.lines().next()?;
    let name = line.split('\\').next().unwrap_or(line).trim_end();
    (!name.is_empty()).then(|| name.to_string())
}

/// Kernel release, e.g. "6.8.0-45-generic"
pub fn kernel() -> String {
    System::kernel_version()
        .filter(|release| !release.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Uptime read from /proc/uptime
pub fn uptime(path: &Path) -> String {
    let seconds = fs::read_to_string(path).ok().and_then(|content| {
        content
            .split_whitespace()
            .next()
            .and_then(|value| value.parse::<f64>().ok())
    });

    match seconds {
        Some(seconds) => format_uptime(seconds as u64),
        None => UNKNOWN.to_string(),
    }
}

/// "2 days, 3 hours, 1 minute"; days are left out when zero
pub fn format_uptime(seconds: u64) -> String {
    fn plural(count: u64, unit: &str) -> String {
        if count == 1 {
            format!("{count} {unit}")
        } else {
            format!("{count} {unit}s")
        }
    }

    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!(
            "{}, {}, {}",
            plural(days, "day"),
            plural(hours, "hour"),
            plural(minutes, "minute")
        )
    } else {
        format!("{}, {}", plural(hours, "hour"), plural(minutes, "minute"))
    }
}

/// Login shell name from $SHELL
pub fn shell() -> String {
    shell_name(env::var("SHELL").ok().as_deref())
}

fn shell_name(shell: Option<&str>) -> String {
    shell
        .filter(|path| !path.is_empty())
        .and_then(|path| Path::new(path).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn pretty_name_from_os_release() {
        let content = "NAME=\"Ubuntu\"\nPRETTY_NAME=\"Ubuntu 24.04.1 LTS\"\nID=ubuntu\n";
        assert_eq!(pretty_name(content).as_deref(), Some("Ubuntu 24.04.1 LTS"));
        assert_eq!(pretty_name("NAME=Alpine\n"), None);
    }

    #[test]
    fn issue_is_cut_at_escape() {
        assert_eq!(
            issue_name("Debian GNU/Linux 12 \\n \\l\n\n").as_deref(),
            Some("Debian GNU/Linux 12")
        );
        assert_eq!(issue_name("\\S\nKernel \\r\n"), None);
    }

    #[test]
    fn os_name_prefers_os_release_then_issue() {
        let dir = TempDir::new().unwrap();
        let os_release = dir.path().join("os-release");
        let issue = dir.path().join("issue");
        fs::write(&issue, "Slackware 15.0 \\n \\l\n").unwrap();

        assert_eq!(os_name(&os_release, &issue), "Slackware 15.0");

        fs::write(&os_release, "PRETTY_NAME=\"Arch Linux\"\n").unwrap();
        assert_eq!(os_name(&os_release, &issue), "Arch Linux");
    }

    #[test]
    fn os_name_is_never_empty() {
        let name = os_name(Path::new("/nonexistent/a"), Path::new("/nonexistent/b"));
        assert!(!name.is_empty());
    }

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(0), "0 hours, 0 minutes");
        assert_eq!(format_uptime(3_660), "1 hour, 1 minute");
        assert_eq!(format_uptime(86_400 + 2 * 3_600 + 5 * 60), "1 day, 2 hours, 5 minutes");
        assert_eq!(format_uptime(3 * 86_400), "3 days, 0 hours, 0 minutes");
    }

    #[test]
    fn uptime_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("uptime");
        fs::write(&path, "7265.31 28816.04\n").unwrap();
        assert_eq!(uptime(&path), "2 hours, 1 minute");
        assert_eq!(uptime(&dir.path().join("missing")), "unknown");
    }

    #[test]
    fn user_falls_back_to_logname_then_unknown() {
        assert_eq!(user_name(Some("kali"), Some("root")), "kali");
        assert_eq!(user_name(None, Some("root")), "root");
        assert_eq!(user_name(Some(""), Some("root")), "root");
        assert_eq!(user_name(None, None), "unknown");
    }

    #[test]
    fn shell_basename() {
        assert_eq!(shell_name(Some("/usr/bin/zsh")), "zsh");
        assert_eq!(shell_name(Some("")), "unknown");
        assert_eq!(shell_name(None), "unknown");
    }
}
