// SPDX-License-Identifier: MIT OR Apache-2.0
//! The fixed part at the start of every line.

use crate::Level;
use crate::config::Prefixes;
use chrono::{DateTime, Local};
use std::fmt::Write;

/// Appends
/// `[<app> ]DD.MM.YYYY HH:MM:SS.mmm <L> [<pid>] [<msg>]: `
/// to `out`.
///
/// `prefixes.application` already carries its trailing space.
pub(crate) fn write_header(
    out: &mut String,
    level: Level,
    now: &DateTime<Local>,
    pid: u32,
    prefixes: &Prefixes,
) {
    out.push_str(&prefixes.application);
    // writing into a String can't fail
    let _ = write!(
        out,
        "{} {} [{}] {}: ",
        now.format("%d.%m.%Y %H:%M:%S%.3f"),
        level.as_char(),
        pid,
        prefixes.message,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2017, 8, 3, 12, 44, 15)
            .earliest()
            .unwrap()
            + chrono::Duration::milliseconds(7)
    }

    #[test]
    fn bare_header() {
        let mut out = String::new();
        write_header(&mut out, Level::Info, &fixed_time(), 26629, &Prefixes::default());
        assert_eq!(out, "03.08.2017 12:44:15.007 I [26629] : ");
    }

    #[test]
    fn header_with_prefixes() {
        let prefixes = Prefixes {
            application: "APP ".into(),
            message: "MSG".into(),
        };
        let mut out = String::new();
        write_header(&mut out, Level::Fatal, &fixed_time(), 1, &prefixes);
        assert_eq!(out, "APP 03.08.2017 12:44:15.007 E [1] MSG: ");
    }

    #[test]
    fn appends_to_existing_text() {
        let mut out = String::from(">");
        write_header(&mut out, Level::Debug, &fixed_time(), 2, &Prefixes::default());
        assert!(out.starts_with(">03.08.2017"));
        assert!(out.contains(" D [2] "));
    }
}
