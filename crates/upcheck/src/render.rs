//! Rendering of a check report as a grouped, colorized listing.

use std::io::{self, Write};

use console::Style;
use upcheck_client::{CheckReport, ServerStatus};

/// Style for a health state.
///
/// Anything that is neither `"up"` nor `"down"` is a transitional state and
/// renders in blue, informational rather than alarming.
pub fn status_style(status: &str) -> Style {
    match status {
        "up" => Style::new().green(),
        "down" => Style::new().red(),
        _ => Style::new().blue(),
    }
}

/// Write one line per server, in the order the status page reported them,
/// with a blank line whenever the upstream group changes.
///
/// An empty server list produces no output at all.
pub fn render_report<W: Write>(out: &mut W, report: &CheckReport) -> io::Result<()> {
    let mut previous_upstream: Option<&str> = None;

    for server in report.servers() {
        if previous_upstream.is_some_and(|prev| prev != server.upstream) {
            writeln!(out)?;
        }
        write_server(out, server)?;
        previous_upstream = Some(&server.upstream);
    }

    Ok(())
}

fn write_server<W: Write>(out: &mut W, server: &ServerStatus) -> io::Result<()> {
    writeln!(
        out,
        "[{}] {} - {} {}",
        status_style(&server.status).apply_to(&server.status),
        server.upstream,
        server.full_name(),
        server.counters(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use upcheck_client::CheckSummary;

    fn server(upstream: &str, status: &str) -> ServerStatus {
        ServerStatus {
            upstream: upstream.into(),
            name: "10.0.0.1:80".into(),
            status: status.into(),
            check_type: "http".into(),
            ..Default::default()
        }
    }

    fn report_of(servers: Vec<ServerStatus>) -> CheckReport {
        CheckReport {
            servers: CheckSummary {
                total: servers.len() as u64,
                generation: 1,
                server: servers,
            },
        }
    }

    /// Render to a string with any color escapes stripped.
    fn rendered(report: &CheckReport) -> String {
        let mut out = Vec::new();
        render_report(&mut out, report).unwrap();
        console::strip_ansi_codes(&String::from_utf8(out).unwrap()).into_owned()
    }

    #[test]
    fn test_empty_report_renders_nothing() {
        assert_eq!(rendered(&report_of(vec![])), "");
    }

    #[test]
    fn test_single_group_has_no_separators() {
        let report = report_of(vec![
            server("web", "up"),
            server("web", "up"),
            server("web", "down"),
        ]);
        let text = rendered(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| !line.is_empty()));
    }

    #[test]
    fn test_blank_line_on_each_group_change() {
        // Groups a,a | b | a: a change back to an earlier name still counts.
        let report = report_of(vec![
            server("a", "up"),
            server("a", "up"),
            server("b", "up"),
            server("a", "up"),
        ]);
        let text = rendered(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "");
        assert_eq!(lines[4], "");
        assert_eq!(lines.iter().filter(|line| line.is_empty()).count(), 2);

        let content: Vec<&&str> = lines.iter().filter(|line| !line.is_empty()).collect();
        assert_eq!(content.len(), 4);
    }

    #[test]
    fn test_line_format_without_check_port() {
        let report = report_of(vec![ServerStatus {
            upstream: "web".into(),
            name: "10.0.0.1:80".into(),
            status: "up".into(),
            rise: 3,
            fall: 0,
            check_type: "http".into(),
            port: 0,
            ..Default::default()
        }]);
        assert_eq!(rendered(&report), "[up] web - http://10.0.0.1:80 (r:3,f:0)\n");
    }

    #[test]
    fn test_line_format_with_check_port() {
        let report = report_of(vec![ServerStatus {
            upstream: "cache".into(),
            name: "10.0.1.1:6379".into(),
            status: "down".into(),
            rise: 0,
            fall: 7,
            check_type: "tcp".into(),
            port: 6379,
            ..Default::default()
        }]);
        assert_eq!(
            rendered(&report),
            "[down] cache - tcp://10.0.1.1:6379 (r:0,f:7,c:6379)\n"
        );
    }

    /// Force-style a status the way the renderer would.
    fn forced(status: &str) -> String {
        status_style(status)
            .force_styling(true)
            .apply_to(status)
            .to_string()
    }

    #[test]
    fn test_status_color_mapping() {
        assert!(forced("up").contains("\u{1b}[32m"));
        assert!(forced("down").contains("\u{1b}[31m"));
        // Anything unrecognized renders blue, not as an error.
        assert!(forced("checking").contains("\u{1b}[34m"));
        assert!(forced("unknown").contains("\u{1b}[34m"));
    }

    #[test]
    fn test_color_does_not_alter_status_text() {
        assert_eq!(console::strip_ansi_codes(&forced("up")), "up");
        assert_eq!(console::strip_ansi_codes(&forced("down")), "down");
    }
}
