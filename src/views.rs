// HTML fragments written into the status box.
//
// Every call produces the complete box contents; the executor replaces the
// previous markup wholesale.

use crate::constants::MSG_UNKNOWN_STATUS;
use crate::error::PanelError;
use crate::models::{LogEntry, SessionStatus};

/// Render a session status response.  A non-empty server-reported `error`
/// wins over everything else and is rendered alone.
pub fn render_status(status: &SessionStatus, log_limit: usize) -> String {
    if let Some(err) = status.server_error() {
        return render_error(err);
    }

    let mut html = format!(
        "<p>Status: <strong>{}</strong></p>",
        html_escape(status.status.as_deref().unwrap_or(MSG_UNKNOWN_STATUS))
    );
    html.push_str(&format!("<p>Messages sent logs (last {}):</p><ol>", log_limit));
    for entry in status.recent_logs(log_limit) {
        html.push_str(&render_log_entry(entry));
    }
    html.push_str("</ol>");
    html
}

/// Render a transport or decode failure for the status box.
pub fn render_fetch_failure(err: &PanelError) -> String {
    render_error(&format!("Error fetching session: {}", err))
}

pub fn render_error(message: &str) -> String {
    format!("<p style=\"color:red;\">{}</p>", html_escape(message))
}

fn render_log_entry(entry: &LogEntry) -> String {
    match entry.failure() {
        Some(err) => format!(
            "<li style=\"color:red;\">{} => ERROR: {}</li>",
            html_escape(&entry.message),
            html_escape(err)
        ),
        None => format!(
            "<li>{} => Status: {}</li>",
            html_escape(&entry.message),
            html_escape(entry.status.as_deref().unwrap_or(MSG_UNKNOWN_STATUS))
        ),
    }
}

// `=>` in the templates is literal markup text; only interpolated values are
// escaped.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
