// Build script for the compile-time panel configuration.
// The crate reads API_BASE_URL and PANEL_POLL_INTERVAL_MS through
// `option_env!`, so a bad value would only surface at runtime.  Catch the
// obvious mistakes here instead.

use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=API_BASE_URL");
    println!("cargo:rerun-if-env-changed=PANEL_POLL_INTERVAL_MS");

    if let Ok(url) = env::var("API_BASE_URL") {
        let trimmed = url.trim();
        if !trimmed.is_empty()
            && !trimmed.starts_with("http://")
            && !trimmed.starts_with("https://")
            && !trimmed.starts_with('/')
        {
            println!(
                "cargo:warning=API_BASE_URL '{}' is neither absolute nor root-relative",
                trimmed
            );
        }
    }

    if let Ok(raw) = env::var("PANEL_POLL_INTERVAL_MS") {
        if raw.trim().parse::<u32>().is_err() {
            println!(
                "cargo:warning=PANEL_POLL_INTERVAL_MS '{}' is not a number, default interval will be used",
                raw
            );
        }
    }
}
