use std::time::Duration;

use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Firmscrape".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Scrape company profiles from marketing sites\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print how long a site took, colored by speed
pub fn print_timing(label: &str, duration: Duration) {
    let secs = duration.as_secs_f64();
    let label = format!("{}:", label);

    if secs < 2.0 {
        eprintln!("  {} {:>6.2}s ({})", label.dimmed(), secs, "fast".dimmed());
    } else if secs < 10.0 {
        eprintln!("  {} {:>6.2}s ({})", label.dimmed(), secs, "moderate".bright_yellow());
    } else {
        eprintln!("  {} {:>6.2}s ({})", label.dimmed(), secs, "slow".bright_red());
    }
}

/// Print the end-of-run summary
pub fn print_summary(sites: usize, empty: usize, news: usize) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Summary".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    eprintln!("  {} {}", "Sites:".dimmed(), sites.to_string().bright_white());
    eprintln!("  {} {}", "Empty:".dimmed(), empty.to_string().bright_white());
    eprintln!("  {} {}\n", "News items:".dimmed(), news.to_string().bright_white());
}
