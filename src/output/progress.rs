use indicatif::{ProgressState, ProgressStyle};

/// Spinner shown while one external scan runs, with a millisecond clock.
pub fn get_spinner_style() -> ProgressStyle {
    let style = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed_ms}]");

    let style = match style {
        Ok(s) => s,
        Err(_) => ProgressStyle::default_spinner(),
    };

    style
        .with_key("elapsed_ms", elapsed_ms)
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
}

/// Writes the spinner age as HH:MM:SS.mmm
fn elapsed_ms(state: &ProgressState, writer: &mut dyn std::fmt::Write) {
    let elapsed = state.elapsed();
    let total = elapsed.as_secs();
    let _ = write!(
        writer,
        "{:02}:{:02}:{:02}.{:03}",
        total / 3600,
        (total % 3600) / 60,
        total % 60,
        elapsed.subsec_millis()
    );
}
