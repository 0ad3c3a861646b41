use std::fmt;

use chrono::Local;
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// Log timer rendering the local clock with a chrono format string.
#[derive(Clone, Copy, Debug)]
pub struct LocalTimer {
    format: &'static str,
}

impl LocalTimer {
    /// Date, time with microseconds and UTC offset (file logs)
    pub const DATE_TIME: LocalTimer = LocalTimer { format: "%Y-%m-%d %H:%M:%S%.6f%:z" };
    /// Time with microseconds and UTC offset (console logs)
    pub const TIME_ONLY: LocalTimer = LocalTimer { format: "%H:%M:%S%.6f%:z" };
}

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format(self.format))
    }
}

/// Current local time as `YYYY-MM-DD HH:MM:SS`, used in scan history markers.
pub fn get_sysdate() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sysdate_shape() {
        let stamp = get_sysdate();
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
    }
}
