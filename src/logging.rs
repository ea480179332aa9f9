//! Browser Logger
//!
//! `log` backend that writes to the devtools console and keeps the most
//! recent lines in a circular buffer for the settings page.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Lines kept in memory
pub const BUFFER_CAPACITY: usize = 200;

/// Fixed-size line buffer; oldest lines are dropped first
#[derive(Debug)]
pub struct LineBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LineBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

struct ConsoleLogger {
    buffer: Mutex<LineBuffer>,
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

fn logger() -> &'static ConsoleLogger {
    LOGGER.get_or_init(|| ConsoleLogger {
        buffer: Mutex::new(LineBuffer::new(BUFFER_CAPACITY)),
    })
}

/// Format a record the way it appears in the buffer
pub fn format_line(level: Level, message: &str) -> String {
    let time = chrono::Local::now().format("%H:%M:%S");
    format!("{} {:<5} {}", time, level, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();

        #[cfg(target_arch = "wasm32")]
        {
            let js = wasm_bindgen::JsValue::from_str(&message);
            match record.level() {
                Level::Error => web_sys::console::error_1(&js),
                Level::Warn => web_sys::console::warn_1(&js),
                Level::Info => web_sys::console::info_1(&js),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&js),
            }
        }

        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(format_line(record.level(), &message));
        }
    }

    fn flush(&self) {}
}

/// Install the logger; later calls only adjust the level
pub fn init(level: LevelFilter) {
    if log::set_logger(logger()).is_err() {
        log::debug!("[logging] logger already installed");
    }
    set_level(level);
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Buffered lines, oldest first
pub fn recent_lines() -> Vec<String> {
    logger().buffer.lock().map(|b| b.snapshot()).unwrap_or_default()
}

pub fn clear() {
    if let Ok(mut buffer) = logger().buffer.lock() {
        buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_drops_oldest() {
        let mut buffer = LineBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.snapshot(), vec!["line 2", "line 3", "line 4"]);

        buffer.clear();
        assert!(buffer.snapshot().is_empty());
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = LineBuffer::new(0);
        buffer.push("x".into());
        assert!(buffer.snapshot().is_empty());
    }

    #[test]
    fn test_format_line_includes_level_and_message() {
        let line = format_line(Level::Warn, "[api] slow");
        assert!(line.ends_with("WARN  [api] slow"));
    }
}
