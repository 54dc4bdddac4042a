// ABOUTME: User-facing console messages for the deploy CLI.
// ABOUTME: Human, quiet (CI) and JSON-lines renderings of the same events.

use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Progress lines, echoed commands and timing
    Normal,
    /// Final result and warnings only
    Quiet,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Level {
    Success,
    Warning,
    Error,
}

#[derive(Serialize)]
struct Event<'a> {
    event: Level,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

/// Writes messages for one CLI invocation. Results go to stdout, problems
/// to stderr.
pub struct Output {
    mode: OutputMode,
    started: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Output {
            mode,
            started: None,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// External commands are echoed as they run only in normal mode.
    pub fn echoes_commands(&self) -> bool {
        self.mode == OutputMode::Normal
    }

    pub fn start_timer(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Seconds since `start_timer`, or zero if it was never called.
    pub fn elapsed_secs(&self) -> f64 {
        self.started.map_or(0.0, |t| t.elapsed().as_secs_f64())
    }

    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    pub fn success(&self, message: &str) {
        self.emit(Level::Success, message);
    }

    pub fn warning(&self, message: &str) {
        self.emit(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    fn emit(&self, level: Level, message: &str) {
        let line = match self.mode {
            OutputMode::Json => match self.render_json(level, message) {
                Some(line) => line,
                None => return,
            },
            OutputMode::Normal | OutputMode::Quiet => self.render_text(level, message),
        };

        if level == Level::Success {
            println!("{line}");
        } else {
            eprintln!("{line}");
        }
    }

    fn render_text(&self, level: Level, message: &str) -> String {
        match level {
            Level::Success if self.mode == OutputMode::Normal && self.started.is_some() => {
                format!("{message} ({:.1}s)", self.elapsed_secs())
            }
            Level::Success => message.to_string(),
            Level::Warning => format!("Warning: {message}"),
            Level::Error => format!("Error: {message}"),
        }
    }

    fn render_json(&self, level: Level, message: &str) -> Option<String> {
        let event = Event {
            event: level,
            message,
            duration_secs: self.started.map(|_| self.elapsed_secs()),
        };
        serde_json::to_string(&event).ok()
    }
}
