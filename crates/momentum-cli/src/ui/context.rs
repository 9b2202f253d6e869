//! Terminal detection and the context handed to every renderer.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// What the process learned about its output terminal at startup.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Stdout is attached to a terminal
    pub is_tty: bool,
    /// Color escapes may be emitted
    pub color: bool,
    /// Unicode symbols may be emitted
    pub unicode: bool,
    /// Columns available for rendering
    pub width: usize,
    /// Output mode after flag and TTY resolution
    pub mode: OutputMode,
}

impl UiContext {
    /// Resolve the context from the process environment together with
    /// the `--json`, `--no-color`, and `--ascii` flags.
    pub fn from_env(json_flag: bool, no_color_flag: bool, ascii_flag: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let dumb_term = matches!(std::env::var("TERM").as_deref(), Ok("dumb"));

        // The NO_COLOR convention and TERM=dumb count as a --no-color request.
        let plain_requested =
            no_color_flag || dumb_term || std::env::var_os("NO_COLOR").is_some();

        Self {
            is_tty,
            color: is_tty && !plain_requested,
            unicode: !ascii_flag,
            width: detect_width(),
            mode: OutputMode::resolve(json_flag, is_tty, dumb_term),
        }
    }

    /// Whether prompting is possible: stdin and stdout must both be TTYs.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

/// Width in columns, with 80 as the fallback when detection fails.
fn detect_width() -> usize {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&w| w > 0);
    if let Some(w) = from_env {
        return w;
    }

    #[cfg(unix)]
    {
        if let Some(w) = tty_columns() {
            return w;
        }
    }

    80
}

#[cfg(unix)]
fn tty_columns() -> Option<usize> {
    use std::mem::MaybeUninit;

    let mut ws = MaybeUninit::<libc::winsize>::uninit();
    // SAFETY: TIOCGWINSZ only writes into the winsize out-param
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, ws.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }
    // SAFETY: a zero return means ioctl filled the struct in
    let ws = unsafe { ws.assume_init() };
    if ws.ws_col > 0 {
        Some(usize::from(ws.ws_col))
    } else {
        None
    }
}
