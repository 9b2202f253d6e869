//! Routing between machine and human output.

/// How results reach stdout for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Structured output for scripts; nothing else goes to stdout
    Json,
    /// Line-oriented `key=value` text, safe to grep
    #[default]
    Plain,
    /// Badges and meters for a human at a TTY
    Pretty,
}

impl OutputMode {
    /// Pick the mode for this invocation.
    ///
    /// `--json` always wins, and `TERM=dumb` forces plain. Otherwise a
    /// TTY gets the pretty renderer and pipes get plain text.
    pub fn resolve(json_flag: bool, is_tty: bool, term_is_dumb: bool) -> Self {
        match (json_flag, term_is_dumb, is_tty) {
            (true, _, _) => Self::Json,
            (_, true, _) => Self::Plain,
            (_, _, true) => Self::Pretty,
            _ => Self::Plain,
        }
    }

    pub fn is_json(self) -> bool {
        self == Self::Json
    }

    pub fn is_pretty(self) -> bool {
        self == Self::Pretty
    }
}
