//! Terminal environment (TTY state and color support)

/// Execution environment
#[derive(Debug, Clone)]
pub struct Environment {
    pub stdin_isatty: bool,
    pub stdout_isatty: bool,
    pub stderr_isatty: bool,
    /// Whether ANSI colors may be written to stdout
    pub stdout_colors: bool,
    /// Whether ANSI colors may be written to stderr
    pub stderr_colors: bool,
    pub program_name: String,
}

impl Environment {
    /// Detect the environment of the running process
    pub fn init() -> Self {
        let stdin_isatty = atty::is(atty::Stream::Stdin);
        let stdout_isatty = atty::is(atty::Stream::Stdout);
        let stderr_isatty = atty::is(atty::Stream::Stderr);
        let colors = colors_allowed();

        Self {
            stdin_isatty,
            stdout_isatty,
            stderr_isatty,
            stdout_colors: colors && stdout_isatty,
            stderr_colors: colors && stderr_isatty,
            program_name: "curlkit".to_string(),
        }
    }

    /// Non-interactive environment with colors disabled
    pub fn plain() -> Self {
        Self {
            stdin_isatty: false,
            stdout_isatty: false,
            stderr_isatty: false,
            stdout_colors: false,
            stderr_colors: false,
            program_name: "curlkit".to_string(),
        }
    }

    /// Wrap text in an ANSI color for stderr, if allowed
    pub fn paint_stderr(&self, code: &str, text: &str) -> String {
        if self.stderr_colors {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::init()
    }
}

/// Honor NO_COLOR and dumb terminals
fn colors_allowed() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    !matches!(std::env::var("TERM").as_deref(), Ok("dumb"))
}
