//! Cosmetic delays for watching the solver play
//!
//! Pacing only writes to the terminal and sleeps. It never sees the solver,
//! so turning it on cannot change which guesses are made.

use crossterm::{
    cursor::MoveToColumn,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// "Thinking..." animation before each guess and a pause after a solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    enabled: bool,
    dots: usize,
    dot_delay: Duration,
    linger: Duration,
}

impl Pacer {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            dots: 3,
            dot_delay: Duration::from_millis(200),
            linger: Duration::from_millis(1500),
        }
    }

    #[must_use]
    pub const fn with_timing(mut self, dot_delay: Duration, linger: Duration) -> Self {
        self.dot_delay = dot_delay;
        self.linger = linger;
        self
    }

    /// Animate on stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written.
    pub fn think(&self) -> io::Result<()> {
        self.think_to(&mut io::stdout())
    }

    /// Draw "Thinking" and its dots on `out`, then erase the line
    ///
    /// # Errors
    ///
    /// Returns an error if `out` cannot be written.
    pub fn think_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        write!(out, "Thinking")?;
        out.flush()?;
        for _ in 0..self.dots {
            thread::sleep(self.dot_delay);
            write!(out, ".")?;
            out.flush()?;
        }
        queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        out.flush()
    }

    /// Pause so a finished board stays on screen
    pub fn linger(&self) {
        if self.enabled {
            thread::sleep(self.linger);
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn disabled_pacer_writes_nothing() {
        let mut out = Vec::new();
        let started = Instant::now();
        Pacer::new(false).think_to(&mut out).unwrap();
        Pacer::new(false).linger();

        assert!(out.is_empty());
        assert!(started.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn enabled_pacer_draws_dots_then_clears() {
        let mut out = Vec::new();
        Pacer::new(true)
            .with_timing(Duration::ZERO, Duration::ZERO)
            .think_to(&mut out)
            .unwrap();

        let text = String::from_utf8_lossy(&out);
        assert!(text.starts_with("Thinking..."));
        // Clear sequence follows the dots
        assert!(text.len() > "Thinking...".len());
    }
}
