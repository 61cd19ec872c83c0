//! Terminal progress bar for SA runs.

use crate::sa::{ProgressObserver, SaProgress};
use std::io::{self, Stdout, Write};

/// Default number of columns inside the brackets.
pub const DEFAULT_WIDTH: usize = 50;

/// Renders `[=====>      ]` for `fraction` of the way through.
///
/// The bar always spans `width + 2` characters; a complete bar ends in `>`.
///
/// # Examples
///
/// ```
/// use orchestra_scheduler::io::progress::render_bar;
///
/// assert_eq!(render_bar(10, 0.5), "[=====>    ]");
/// assert_eq!(render_bar(10, 1.0), "[=========>]");
/// ```
pub fn render_bar(width: usize, fraction: f64) -> String {
    let width = width.max(1);
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let marks = ((width as f64 * fraction).floor() as usize).min(width - 1);

    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.push_str(&"=".repeat(marks));
    bar.push('>');
    bar.push_str(&" ".repeat(width - 1 - marks));
    bar.push(']');
    bar
}

/// [`ProgressObserver`] redrawing a single line with a carriage return.
///
/// The final report ends the line. Write errors are ignored: the bar is
/// cosmetic and must not abort a search.
pub struct ProgressBar<W: Write> {
    out: W,
    width: usize,
}

impl ProgressBar<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), DEFAULT_WIDTH)
    }
}

impl<W: Write> ProgressBar<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self { out, width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, fraction: f64, end: &str) {
        let percent = (fraction * 100.0).floor() as u32;
        let _ = write!(
            self.out,
            "{} {percent}%{end}",
            render_bar(self.width, fraction)
        );
        let _ = self.out.flush();
    }
}

impl<W: Write> ProgressObserver for ProgressBar<W> {
    fn on_progress(&mut self, progress: &SaProgress) {
        if progress.fraction < 1.0 {
            self.draw(progress.fraction, "\r");
        }
    }

    fn on_finish(&mut self, progress: &SaProgress) {
        self.draw(progress.fraction, "\n");
    }
}
