//! Progress reporting for the quantization pass.

use std::io::Write;

/// A sink for progress updates emitted while an image is being quantized.
///
/// All counts are in pixels.
/// The unit type `()` can be used to discard all progress updates.
pub trait Progress {
    /// Called periodically with the number of pixels processed so far.
    fn update(&mut self, processed: u64, total: u64);

    /// Called once after every pixel has been processed.
    ///
    /// By default, this reports `total` out of `total` pixels as processed.
    fn finish(&mut self, total: u64) {
        self.update(total, total);
    }
}

impl Progress for () {
    fn update(&mut self, _processed: u64, _total: u64) {}
}

impl<P: Progress + ?Sized> Progress for &mut P {
    fn update(&mut self, processed: u64, total: u64) {
        (**self).update(processed, total);
    }

    fn finish(&mut self, total: u64) {
        (**self).finish(total);
    }
}

impl<P: Progress + ?Sized> Progress for Box<P> {
    fn update(&mut self, processed: u64, total: u64) {
        (**self).update(processed, total);
    }

    fn finish(&mut self, total: u64) {
        (**self).finish(total);
    }
}

/// Writes human readable progress to a terminal-like stream,
/// overwriting the same line on every update.
///
/// # Examples
/// ```
/// # use iif::{ConsoleProgress, Progress};
/// let mut progress = ConsoleProgress::new(Vec::new());
/// progress.update(500, 1000);
/// progress.finish(1000);
/// assert_eq!(
///     String::from_utf8(progress.into_inner()).unwrap(),
///     "progress: 500/1000 (50%)\rprogress: 1000/1000 (100%)\n",
/// );
/// ```
#[derive(Debug)]
pub struct ConsoleProgress<W> {
    /// The stream to write to.
    out: W,
}

impl ConsoleProgress<std::io::Stdout> {
    /// Creates a [`ConsoleProgress`] that writes to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleProgress<W> {
    /// Creates a new [`ConsoleProgress`] that writes to `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the [`ConsoleProgress`] and returns the inner stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes one progress line ending in `end`.
    fn write_line(&mut self, processed: u64, total: u64, end: char) {
        #[allow(clippy::cast_precision_loss)]
        let percent = if total == 0 {
            100.0
        } else {
            processed as f64 / total as f64 * 100.0
        };

        // write errors on the status stream are ignored
        let _ = write!(self.out, "progress: {processed}/{total} ({percent:.0}%){end}");
        let _ = self.out.flush();
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn update(&mut self, processed: u64, total: u64) {
        self.write_line(processed, total, '\r');
    }

    fn finish(&mut self, total: u64) {
        self.write_line(total, total, '\n');
    }
}
