use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;

const PB_STYLE: &str = "{spinner:.blue} {prefix:>12.cyan.bold} [{elapsed_precise}] {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

const PB_CHARS: &str = "█▓▒░  ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    ProgressStyle::with_template(PB_STYLE)
        .ok()
        .map(|style| style.progress_chars(PB_CHARS))
});

/// Cumulative byte accounting for one transfer.
///
/// A side-channel, not a return value: the downloader drives it while
/// copying, and tests can record the reported totals without a real
/// terminal. `finish` is called exactly once, whatever the copy
/// outcome.
pub trait ProgressSink {
    /// A transfer is starting; `total` is best-effort and absent when
    /// the backend cannot report a size up front.
    fn begin(&mut self, total: Option<u64>);

    /// `step` more bytes have been copied.
    fn advance(&mut self, step: u64);

    /// The transfer is over, successfully or not.
    fn finish(&mut self);
}

/// Discards all progress events.
#[derive(Debug, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn begin(&mut self, _total: Option<u64>) {}
    fn advance(&mut self, _step: u64) {}
    fn finish(&mut self) {}
}

/// Terminal progress bar over `indicatif`.
///
/// Falls back to a spinner when the total size is unknown.
#[derive(Debug, Default)]
pub struct BarSink {
    prefix: Option<String>,
    bar: Option<ProgressBar>,
}

impl BarSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }
}

impl ProgressSink for BarSink {
    fn begin(&mut self, total: Option<u64>) {
        let bar = match total {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };
        let bar = match PB_TEMPLATE.as_ref() {
            Some(style) => bar.with_style(style.clone()),
            None => bar,
        };
        if let Some(prefix) = &self.prefix {
            bar.set_prefix(prefix.clone());
        }
        self.bar = Some(bar);
    }

    fn advance(&mut self, step: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(step);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}
