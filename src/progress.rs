use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Wraps an indicatif progress bar that advances once per processed file.
pub struct Bar {
    /// The ProgressBar from indicatif.
    pub pbar: ProgressBar,
}

impl Bar {
    /// Creates the Bar struct with a size and prefix for the bar.
    /// The returned Bar is hidden.
    pub fn new(len: u64, prefix: String) -> Self {
        let progress_bar = ProgressBar::hidden();
        progress_bar.set_length(len);
        progress_bar.set_prefix(prefix);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{prefix}[{bar:40}] [{elapsed_precise}] {pos}/{len} {msg}",
                )
                .progress_chars("=>-"),
        );
        Self { pbar: progress_bar }
    }

    /// Displays a hidden Bar.
    pub fn display(&self) {
        self.pbar.set_draw_target(ProgressDrawTarget::stderr())
    }

    /// Creates a Bar and sets it to be displayed.
    pub fn visible(len: u64, prefix: String) -> Self {
        let bar = Self::new(len, prefix);
        bar.display();
        bar
    }

    /// Shows which file is being worked on.
    pub fn working_on(&self, name: String) {
        self.pbar.set_message(name);
    }

    /// tick the progress bar
    pub fn tick(&self) {
        self.pbar.inc(1);
    }
}

impl Drop for Bar {
    /// make sure we clear bars when the object is dropped
    fn drop(&mut self) {
        if !self.pbar.is_finished() {
            self.pbar.finish_and_clear();
        }
    }
}
