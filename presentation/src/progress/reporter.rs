//! Progress reporting while models are compared

use boxai_application::{ComparisonProgress, NoProgress};
use boxai_domain::OutputFormat;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress with an indicatif bar (one tick per settled model)
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonProgress for ProgressReporter {
    fn on_comparison_start(&self, total_models: usize) {
        let pb = ProgressBar::new(total_models as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Asking models");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_model_complete(&self, model_key: &str, success: bool) {
        let Ok(bar) = self.bar.lock() else { return };
        if let Some(pb) = bar.as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), model_key)
            } else {
                format!("{} {}", "x".red(), model_key)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_comparison_complete(&self) {
        let Ok(mut bar) = self.bar.lock() else { return };
        if let Some(pb) = bar.take() {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ComparisonProgress for SimpleProgress {
    fn on_comparison_start(&self, total_models: usize) {
        eprintln!(
            "{} {} ({} models)",
            "->".cyan(),
            "Asking models".bold(),
            total_models
        );
    }

    fn on_model_complete(&self, model_key: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), model_key);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), model_key);
        }
    }

    fn on_comparison_complete(&self) {
        eprintln!();
    }
}

/// Which progress display `boxai ask` uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStyleKind {
    /// Nothing (quiet, or JSON on stdout)
    Silent,
    /// indicatif bar on an interactive terminal
    Bar,
    /// One line per model when stderr is redirected
    Plain,
}

impl ProgressStyleKind {
    pub fn select(quiet: bool, format: OutputFormat, interactive: bool) -> Self {
        if quiet || format == OutputFormat::Json {
            Self::Silent
        } else if interactive {
            Self::Bar
        } else {
            Self::Plain
        }
    }

    pub fn into_progress(self) -> Box<dyn ComparisonProgress> {
        match self {
            Self::Silent => Box::new(NoProgress),
            Self::Bar => Box::new(ProgressReporter::new()),
            Self::Plain => Box::new(SimpleProgress),
        }
    }
}
