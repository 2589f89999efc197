//! Console output formatter for comparison results

use colored::Colorize;
use boxai_domain::{ComparisonResult, ModelListing, ModelResponse, OutputFormat};

/// Formats comparison results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn render(result: &ComparisonResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// One block per model, in request order, followed by a summary line
    pub fn format(result: &ComparisonResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Model Comparison"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Prompt:".cyan().bold(), result.prompt));

        for response in &result.responses {
            output.push_str(&Self::response_block(response));
        }

        output.push_str(&Self::summary(result));
        output.push_str(&Self::footer());

        output
    }

    /// Same array shape as `POST /ask`
    pub fn format_json(result: &ComparisonResult) -> String {
        serde_json::to_string_pretty(&result.responses).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn format_models(models: &[ModelListing]) -> String {
        let width = models.iter().map(|m| m.id.len()).max().unwrap_or(0);
        let mut output = format!("{}\n", "Available models:".cyan().bold());
        for model in models {
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                model.id.bold(),
                model.name.dimmed(),
                width = width
            ));
        }
        output
    }

    fn response_block(response: &ModelResponse) -> String {
        let title = format!("── {} ──", response.model_key);
        if response.is_success() {
            format!(
                "\n{} {}\n{}\n",
                title.yellow().bold(),
                format!("({} ms, {} words)", response.latency_ms, response.word_count).dimmed(),
                response.text
            )
        } else {
            format!("\n{}\n{}\n", title.red().bold(), response.text.red())
        }
    }

    fn summary(result: &ComparisonResult) -> String {
        let ok = result.successful_responses().count();
        let failed = result.failed_responses().count();

        let mut line = format!(
            "\n{} {} succeeded, {} failed",
            "Summary:".cyan().bold(),
            ok.to_string().green(),
            if failed > 0 {
                failed.to_string().red()
            } else {
                failed.to_string().normal()
            }
        );
        if let Some(fastest) = result.fastest() {
            line.push_str(&format!(
                "; fastest: {} ({} ms)",
                fastest.model_key.bold(),
                fastest.latency_ms
            ));
        }
        line.push('\n');
        line
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}
