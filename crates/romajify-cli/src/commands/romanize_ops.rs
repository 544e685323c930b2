use romajify::{explain, romanize, ExplainResult, RomanizeOptions, Scheme};

/// How a conversion is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// The romanized text only.
    #[default]
    Text,
    /// One line per pipeline step.
    Explain,
    /// The step trace as JSON.
    Json,
}

pub fn render(
    text: &str,
    scheme: Scheme,
    options: RomanizeOptions,
    mode: OutputMode,
) -> Result<String, serde_json::Error> {
    match mode {
        OutputMode::Text => Ok(romanize(text, scheme, options)),
        OutputMode::Explain => Ok(format_explain(&explain(text, scheme, options))),
        OutputMode::Json => serde_json::to_string_pretty(&explain(text, scheme, options)),
    }
}

fn format_explain(result: &ExplainResult) -> String {
    let width = result
        .steps
        .iter()
        .map(|s| s.rule.len())
        .chain(std::iter::once("input".len()))
        .max()
        .unwrap_or(0);
    let mut lines = vec![format!("{:<width$}  {}", "input", result.input)];
    for step in &result.steps {
        lines.push(format!("{:<width$}  {}", step.rule, step.output));
    }
    lines.join("\n")
}
