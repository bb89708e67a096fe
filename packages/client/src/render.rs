//! Terminal rendering of panel results.

use console::style;

use crate::config::TEXT_WRAP_WIDTH;
use crate::panel::{PanelState, QueryPanel};
use crate::types::SourceCitation;

/// Format a relevance score with three decimals, matching how the
/// service's scores are shown elsewhere.
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.3}")
}

/// Print the answer and sources sections for a settled panel.
pub fn render_panel(panel: &QueryPanel) {
    println!("{}", style("Answer").bold());
    match panel.state() {
        PanelState::Error(message) => {
            println!("  {}", style(message).red());
        }
        PanelState::Success(response) if !response.answer.is_empty() => {
            for line in textwrap::wrap(&response.answer, TEXT_WRAP_WIDTH) {
                println!("  {line}");
            }
        }
        _ => {
            println!("  {}", style("Submit a query to see the answer.").dim());
        }
    }

    println!();
    println!("{}", style("Sources").bold());
    let sources = panel.sources();
    if sources.is_empty() {
        println!("  {}", style("No sources yet.").dim());
        return;
    }

    for citation in sources {
        render_source(citation);
    }
}

/// Print a list of citations without an enclosing panel, for search output.
pub fn render_sources(sources: &[SourceCitation]) {
    if sources.is_empty() {
        println!("{}", style("No matches.").dim());
        return;
    }

    for citation in sources {
        render_source(citation);
    }
}

fn render_source(citation: &SourceCitation) {
    println!(
        "  {} {} {}",
        style(&citation.law_name).cyan().bold(),
        style(format!("§ {}", citation.section_id)).green(),
        style(format!("score {}", format_score(citation.score))).dim()
    );
    if let Some(title) = &citation.section_title {
        if !title.is_empty() {
            println!("  {}", style(title).italic());
        }
    }
    for line in textwrap::wrap(&citation.text, TEXT_WRAP_WIDTH) {
        println!("    {line}");
    }
    println!();
}
