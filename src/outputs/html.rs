//! HTML rendering of the digest.
//!
//! Plain string composition with inline styles; no templating engine, no
//! external stylesheet. Rendering is a pure function of the [`Digest`]: the
//! same input always produces byte-identical output. Upstream-supplied
//! text (titles, summaries, URLs) is escaped before interpolation.
//!
//! # Layout
//!
//! ```text
//! 📰 Daily News Summary
//! <date line>
//! 📉 30-Year Fixed Mortgage Rate: 7.04%     (when a rate was fetched)
//! <topic heading>                           (one per topic, in config order)
//!   - linked article title
//!     italicized 2-sentence summary
//! ```

use std::fmt::Write;

use crate::models::{Digest, Summary, SummarizedArticle, TopicSection};
use crate::utils::escape_html;

/// Render the complete HTML document for one digest.
pub fn render_digest(digest: &Digest) -> String {
    let mut html = String::new();

    html.push_str("<html>\n");
    html.push_str("<body style=\"font-family: Arial, sans-serif; line-height: 1.5;\">\n");
    html.push_str("<h2>\u{1F4F0} Daily News Summary</h2>\n");
    writeln!(
        html,
        "<p style=\"color:#777777;\">{}</p>",
        digest.date.format("%A, %B %-d, %Y")
    )
    .unwrap();

    if let Some(rate) = digest.mortgage_rate {
        writeln!(
            html,
            "<p><strong>\u{1F4C9} 30-Year Fixed Mortgage Rate:</strong> {rate:.2}%</p><br>"
        )
        .unwrap();
    }

    for section in &digest.sections {
        render_section(&mut html, section);
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Render one topic section: heading, article list, separator.
///
/// Topics that fetched nothing still get their heading and an empty list, so
/// the reader can tell "no news" from "section missing".
fn render_section(html: &mut String, section: &TopicSection) {
    writeln!(
        html,
        "<h3 style=\"color:#2a6ebb;\">{}</h3>",
        escape_html(&section.label)
    )
    .unwrap();
    html.push_str("<ul>\n");
    for entry in &section.articles {
        render_article(html, entry);
    }
    html.push_str("</ul>\n");
    html.push_str("<hr style=\"margin:30px 0;\">\n");
}

fn render_article(html: &mut String, entry: &SummarizedArticle) {
    let summary_text = match &entry.summary {
        Summary::Ready(text) => escape_html(text),
        Summary::Failed(reason) => format!("Summary error: {}", escape_html(reason)),
    };

    html.push_str("<li style=\"margin-bottom: 12px;\">\n");
    writeln!(
        html,
        "<p><strong><a href=\"{}\" target=\"_blank\" style=\"text-decoration:none; color:#2a6ebb;\">{}</a></strong></p>",
        escape_html(&entry.article.url),
        escape_html(&entry.article.title)
    )
    .unwrap();
    writeln!(
        html,
        "<p style=\"margin-top:-8px;\"><em>{summary_text}</em></p>"
    )
    .unwrap();
    html.push_str("</li>\n");
}
