use crate::model::config::{LinksSection, SiteSection};
use crate::model::summary::PluginSummary;

/// Render the listing page: the two static navigation links, then one
/// manifest link per plugin labeled `name-version`.
///
/// Pure and deterministic. Duplicate names render as duplicate entries;
/// catching those is the index builder's job.
pub fn render(site: &SiteSection, links: &LinksSection, summaries: &[PluginSummary]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&site.title)));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&site.title)));
    html.push_str(&format!("<h3>{}</h3>\n", escape(&site.tagline)));
    html.push_str(&format!(
        "<p><a href=\"{}\">fetch errors</a></p>\n",
        escape(&links.errors)
    ));
    html.push_str(&format!(
        "<p><a href=\"{}\">plugins summary</a></p>\n",
        escape(&links.summary)
    ));
    html.push_str("<h4>manifests</h4>\n<ul>\n");

    for summary in summaries {
        html.push_str(&format!(
            "<li><a href=\"{base}/{name}\">{name}-{version}</a></li>\n",
            base = escape(&links.manifest_base),
            name = escape(summary.name.as_str()),
            version = escape(&summary.version),
        ));
    }

    html.push_str("</ul>\n</body>\n</html>\n");
    html
}

/// Minimal HTML escape, safe for both text and attribute positions.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }

    out
}
