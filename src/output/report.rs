use super::{build_report, PageReport, LOADING_LINE};
use crate::state::View;

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn render_select(name: &str, label: &str, values: &[String], selected: Option<&str>) -> String {
    let mut out = format!(
        "      <label>{label}\n        <select name=\"{name}\">\n          <option value=\"\">All</option>\n"
    );
    for v in values {
        let escaped = escape_html(v);
        let marker = if selected == Some(v.as_str()) {
            " selected"
        } else {
            ""
        };
        out.push_str(&format!(
            "          <option value=\"{escaped}\"{marker}>{escaped}</option>\n"
        ));
    }
    out.push_str("        </select>\n      </label>\n");
    out
}

fn render_cards(report: &PageReport) -> String {
    let mut out = String::new();
    for r in report.emojis.iter() {
        let name = escape_html(&r.name);
        out.push_str("      <div class=\"emoji-card\">\n");
        out.push_str(&format!(
            "        <span class=\"emoji\" role=\"img\" aria-label=\"{name}\">{}</span>\n",
            escape_html(&r.glyph)
        ));
        out.push_str("        <div class=\"emoji-details\">\n");
        out.push_str(&format!("          <p>Name: {name}</p>\n"));
        out.push_str(&format!(
            "          <p>Category: {}</p>\n",
            escape_html(&r.category)
        ));
        out.push_str(&format!(
            "          <p>Group: {}</p>\n",
            escape_html(&r.group)
        ));
        out.push_str("        </div>\n      </div>\n");
    }
    out
}

fn render_pager(report: &PageReport) -> String {
    if report.window.is_empty() {
        return String::new();
    }
    let mut out = String::from("    <nav class=\"pager\">\n");
    if report.has_previous {
        out.push_str(&format!(
            "      <a class=\"prev\" data-page=\"{}\">&lsaquo; Prev</a>\n",
            report.current_page - 1
        ));
    }
    for n in report.window.iter() {
        if *n == report.current_page {
            out.push_str(&format!("      <span class=\"current\">{n}</span>\n"));
        } else {
            out.push_str(&format!("      <a data-page=\"{n}\">{n}</a>\n"));
        }
    }
    if report.has_next {
        out.push_str(&format!(
            "      <a class=\"next\" data-page=\"{}\">Next &rsaquo;</a>\n",
            report.current_page + 1
        ));
    }
    out.push_str("    </nav>\n");
    out
}

const STYLE: &str = r#"    body { font-family: sans-serif; margin: 2rem; background: #f8fafc; color: #0f172a; }
    form.filters { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
    .emoji-container { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
    .emoji-card { background: #fff; border: 1px solid #e2e8f0; border-radius: 0.75rem; padding: 1rem; }
    .emoji { font-size: 2.5rem; }
    .emoji-details p { margin: 0.25rem 0; font-size: 0.85rem; }
    .pager { display: flex; gap: 0.5rem; margin-top: 1.5rem; }
    .pager .current { font-weight: 700; }
"#;

pub fn render_html(view: &View<'_>) -> Vec<u8> {
    let body = if view.is_loading() {
        format!("    <p class=\"loading\">{LOADING_LINE}</p>\n")
    } else {
        let report = build_report(view);
        let mut body = String::from("    <form class=\"filters\">\n");
        body.push_str(&render_select(
            "group",
            "Group",
            &view.vocabulary.groups,
            report.selection.group.as_deref(),
        ));
        body.push_str(&render_select(
            "category",
            "Category",
            &view.vocabulary.categories,
            report.selection.category.as_deref(),
        ));
        body.push_str("      <button type=\"submit\">Submit</button>\n    </form>\n");
        body.push_str(&format!(
            "    <p class=\"summary\">{} of {} emojis &middot; page {}/{}</p>\n",
            report.matched, report.total, report.current_page, report.total_pages
        ));
        body.push_str("    <div class=\"emoji-container\">\n");
        body.push_str(&render_cards(&report));
        body.push_str("    </div>\n");
        body.push_str(&render_pager(&report));
        body
    };

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta content="width=device-width, initial-scale=1.0" name="viewport"/>
  <title>EmojiHub</title>
  <style>
{STYLE}  </style>
</head>
<body>
  <main>
{body}  </main>
</body>
</html>
"#
    );
    html.into_bytes()
}
