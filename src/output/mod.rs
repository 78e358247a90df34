pub mod report;

use colored::Colorize;
use serde::Serialize;

use crate::model::EmojiRecord;
use crate::pipeline::FilterSelection;
use crate::state::{LoadStatus, View};

pub const LOADING_LINE: &str = "Loading emojis...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Xml,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".xml") {
        return Some(OutputFormat::Xml);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

#[derive(Clone, Debug, Serialize)]
pub struct OutputRecord {
    pub glyph: String,
    pub name: String,
    pub category: String,
    pub group: String,
    pub code_points: Vec<String>,
}

impl From<&EmojiRecord> for OutputRecord {
    fn from(r: &EmojiRecord) -> Self {
        Self {
            glyph: r.glyph(),
            name: r.name.clone(),
            category: r.category.clone(),
            group: r.group.clone(),
            code_points: r.code_points.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PageReport {
    pub status: LoadStatus,
    pub selection: FilterSelection,
    pub total: usize,
    pub matched: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub window: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
    pub emojis: Vec<OutputRecord>,
}

pub fn build_report(view: &View<'_>) -> PageReport {
    let page = &view.page;
    PageReport {
        status: view.status,
        selection: view.active.clone(),
        total: view.dataset_len,
        matched: view.matched,
        current_page: page.state.current_page,
        page_size: page.state.page_size,
        total_pages: page.total_pages(),
        window: page.window.clone(),
        has_previous: page.state.has_previous(),
        has_next: page.state.has_next(),
        emojis: page.items.iter().map(|r| OutputRecord::from(*r)).collect(),
    }
}

/// Drops control characters (ESC, CR, ...) from remote text before it reaches a terminal.
pub fn terminal_safe(value: &str) -> String {
    value.chars().filter(|c| !c.is_control()).collect()
}

fn describe_selection(selection: &FilterSelection) -> String {
    let group = selection.group.as_deref().map(terminal_safe);
    let category = selection.category.as_deref().map(terminal_safe);
    match (group, category) {
        (None, None) => "all".to_string(),
        (Some(g), None) => format!("group={g}"),
        (None, Some(c)) => format!("category={c}"),
        (Some(g), Some(c)) => format!("group={g}, category={c}"),
    }
}

/// Navigation bar: previous/next are omitted on the first/last page.
pub fn render_navigation(report: &PageReport) -> String {
    let mut parts: Vec<String> = Vec::new();
    if report.has_previous {
        parts.push("‹ prev".dimmed().to_string());
    }
    for n in report.window.iter() {
        if *n == report.current_page {
            parts.push(format!("[{n}]").bold().to_string());
        } else {
            parts.push(n.to_string());
        }
    }
    if report.has_next {
        parts.push("next ›".dimmed().to_string());
    }
    parts.join("  ")
}

pub fn render_text(view: &View<'_>) -> Vec<u8> {
    if view.is_loading() {
        return format!("{LOADING_LINE}\n").into_bytes();
    }
    let report = build_report(view);
    let mut out = String::new();
    for r in report.emojis.iter() {
        out.push_str(&format!(
            "{}  {}\n",
            terminal_safe(&r.glyph),
            terminal_safe(&r.name).bold()
        ));
        out.push_str(&format!("    Category: {}\n", terminal_safe(&r.category)));
        out.push_str(&format!("    Group: {}\n", terminal_safe(&r.group)));
    }
    if report.emojis.is_empty() {
        out.push_str("No emojis match the current filters.\n");
    }
    out.push('\n');
    out.push_str(&format!(
        ":: {:<10}: {}\n",
        "Filter",
        describe_selection(&report.selection)
    ));
    out.push_str(&format!(
        ":: {:<10}: {} of {}\n",
        "Matches", report.matched, report.total
    ));
    out.push_str(&format!(
        ":: {:<10}: {}/{}\n",
        "Page", report.current_page, report.total_pages
    ));
    if !report.window.is_empty() {
        out.push_str(&render_navigation(&report));
        out.push('\n');
    }
    out.into_bytes()
}

pub fn render_json(view: &View<'_>) -> Vec<u8> {
    let report = build_report(view);
    let mut out = serde_json::to_vec_pretty(&report).unwrap_or_else(|_| b"{}".to_vec());
    out.push(b'\n');
    out
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn xml_optional(tag: &str, value: Option<&str>) -> String {
    match value {
        Some(v) => format!("    <{tag}>{}</{tag}>\n", escape_xml(v)),
        None => format!("    <{tag}/>\n"),
    }
}

pub fn render_xml(view: &View<'_>) -> Vec<u8> {
    let report = build_report(view);
    let status = match report.status {
        LoadStatus::Loading => "loading",
        LoadStatus::Ready => "ready",
    };
    let mut out = String::new();
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push('\n');
    out.push_str(&format!(
        "<page status=\"{status}\" current=\"{}\" size=\"{}\" total_pages=\"{}\" matched=\"{}\" total=\"{}\">\n",
        report.current_page, report.page_size, report.total_pages, report.matched, report.total
    ));
    out.push_str("  <selection>\n");
    out.push_str(&xml_optional("group", report.selection.group.as_deref()));
    out.push_str(&xml_optional("category", report.selection.category.as_deref()));
    out.push_str("  </selection>\n");
    out.push_str("  <window>\n");
    for n in report.window.iter() {
        out.push_str(&format!("    <page>{n}</page>\n"));
    }
    out.push_str("  </window>\n");
    out.push_str("  <emojis>\n");
    for r in report.emojis.iter() {
        out.push_str("    <emoji>\n");
        out.push_str(&format!("      <glyph>{}</glyph>\n", escape_xml(&r.glyph)));
        out.push_str(&format!("      <name>{}</name>\n", escape_xml(&r.name)));
        out.push_str(&format!(
            "      <category>{}</category>\n",
            escape_xml(&r.category)
        ));
        out.push_str(&format!("      <group>{}</group>\n", escape_xml(&r.group)));
        for cp in r.code_points.iter() {
            out.push_str(&format!(
                "      <code_point>{}</code_point>\n",
                escape_xml(cp)
            ));
        }
        out.push_str("    </emoji>\n");
    }
    out.push_str("  </emojis>\n");
    out.push_str("</page>\n");
    out.into_bytes()
}

pub fn render_html(view: &View<'_>) -> Vec<u8> {
    report::render_html(view)
}

pub fn render(view: &View<'_>, format: OutputFormat) -> Vec<u8> {
    match format {
        OutputFormat::Text => render_text(view),
        OutputFormat::Json => render_json(view),
        OutputFormat::Xml => render_xml(view),
        OutputFormat::Html => render_html(view),
    }
}

/// One value per line, for `--list-groups` / `--list-categories`.
pub fn render_vocabulary(values: &[String]) -> Vec<u8> {
    let mut out = String::new();
    for v in values {
        out.push_str(&terminal_safe(v));
        out.push('\n');
    }
    out.into_bytes()
}
