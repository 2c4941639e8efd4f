//! HTML document rendering for generated reports
//!
//! Reports come back from the text-generation API as light markdown. The
//! converter here understands the subset those reports use (headings, flat
//! bullet and numbered lists, rules, bold spans, paragraphs) and escapes
//! everything else, so the PDF service never sees raw model output as markup.

use crate::constants::REPORT_TITLE;
use chrono::{DateTime, Utc};

const STYLE: &str = "
        body { font-family: Arial, sans-serif; margin: 20px; line-height: 1.6; color: #222; }
        header { text-align: center; margin-bottom: 40px; }
        header h1 { font-size: 2.5em; margin: 0; }
        header p { color: #555; }
        h1, h2, h3 { color: #2c3e50; }
        h2 { border-bottom: 2px solid #2980b9; padding-bottom: 10px; }
        ul, ol { margin-left: 20px; }
        li { margin-bottom: 5px; }
        hr { border: 0; border-top: 1px solid #ccc; margin: 30px 0; }
";

#[derive(Debug, Clone, Copy, PartialEq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// Wrap report text in a complete, styled HTML document
pub fn render_document(report_text: &str, generated_at: DateTime<Utc>) -> String {
    let mut html = String::with_capacity(report_text.len() * 2 + 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("    <title>{}</title>\n", REPORT_TITLE));
    html.push_str("    <style>");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n");
    html.push_str(&format!(
        "<header>\n<h1>{}</h1>\n<p>Prepared {}</p>\n</header>\n",
        REPORT_TITLE,
        generated_at.format("%B %-d, %Y")
    ));
    html.push_str("<main>\n");
    html.push_str(&markdown_to_html(report_text));
    html.push_str("</main>\n</body>\n</html>\n");

    html
}

/// Convert report markdown into HTML fragments
pub fn markdown_to_html(text: &str) -> String {
    let mut html = String::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut list: Option<ListKind> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();

        if line.is_empty() {
            flush_paragraph(&mut html, &mut paragraph);
            continue;
        }

        if let Some((level, title)) = heading(line) {
            flush_paragraph(&mut html, &mut paragraph);
            close_list(&mut html, &mut list);
            html.push_str(&format!("<h{0}>{1}</h{0}>\n", level, inline(title)));
            continue;
        }

        if is_rule(line) {
            flush_paragraph(&mut html, &mut paragraph);
            close_list(&mut html, &mut list);
            html.push_str("<hr>\n");
            continue;
        }

        if let Some(item) = bullet_item(line) {
            flush_paragraph(&mut html, &mut paragraph);
            open_list(&mut html, &mut list, ListKind::Unordered);
            html.push_str(&format!("<li>{}</li>\n", inline(item)));
            continue;
        }

        if let Some((number, item)) = numbered_item(line) {
            flush_paragraph(&mut html, &mut paragraph);
            open_list(&mut html, &mut list, ListKind::Ordered);
            html.push_str(&format!("<li value=\"{}\">{}</li>\n", number, inline(item)));
            continue;
        }

        close_list(&mut html, &mut list);
        paragraph.push(inline(line));
    }

    flush_paragraph(&mut html, &mut paragraph);
    close_list(&mut html, &mut list);
    html
}

/// Escape special characters for HTML text and attribute content
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn flush_paragraph(html: &mut String, paragraph: &mut Vec<String>) {
    if paragraph.is_empty() {
        return;
    }
    html.push_str(&format!("<p>{}</p>\n", paragraph.join(" ")));
    paragraph.clear();
}

fn open_list(html: &mut String, list: &mut Option<ListKind>, kind: ListKind) {
    if *list == Some(kind) {
        return;
    }
    close_list(html, list);
    html.push_str(&format!("<{}>\n", kind.tag()));
    *list = Some(kind);
}

fn close_list(html: &mut String, list: &mut Option<ListKind>) {
    if let Some(kind) = list.take() {
        html.push_str(&format!("</{}>\n", kind.tag()));
    }
}

fn heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    line[level..]
        .strip_prefix(' ')
        .map(|title| (level, title.trim()))
}

fn is_rule(line: &str) -> bool {
    line.len() >= 3
        && ['-', '*', '_']
            .iter()
            .any(|marker| line.chars().all(|c| c == *marker))
}

fn bullet_item(line: &str) -> Option<&str> {
    ["- ", "* ", "+ "]
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .map(str::trim)
}

fn numbered_item(line: &str) -> Option<(u32, &str)> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let number: u32 = line[..digits].parse().ok()?;
    line[digits..]
        .strip_prefix(". ")
        .map(|item| (number, item.trim()))
}

/// Escape a line and apply `**bold**` spans
fn inline(text: &str) -> String {
    let escaped = escape_html(text);
    let parts: Vec<&str> = escaped.split("**").collect();
    if parts.len() < 3 {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 16);
    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 1 {
            if i + 1 < parts.len() {
                out.push_str("<strong>");
                out.push_str(part);
                out.push_str("</strong>");
                continue;
            }
            // unmatched marker
            out.push_str("**");
        }
        out.push_str(part);
    }
    out
}
