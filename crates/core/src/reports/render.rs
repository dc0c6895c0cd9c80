//! Report renderers.
//!
//! Both renderers are deterministic: the same view always produces the
//! same bytes.

use super::types::{ReportTable, ReportView};

const NO_COLLECTION: &str = "Sin colección";
const NO_SERIES: &str = "Sin serie";

/// Renders a view as an HTML fragment for the report surface.
///
/// Every catalog value is escaped before insertion.
#[must_use]
pub fn render_html(view: &ReportView) -> String {
    match view {
        ReportView::Guidance { message } => message_html("report-guidance", message),
        ReportView::Empty { message } => message_html("report-empty", message),
        ReportView::Table(table) => table_html(table),
    }
}

fn message_html(class: &str, message: &str) -> String {
    format!(
        "<div class=\"report-message {class}\"><p>{}</p></div>",
        escape_html(message)
    )
}

fn table_html(table: &ReportTable) -> String {
    let span = table.headers.len().max(1);
    let mut s = String::new();

    s.push_str("<div class=\"report-summary\">");
    s.push_str(&format!(
        "<h3 class=\"report-title\">{}</h3>",
        escape_html(&table.title)
    ));
    s.push_str(&format!(
        "<span class=\"report-count\">{} SKUs</span>",
        table.sku_count
    ));
    s.push_str("</div>");

    s.push_str("<table class=\"report-table\"><thead><tr>");
    for header in &table.headers {
        s.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    s.push_str("</tr></thead><tbody>");

    for collection in &table.collections {
        s.push_str(&format!(
            "<tr class=\"report-collection\"><td colspan=\"{span}\">{} <span class=\"report-group-count\">({})</span></td></tr>",
            escape_html(or_placeholder(collection.name.as_str(), NO_COLLECTION)),
            collection.sku_count()
        ));
        for series in &collection.series {
            s.push_str(&format!(
                "<tr class=\"report-series\"><td colspan=\"{span}\">{} <span class=\"report-group-count\">({})</span></td></tr>",
                escape_html(or_placeholder(series.name.as_str(), NO_SERIES)),
                series.rows.len()
            ));
            for row in &series.rows {
                s.push_str(&format!("<tr data-sku=\"{}\">", escape_html(row.sku.as_str())));
                for cell in &row.cells {
                    s.push_str(&format!("<td>{}</td>", escape_html(cell)));
                }
                s.push_str("</tr>");
            }
        }
    }

    s.push_str("</tbody></table>");
    s
}

/// Renders a view as tab-separated text for copy/paste into a spreadsheet.
#[must_use]
pub fn render_text(view: &ReportView) -> String {
    match view {
        ReportView::Guidance { message } | ReportView::Empty { message } => {
            format!("{message}\n")
        }
        ReportView::Table(table) => table_text(table),
    }
}

fn table_text(table: &ReportTable) -> String {
    let mut lines = Vec::with_capacity(table.sku_count + 2);
    lines.push(format!("{}\t{} SKUs", text_cell(&table.title), table.sku_count));
    lines.push(join_cells(&table.headers));

    for collection in &table.collections {
        lines.push(text_cell(or_placeholder(
            collection.name.as_str(),
            NO_COLLECTION,
        )));
        for series in &collection.series {
            lines.push(text_cell(or_placeholder(series.name.as_str(), NO_SERIES)));
            lines.extend(series.rows.iter().map(|row| join_cells(&row.cells)));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn join_cells(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| text_cell(cell))
        .collect::<Vec<_>>()
        .join("\t")
}

// Tabs and line breaks would shift spreadsheet cells.
fn text_cell(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}

fn or_placeholder<'a>(name: &'a str, placeholder: &'a str) -> &'a str {
    if name.is_empty() { placeholder } else { name }
}

/// Escapes markup-significant characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
