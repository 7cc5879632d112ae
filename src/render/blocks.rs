//! Block-level HTML emission for section bodies.

use std::fmt::Write;

use crate::model::{Block, Card, CodeSample, Definition, Table};

use super::escape::{escape_attr, escape_html};

/// Emit one content block.
pub(crate) fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Paragraph { text } => {
            writeln!(out, "<p>{}</p>", escape_html(text)).unwrap();
        }
        Block::List { ordered, items } => write_list(out, *ordered, items),
        Block::Definitions { items } => write_definitions(out, items),
        Block::Table(table) => write_table(out, table),
        Block::CodeBlock { language, code } => {
            write_code(out, language.as_deref(), code);
        }
        Block::Cards { items } => write_cards(out, items),
    }
}

fn write_list(out: &mut String, ordered: bool, items: &[String]) {
    let tag = if ordered { "ol" } else { "ul" };
    writeln!(out, "<{}>", tag).unwrap();
    for item in items {
        writeln!(out, "  <li>{}</li>", escape_html(item)).unwrap();
    }
    writeln!(out, "</{}>", tag).unwrap();
}

fn write_definitions(out: &mut String, items: &[Definition]) {
    out.push_str("<dl>\n");
    for def in items {
        writeln!(out, "  <dt>{}</dt>", escape_html(&def.term)).unwrap();
        writeln!(out, "  <dd>{}</dd>", escape_html(&def.meaning)).unwrap();
    }
    out.push_str("</dl>\n");
}

fn write_table(out: &mut String, table: &Table) {
    out.push_str("<table>\n  <thead>\n    <tr>\n");
    for header in &table.headers {
        writeln!(out, "      <th>{}</th>", escape_html(header)).unwrap();
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for row in &table.rows {
        out.push_str("    <tr>\n");
        for cell in row {
            writeln!(out, "      <td>{}</td>", escape_html(cell)).unwrap();
        }
        out.push_str("    </tr>\n");
    }
    out.push_str("  </tbody>\n</table>\n");
}

fn write_code(out: &mut String, language: Option<&str>, code: &str) {
    match language {
        Some(lang) => writeln!(
            out,
            "<pre><code class=\"language-{}\">{}</code></pre>",
            escape_attr(lang),
            escape_html(code)
        )
        .unwrap(),
        None => writeln!(out, "<pre><code>{}</code></pre>", escape_html(code)).unwrap(),
    }
}

fn write_cards(out: &mut String, items: &[Card]) {
    out.push_str("<div class=\"card-grid\">\n");
    for card in items {
        out.push_str("  <div class=\"card\">\n");
        writeln!(out, "    <h3 class=\"card-title\">{}</h3>", escape_html(&card.title)).unwrap();
        writeln!(out, "    <p>{}</p>", escape_html(&card.body)).unwrap();
        out.push_str("  </div>\n");
    }
    out.push_str("</div>\n");
}

/// Emit an Examples-tab code sample card (caption + fenced snippet).
pub(crate) fn write_code_sample(out: &mut String, sample: &CodeSample) {
    out.push_str("<figure class=\"code-sample\">\n");
    if !sample.caption.is_empty() {
        writeln!(out, "  <figcaption>{}</figcaption>", escape_html(&sample.caption)).unwrap();
    }
    write_code(out, sample.language.as_deref(), &sample.code);
    out.push_str("</figure>\n");
}
