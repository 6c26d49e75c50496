//! PDF report writer
//!
//! Emits a minimal PDF 1.4 document: Helvetica 12 text, A4 pages, one line
//! per strategy. Lines that would run past the bottom margin continue on a
//! new page.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use axelrod_logic::Standings;

pub const REPORT_TITLE: &str = "Axelrod Tournament Results";

const PAGE_WIDTH: u32 = 595;
const PAGE_HEIGHT: u32 = 842;
const LEFT: u32 = 50;
const TITLE_Y: u32 = 800;
const LINE_HEIGHT: u32 = 20;
const BOTTOM_MARGIN: u32 = 50;
const FONT_SIZE: u32 = 12;

/// Escape a string for a PDF literal; non-ASCII falls back to '?'
fn pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => out.push('?'),
        }
    }
    out.push(')');
    out
}

/// Lay out (x, y, text) triples page by page
fn paginate(lines: &[String]) -> Vec<Vec<(u32, u32, String)>> {
    let mut pages = Vec::new();
    let mut page = vec![(LEFT, TITLE_Y, REPORT_TITLE.to_string())];
    let mut y = TITLE_Y - LINE_HEIGHT;

    for line in lines {
        if y < BOTTOM_MARGIN {
            pages.push(std::mem::take(&mut page));
            y = TITLE_Y;
        }
        page.push((LEFT, y, line.clone()));
        y -= LINE_HEIGHT;
    }
    pages.push(page);
    pages
}

fn content_stream(items: &[(u32, u32, String)]) -> String {
    let mut stream = String::new();
    for (x, y, text) in items {
        stream.push_str(&format!(
            "BT /F1 {} Tf {} {} Td {} Tj ET\n",
            FONT_SIZE,
            x,
            y,
            pdf_string(text)
        ));
    }
    stream
}

/// Render standings as PDF bytes
pub fn render_report(standings: &Standings) -> Vec<u8> {
    let lines: Vec<String> = standings
        .iter()
        .map(|s| format!("{}: {}", s.name, s.total_penalty))
        .collect();
    let pages = paginate(&lines);

    // 1 catalog, 2 page tree, 3 font, then (page, content) per page
    let page_ids: Vec<usize> = (0..pages.len()).map(|i| 4 + 2 * i).collect();
    let mut objects: Vec<String> = Vec::with_capacity(3 + 2 * pages.len());
    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
    let kids: Vec<String> = page_ids.iter().map(|id| format!("{} 0 R", id)).collect();
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        pages.len()
    ));
    objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());

    for (page, id) in pages.iter().zip(&page_ids) {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            PAGE_WIDTH,
            PAGE_HEIGHT,
            id + 1
        ));
        let stream = content_stream(page);
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}endstream",
            stream.len(),
            stream
        ));
    }

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }

    let xref = out.len();
    out.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in &offsets {
        out.push_str(&format!("{:010} 00000 n \n", offset));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref
    ));
    out.into_bytes()
}

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Sibling of `path` unique to this process and call
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report.pdf".to_string());
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.with_file_name(format!(".{}.{}.{}.tmp", name, std::process::id(), n))
}

/// Write the report for `standings` to `path`
///
/// The bytes go to a temporary sibling first and are renamed into place.
pub async fn write_report(path: &Path, standings: &Standings) -> std::io::Result<()> {
    let tmp = temp_path(path);
    tokio::fs::write(&tmp, render_report(standings)).await?;
    if let Err(err) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(err);
    }
    tracing::info!("report written to {}", path.display());
    Ok(())
}
