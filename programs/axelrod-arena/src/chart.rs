//! SVG bar chart of total penalty per strategy

use std::fmt::Write;

use axelrod_logic::Standings;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;
const MARGIN_LEFT: u32 = 90;
const MARGIN_RIGHT: u32 = 30;
const MARGIN_TOP: u32 = 60;
const MARGIN_BOTTOM: u32 = 170;
const BAR_FILL: &str = "#1f77b4";

/// Escape text for XML/HTML content and attribute values
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Round the axis step up to 1, 2 or 5 times a power of ten
fn tick_step(max: u64) -> u64 {
    let raw = max.div_ceil(5).max(1);
    let mut magnitude = 1u64;
    while magnitude * 10 <= raw {
        magnitude *= 10;
    }
    [1u64, 2, 5, 10]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10 * magnitude)
}

/// Render standings as a standalone SVG document
///
/// One bar per entry in roster order, x labels rotated 45 degrees.
pub fn render_bar_chart(title: &str, standings: &Standings) -> String {
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_h;

    let max = standings.iter().map(|s| s.total_penalty).max().unwrap_or(0);
    let step = tick_step(max);
    let ticks = max.div_ceil(step).max(1);
    let axis_max = step * ticks;

    let mut svg = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" font-size="20" text-anchor="middle">{}</text>"#,
        MARGIN_LEFT + plot_w / 2,
        MARGIN_TOP / 2 + 8,
        escape(title)
    );

    // y axis, ticks and grid
    for t in 0..=ticks {
        let value = t * step;
        let y = baseline as f64 - (value as f64 / axis_max as f64) * plot_h as f64;
        let _ = writeln!(
            svg,
            r##"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{}" y2="{y:.1}" stroke="#dddddd"/>"##,
            MARGIN_LEFT + plot_w
        );
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{:.1}" font-size="12" text-anchor="end">{value}</text>"#,
            MARGIN_LEFT - 8,
            y + 4.0
        );
    }
    let _ = writeln!(
        svg,
        r#"<line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{baseline}" stroke="black"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{MARGIN_LEFT}" y1="{baseline}" x2="{}" y2="{baseline}" stroke="black"/>"#,
        MARGIN_LEFT + plot_w
    );

    // bars
    let count = standings.len().max(1) as f64;
    let slot = plot_w as f64 / count;
    let bar_w = slot * 0.8;
    for (i, standing) in standings.iter().enumerate() {
        let x = MARGIN_LEFT as f64 + slot * i as f64 + (slot - bar_w) / 2.0;
        let h = (standing.total_penalty as f64 / axis_max as f64) * plot_h as f64;
        let y = baseline as f64 - h;
        let name = escape(&standing.name);
        let _ = writeln!(
            svg,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{bar_w:.1}" height="{h:.1}" fill="{BAR_FILL}"><title>{name}: {}</title></rect>"#,
            standing.total_penalty
        );

        let cx = x + bar_w / 2.0;
        let ly = baseline as f64 + 16.0;
        let _ = writeln!(
            svg,
            r#"<text x="{cx:.1}" y="{ly:.1}" font-size="13" text-anchor="end" transform="rotate(-45 {cx:.1} {ly:.1})">{name}</text>"#
        );
    }

    // axis titles
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" font-size="15" text-anchor="middle">Strategy</text>"#,
        MARGIN_LEFT + plot_w / 2,
        HEIGHT - 15
    );
    let _ = writeln!(
        svg,
        r#"<text x="20" y="{0}" font-size="15" text-anchor="middle" transform="rotate(-90 20 {0})">Total Penalty</text>"#,
        MARGIN_TOP + plot_h / 2
    );
    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use axelrod_logic::{default_roster, run_tournament, TournamentConfig};

    fn standings() -> Standings {
        run_tournament(&default_roster(), &TournamentConfig::new(20, 3))
            .unwrap()
            .standings
    }

    #[test]
    fn test_tick_step() {
        assert_eq!(tick_step(0), 1);
        assert_eq!(tick_step(5), 1);
        assert_eq!(tick_step(9), 2);
        assert_eq!(tick_step(23), 5);
        assert_eq!(tick_step(50), 10);
        assert_eq!(tick_step(51_000), 20_000);
        assert_eq!(tick_step(6_000_000_000), 2_000_000_000);
    }

    #[test]
    fn test_one_bar_per_strategy() {
        let svg = render_bar_chart("Axelrod Tournament Results", &standings());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches(BAR_FILL).count(), 6);
        assert!(svg.contains("Tit for Tat"));
        assert!(svg.contains(">Strategy<"));
        assert!(svg.contains(">Total Penalty<"));
        assert!(svg.contains("rotate(-45"));
    }

    #[test]
    fn test_names_are_escaped() {
        assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn test_empty_standings() {
        let svg = render_bar_chart("Empty", &Standings::default());
        assert!(!svg.contains(BAR_FILL));
    }
}
