//! HTML results page

use axelrod_logic::TournamentResult;

use crate::chart::{escape, render_bar_chart};
use crate::report::REPORT_TITLE;

pub fn render_index(result: &TournamentResult) -> String {
    let chart = render_bar_chart(REPORT_TITLE, &result.standings);

    let mut rows = String::new();
    for standing in result.standings.iter() {
        rows.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td></tr>\n",
            escape(&standing.name),
            standing.total_penalty
        ));
    }

    let leader = match result.standings.leader() {
        Some(s) => format!(
            "  <p>Lowest total penalty: <strong>{}</strong> ({})</p>\n",
            escape(&s.name),
            s.total_penalty
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; margin: 2rem; }}
    table {{ border-collapse: collapse; margin-top: 1rem; }}
    td, th {{ border: 1px solid #ccc; padding: 0.3rem 0.8rem; text-align: left; }}
  </style>
</head>
<body>
  <h1>{title}</h1>
  <p>{pairings} pairings of {rounds} rounds each, seed {seed}. Lower penalty is better.</p>
{leader}  <div class="chart">
{chart}  </div>
  <table>
    <thead><tr><th>Strategy</th><th>Total Penalty</th></tr></thead>
    <tbody>
{rows}    </tbody>
  </table>
</body>
</html>
"#,
        title = REPORT_TITLE,
        pairings = result.pairings.len(),
        rounds = result.rounds,
        seed = result.seed,
        leader = leader,
        chart = chart,
        rows = rows,
    )
}
