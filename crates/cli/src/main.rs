use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use trigon::api::demo_triangles;
use trigon::Triangle;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Triangle metrics demonstration driver")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the sample triangles and print their metrics
    Demo {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Also write the rows as JSON here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// One triangle as shown by `demo`.
#[derive(Debug, Serialize)]
struct Row {
    index: usize,
    kind: &'static str,
    valid: bool,
    sides: [f64; 3],
    diagnostics: Vec<&'static str>,
    /// Present when the perimeter is positive.
    metrics: Option<Metrics>,
    /// Present for right-kind triangles (values are 0 when not right-angled).
    radii: Option<Radii>,
}

#[derive(Debug, Serialize)]
struct Metrics {
    median_a: f64,
    midline_b: f64,
    perimeter: f64,
    area: f64,
}

#[derive(Debug, Serialize)]
struct Radii {
    inscribed: f64,
    circumscribed: f64,
}

impl Row {
    fn new(index: usize, t: &Triangle) -> Self {
        let metrics = (t.perimeter() > 0.0).then(|| Metrics {
            median_a: t.median('a'),
            midline_b: t.midline('b'),
            perimeter: t.perimeter(),
            area: t.area(),
        });
        let radii = t.as_right().map(|r| Radii {
            inscribed: r.inscribed_radius(),
            circumscribed: r.circumscribed_radius(),
        });
        Self {
            index,
            kind: t.kind().name(),
            valid: t.is_valid(),
            sides: t.sides().as_array(),
            diagnostics: t.diagnostics().iter().map(|d| d.code()).collect(),
            metrics,
            radii,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo { format, out } => demo(format, out),
        Action::Report => report(),
    }
}

fn demo(format: Format, out: Option<PathBuf>) -> Result<()> {
    let triangles = demo_triangles();
    tracing::info!(count = triangles.len(), format = ?format, out = ?out, "demo");
    for t in &triangles {
        t.log_diagnostics();
    }
    let rows: Vec<Row> = triangles
        .iter()
        .enumerate()
        .map(|(i, t)| Row::new(i + 1, t))
        .collect();

    match format {
        Format::Text => {
            for (t, row) in triangles.iter().zip(&rows) {
                print!("{}", render_text(t, row));
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    if let Some(out) = out {
        provenance::write_json(&out, &rows)?;
        let samples = rows.iter().map(|r| r.kind.to_string()).collect();
        let params = serde_json::json!({ "format": format!("{format:?}").to_lowercase() });
        let prov = provenance::write_sidecar(&out, provenance::Payload::new(params, samples))?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote report");
    }
    Ok(())
}

fn render_text(t: &Triangle, row: &Row) -> String {
    let mut s = format!("\n--- TRIANGLE #{} ---\n", row.index);
    s.push_str(&t.describe());
    if let Some(m) = &row.metrics {
        s.push_str(&format!("  Median ma: {}\n", m.median_a));
        s.push_str(&format!("  Midline || b: {}\n", m.midline_b));
        s.push_str(&format!("  Perimeter: {}\n", m.perimeter));
        s.push_str(&format!("  Area: {}\n", m.area));
    }
    if let Some(r) = &row.radii {
        s.push_str(&format!("  Inscribed radius (r): {}\n", r.inscribed));
        s.push_str(&format!("  Circumscribed radius (R): {}\n", r.circumscribed));
    }
    s
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "trigon_version": trigon::VERSION,
        "samples": demo_triangles().iter().map(|t| t.kind().name()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_capabilities() {
        let rows: Vec<Row> = demo_triangles()
            .iter()
            .enumerate()
            .map(|(i, t)| Row::new(i + 1, t))
            .collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.metrics.is_some()));
        let right = rows.iter().find(|r| r.kind == "right").unwrap();
        let radii = right.radii.as_ref().unwrap();
        assert!((radii.inscribed - 1.0).abs() < 1e-12);
        assert!((radii.circumscribed - 2.5).abs() < 1e-12);
        assert!(rows.iter().filter(|r| r.kind != "right").all(|r| r.radii.is_none()));
    }

    #[test]
    fn invalid_row_has_no_metrics() {
        let t = Triangle::by_medians(1.0, 1.0, 5.0);
        let row = Row::new(1, &t);
        assert!(!row.valid);
        assert!(row.metrics.is_none());
        assert_eq!(row.diagnostics, vec!["medians_not_triangle"]);
        let text = render_text(&t, &row);
        assert!(text.contains("TRIANGLE #1"));
        assert!(!text.contains("Area"));
    }

    #[test]
    fn cli_parses_demo_flags() {
        let cmd = Cmd::try_parse_from(["cli", "demo", "--format", "json"]).unwrap();
        match cmd.action {
            Action::Demo { format, out } => {
                assert_eq!(format, Format::Json);
                assert!(out.is_none());
            }
            Action::Report => panic!("expected demo"),
        }
    }
}
