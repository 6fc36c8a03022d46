use std::path::PathBuf;

use crate::{
    report::{Report, build_report},
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CalcArg {
    /// First list of numbers, e.g. "1,2,3" (required)
    first: String,
    /// Second list of numbers (optional)
    second: Option<String>,
    /// Print the report as JSON instead of plain text
    #[clap(long)]
    json: bool,
    /// Write the report to a file instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CalcArg) -> anyhow::Result<()> {
    let CalcArg {
        first,
        second,
        json,
        output,
    } = arg;

    let report = build_report(first, second.as_deref().unwrap_or(""))?;

    let mut output = Output::from_output_path(output.clone())?;
    if *json {
        output.write_json(&report)?;
    } else {
        output.write_text(&render_plain(&report))?;
    }
    Ok(())
}

fn render_plain(report: &Report) -> String {
    let mut out = String::new();
    for (i, section) in report.sections().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&section.title);
        out.push('\n');
        for (label, value) in &section.rows {
            out.push_str(&format!("  {label:<18} {value:>10}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_sections() {
        let report = build_report("1,2,3", "4,5,6").unwrap();
        let text = render_plain(&report);

        assert!(text.starts_with("First list (3)\n"));
        assert!(text.contains("\nSecond list (3)\n"));
        assert!(text.contains("\nCombination stats\n"));
        assert!(text.contains("Mean"));
        assert!(text.contains("0.8165"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_plain_is_idempotent() {
        let first = render_plain(&build_report("1,2,3", "").unwrap());
        let second = render_plain(&build_report("1,2,3", "").unwrap());
        assert_eq!(first, second);
    }
}
