use duostat_stats::{
    descriptive::SampleStats,
    parse::{ParsedList, parse_number_list},
    pooled::PooledStats,
};
use serde::Serialize;

/// User-visible input errors, one per form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// The required first field is blank or malformed.
    #[display("Invalid input (first list)!")]
    FirstList,
    /// The optional second field is non-blank but malformed.
    #[display("Invalid input (second list)!")]
    SecondList,
}

/// Everything one trigger activation computes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub first: SampleStats,
    pub second: Option<SampleStats>,
    pub combination: Option<PooledStats>,
}

/// One labeled block of a rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub rows: Vec<(String, String)>,
}

/// Parses both field strings and computes every statistic they support.
///
/// The first field must hold a valid list; the second may be blank. Pooled
/// statistics are included only when both lists are valid and both carry an
/// unbiased estimate.
pub fn build_report(first_input: &str, second_input: &str) -> Result<Report, InputError> {
    let first = match parse_number_list(first_input) {
        ParsedList::Valid(values) => {
            SampleStats::from_slice(&values).ok_or(InputError::FirstList)?
        }
        ParsedList::Blank | ParsedList::Invalid => return Err(InputError::FirstList),
    };

    let second = match parse_number_list(second_input) {
        ParsedList::Valid(values) => {
            Some(SampleStats::from_slice(&values).ok_or(InputError::SecondList)?)
        }
        ParsedList::Blank => None,
        ParsedList::Invalid => return Err(InputError::SecondList),
    };

    let combination = second
        .as_ref()
        .and_then(|stats| PooledStats::new(&first, stats));

    Ok(Report {
        first,
        second,
        combination,
    })
}

impl Report {
    /// Renders the report as titled label/value sections, every statistic
    /// rounded to 4 decimal places. An absent estimate renders as `n/a`.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = vec![sample_section("First list", &self.first)];
        if let Some(second) = &self.second {
            sections.push(sample_section("Second list", second));
        }
        if let Some(combination) = &self.combination {
            sections.push(combination_section(combination));
        }
        sections
    }
}

fn sample_section(name: &str, stats: &SampleStats) -> Section {
    Section {
        title: format!("{name} ({})", stats.count),
        rows: vec![
            ("Mean".to_string(), format_value(stats.mean)),
            ("StdDev".to_string(), format_value(stats.std_dev)),
            ("Estimate S".to_string(), format_optional(stats.estimate)),
            (
                "Estimate S^2".to_string(),
                format_optional(stats.estimate.map(|s| s * s)),
            ),
        ],
    }
}

fn combination_section(pooled: &PooledStats) -> Section {
    Section {
        title: "Combination stats".to_string(),
        rows: vec![
            ("df".to_string(), pooled.degrees_of_freedom.to_string()),
            (
                "SE (equal var)".to_string(),
                format_value(pooled.equal_variance_se),
            ),
            (
                "SE (unequal var)".to_string(),
                format_value(pooled.unequal_variance_se),
            ),
            ("Welch df".to_string(), format_value(pooled.welch_df)),
        ],
    }
}

/// Formats a statistic rounded to 4 decimal places for display.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:.4}")
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), format_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InputError::FirstList.to_string(),
            "Invalid input (first list)!"
        );
        assert_eq!(
            InputError::SecondList.to_string(),
            "Invalid input (second list)!"
        );
    }

    #[test]
    fn test_blank_first_field_is_an_error() {
        assert_eq!(build_report("", "1,2"), Err(InputError::FirstList));
        assert_eq!(build_report("   ", ""), Err(InputError::FirstList));
    }

    #[test]
    fn test_malformed_first_field_is_an_error() {
        assert_eq!(build_report("1,,2", ""), Err(InputError::FirstList));
        assert_eq!(build_report("-1,2", "3,4"), Err(InputError::FirstList));
    }

    #[test]
    fn test_blank_second_field_is_not_an_error() {
        let report = build_report("1,2,3", "").unwrap();
        assert_eq!(report.second, None);
        assert_eq!(report.combination, None);
    }

    #[test]
    fn test_malformed_second_field_is_an_error() {
        assert_eq!(build_report("1,2,3", "x"), Err(InputError::SecondList));
        assert_eq!(build_report("1,2,3", "4,,5"), Err(InputError::SecondList));
    }

    #[test]
    fn test_two_valid_lists_include_combination() {
        let report = build_report("1,2,3", "4,5,6").unwrap();
        let combination = report.combination.unwrap();
        assert_eq!(combination.degrees_of_freedom, 4);
    }

    #[test]
    fn test_single_element_list_suppresses_combination() {
        // n = 1 leaves the estimate undefined; the report must still build.
        let report = build_report("7", "4,5,6").unwrap();
        assert_eq!(report.first.estimate, None);
        assert_eq!(report.combination, None);

        let sections = report.sections();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].rows[2], ("Estimate S".to_string(), "n/a".to_string()));
    }

    #[test]
    fn test_section_titles_and_rounding() {
        let report = build_report("1,2,3", "4,5,6").unwrap();
        let sections = report.sections();

        assert_eq!(sections[0].title, "First list (3)");
        assert_eq!(sections[1].title, "Second list (3)");
        assert_eq!(sections[2].title, "Combination stats");

        assert_eq!(sections[0].rows[0], ("Mean".to_string(), "2.0000".to_string()));
        assert_eq!(sections[0].rows[1], ("StdDev".to_string(), "0.8165".to_string()));
        assert_eq!(
            sections[2].rows[1],
            ("SE (equal var)".to_string(), "0.8165".to_string())
        );
        assert_eq!(
            sections[2].rows[2],
            ("SE (unequal var)".to_string(), "0.8165".to_string())
        );
        assert_eq!(sections[2].rows[3], ("Welch df".to_string(), "4.0000".to_string()));
    }

    #[test]
    fn test_identical_input_renders_identically() {
        let a = build_report("10, 20,30", "5,5, 5").unwrap();
        let b = build_report("10, 20,30", "5,5, 5").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.sections(), b.sections());
    }

    #[test]
    fn test_json_shape() {
        let report = build_report("1,2,3", "").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["first"]["count"], 3);
        assert!(json["second"].is_null());
        assert!(json["combination"].is_null());
    }
}
