/// Outcome of parsing one comma-separated list field.
///
/// Keeps the three input states a form field can be in apart, so callers can
/// decide which ones are errors: the first list treats both `Blank` and
/// `Invalid` as errors, the second list only `Invalid`.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum ParsedList {
    /// The field was empty or contained only whitespace.
    Blank,
    /// The field was non-blank but is not a comma-separated list of numbers.
    Invalid,
    /// The field parsed successfully; values are in input order.
    Valid(Vec<f64>),
}

impl ParsedList {
    /// Returns the parsed values, or `None` for blank or invalid input.
    ///
    /// # Examples
    ///
    /// ```
    /// use duostat_stats::parse::parse_number_list;
    ///
    /// assert_eq!(parse_number_list("1,2").values(), Some(&[1.0, 2.0][..]));
    /// assert_eq!(parse_number_list("1,,2").values(), None);
    /// ```
    #[must_use]
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            ParsedList::Blank | ParsedList::Invalid => None,
            ParsedList::Valid(values) => Some(values),
        }
    }
}

/// Parses a comma-separated list of non-negative integers.
///
/// Accepted syntax: one or more tokens separated by single commas. Each
/// token, after trimming surrounding whitespace, must be a non-empty run of
/// ASCII digits. No decimal points, no signs, no whitespace inside a number.
/// Values are returned as `f64` in input order.
///
/// # Examples
///
/// ```
/// use duostat_stats::parse::{ParsedList, parse_number_list};
///
/// assert_eq!(parse_number_list("1,2,3"), ParsedList::Valid(vec![1.0, 2.0, 3.0]));
/// assert_eq!(parse_number_list("1, 2,3"), ParsedList::Valid(vec![1.0, 2.0, 3.0]));
/// assert_eq!(parse_number_list("  "), ParsedList::Blank);
/// assert_eq!(parse_number_list("1,,2"), ParsedList::Invalid);
/// assert_eq!(parse_number_list("1.5,2"), ParsedList::Invalid);
/// ```
#[must_use]
pub fn parse_number_list(input: &str) -> ParsedList {
    if input.trim().is_empty() {
        return ParsedList::Blank;
    }

    let mut values = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return ParsedList::Invalid;
        }
        let Ok(value) = token.parse::<f64>() else {
            return ParsedList::Invalid;
        };
        values.push(value);
    }
    ParsedList::Valid(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_list() {
        assert_eq!(
            parse_number_list("1,2,3"),
            ParsedList::Valid(vec![1.0, 2.0, 3.0])
        );
        assert_eq!(parse_number_list("7"), ParsedList::Valid(vec![7.0]));
        assert_eq!(
            parse_number_list("0,10,200"),
            ParsedList::Valid(vec![0.0, 10.0, 200.0])
        );
    }

    #[test]
    fn test_whitespace_around_tokens_is_trimmed() {
        assert_eq!(
            parse_number_list("1, 2,3"),
            ParsedList::Valid(vec![1.0, 2.0, 3.0])
        );
        assert_eq!(
            parse_number_list(" 4 ,\t5 "),
            ParsedList::Valid(vec![4.0, 5.0])
        );
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parse_number_list(""), ParsedList::Blank);
        assert_eq!(parse_number_list("   "), ParsedList::Blank);
    }

    #[test]
    fn test_empty_token_is_invalid() {
        assert_eq!(parse_number_list("1,,2"), ParsedList::Invalid);
        assert_eq!(parse_number_list(",1"), ParsedList::Invalid);
        assert_eq!(parse_number_list("1,"), ParsedList::Invalid);
    }

    #[test]
    fn test_signs_and_decimals_are_invalid() {
        assert_eq!(parse_number_list("-1,2"), ParsedList::Invalid);
        assert_eq!(parse_number_list("+1,2"), ParsedList::Invalid);
        assert_eq!(parse_number_list("1.5,2"), ParsedList::Invalid);
    }

    #[test]
    fn test_whitespace_inside_number_is_invalid() {
        assert_eq!(parse_number_list("1 2,3"), ParsedList::Invalid);
    }

    #[test]
    fn test_non_numeric_is_invalid() {
        assert_eq!(parse_number_list("a,b"), ParsedList::Invalid);
        assert_eq!(parse_number_list("1,two"), ParsedList::Invalid);
    }

    #[test]
    fn test_values_accessor() {
        assert_eq!(parse_number_list("1,2").values(), Some(&[1.0, 2.0][..]));
        assert_eq!(parse_number_list("").values(), None);
        assert_eq!(parse_number_list("x").values(), None);
    }
}
