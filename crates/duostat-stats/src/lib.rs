//! Statistical core of the duostat calculator.
//!
//! This crate provides everything needed to turn one or two comma-separated
//! number lists into the statistics duostat reports:
//!
//! - **Input parsing**: validate a comma-separated list field and keep blank,
//!   malformed, and valid inputs distinguishable
//! - **Descriptive statistics**: count, mean, population standard deviation,
//!   and the unbiased sample-deviation estimate for a single list
//! - **Pooled statistics**: degrees of freedom, pooled standard errors under
//!   equal- and unequal-variance assumptions, and the Welch–Satterthwaite
//!   approximate degrees of freedom for two lists
//!
//! # Modules
//!
//! - [`parse`]: Comma-separated list field parsing
//! - [`descriptive`]: Single-sample descriptive statistics
//! - [`pooled`]: Two-sample pooled statistics
//!
//! # Examples
//!
//! ## Parsing a list field
//!
//! ```
//! use duostat_stats::parse::{ParsedList, parse_number_list};
//!
//! assert_eq!(parse_number_list("1, 2,3"), ParsedList::Valid(vec![1.0, 2.0, 3.0]));
//! assert!(parse_number_list("").is_blank());
//! assert!(parse_number_list("-1,2").is_invalid());
//! ```
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use duostat_stats::descriptive::SampleStats;
//!
//! let stats = SampleStats::new([1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(stats.mean, 2.0);
//! assert_eq!(stats.estimate, Some(1.0));
//! ```
//!
//! ## Combining two samples
//!
//! ```
//! use duostat_stats::{descriptive::SampleStats, pooled::PooledStats};
//!
//! let first = SampleStats::new([1.0, 2.0, 3.0]).unwrap();
//! let second = SampleStats::new([4.0, 5.0, 6.0]).unwrap();
//! let pooled = PooledStats::new(&first, &second).unwrap();
//! assert_eq!(pooled.degrees_of_freedom, 4);
//! ```

pub mod descriptive;
pub mod parse;
pub mod pooled;
