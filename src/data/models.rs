//! Data models for persisted selection counts.

use std::fmt;

/// The selection count of one catalog item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterRecord {
    pub item: String,
    pub count: u64,
}

/// Counts for a single catalog, ordered by item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountSection {
    pub title: String,
    pub records: Vec<CounterRecord>,
}

/// A snapshot of every catalog's counts, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountReport {
    pub sections: Vec<CountSection>,
}

impl fmt::Display for CountReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{} Counts:", section.title)?;
            for record in &section.records {
                writeln!(f, "  {}: {}", record.item, record.count)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(item: &str, count: u64) -> CounterRecord {
        CounterRecord {
            item: item.to_string(),
            count,
        }
    }

    #[test]
    fn test_report_layout() {
        let report = CountReport {
            sections: vec![
                CountSection {
                    title: "KB".to_string(),
                    records: vec![record("week_01_Twister", 2), record("week_02_Blast", 0)],
                },
                CountSection {
                    title: "Core".to_string(),
                    records: vec![record("week_01", 1)],
                },
            ],
        };

        assert_eq!(
            report.to_string(),
            "KB Counts:\n  week_01_Twister: 2\n  week_02_Blast: 0\n\nCore Counts:\n  week_01: 1\n"
        );
    }

    #[test]
    fn test_empty_section_still_has_heading() {
        let report = CountReport {
            sections: vec![CountSection {
                title: "KB".to_string(),
                records: Vec::new(),
            }],
        };
        assert_eq!(report.to_string(), "KB Counts:\n");
        assert_eq!(CountReport::default().to_string(), "");
    }
}
