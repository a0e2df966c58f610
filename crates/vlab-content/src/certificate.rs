//! Completion certificate as printable text lines.

use chrono::NaiveDate;
use serde::Serialize;

pub const PLACEHOLDER_NAME: &str = "Student Name";

/// Role of a line, used by the front end for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Title,
    Subtitle,
    Name,
    Body,
    Date,
    Signature,
    Footer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateLine {
    pub style: LineStyle,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub name: String,
    pub date: NaiveDate,
}

impl Certificate {
    /// Blank or whitespace-only names print the placeholder.
    pub fn new(name: &str, date: NaiveDate) -> Self {
        let name = name.trim();
        Self {
            name: if name.is_empty() {
                PLACEHOLDER_NAME.to_string()
            } else {
                name.to_string()
            },
            date,
        }
    }

    pub fn lines(&self) -> Vec<CertificateLine> {
        let line = |style, text: &str| CertificateLine {
            style,
            text: text.to_string(),
        };
        vec![
            line(LineStyle::Title, "Certificate of Completion"),
            line(LineStyle::Subtitle, "This is proudly presented to"),
            line(LineStyle::Name, &self.name),
            line(
                LineStyle::Body,
                "for successfully completing all Virtual Lab Experiments and Quiz",
            ),
            line(LineStyle::Date, &format!("Date: {}", self.date.format("%Y-%m-%d"))),
            line(LineStyle::Signature, "__________________"),
            line(LineStyle::Signature, "Instructor"),
            line(LineStyle::Footer, "Virtual Lab Project"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_lines() {
        let lines = Certificate::new("Ada", date()).lines();
        assert_eq!(lines[0].text, "Certificate of Completion");
        assert_eq!(lines[2].text, "Ada");
        assert_eq!(lines[2].style, LineStyle::Name);
        assert_eq!(lines[4].text, "Date: 2024-03-09");
        assert_eq!(lines.last().unwrap().text, "Virtual Lab Project");
    }

    #[test]
    fn test_blank_name_uses_placeholder() {
        assert_eq!(Certificate::new("   ", date()).name, PLACEHOLDER_NAME);
        assert_eq!(Certificate::new("", date()).lines()[2].text, "Student Name");
        assert_eq!(Certificate::new("  Grace ", date()).name, "Grace");
    }
}
