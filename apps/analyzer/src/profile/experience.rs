//! Work history: total years of experience and structured experience entries.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::profile::skills::{extract_primary_skills, extract_secondary_skills};

static EXPLICIT_YEARS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\+?\s*years?\s*(?:of\s+)?experience").expect("valid years regex")
});
static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{4})\s*-\s*(?:present|(\d{4}))").expect("valid range regex")
});
static MONTHS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+)\s*(?:months?|mos?)\b").expect("valid months regex"));
static SECTION_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:experience|work history|employment)[:\s]*").expect("valid header regex")
});
static NEXT_SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\w+:").expect("valid next-section regex"));
static DATED_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\d{4}|present").expect("valid dated-line regex"));
static DEGREE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)bachelor|master|phd").expect("valid degree regex"));
static ENTRY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(.*?)(?:\s+at\s+|\s*,\s*|\s+-\s+)([^(]+?)\s*\((\d{4}\s*-\s*(?:present|\d{4}))\)",
    )
    .expect("valid entry regex")
});
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[•-]\s").expect("valid bullet regex"));
static EDUCATION_BULLET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)bachelor|master|phd|university|college|gpa|\d{4}\s*-\s*\d{4}")
        .expect("valid education bullet regex")
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
}

/// Total years of professional experience.
///
/// An explicit "N years experience" statement wins. Otherwise `YYYY - YYYY|present`
/// ranges are merged in start order so overlapping roles are not counted twice,
/// "N months" mentions are added, and the result is rounded to one decimal with a
/// floor of 1. Text without any range yields 0.
pub fn total_experience_years(text: &str, current_year: i32) -> f64 {
    if let Some(years) = EXPLICIT_YEARS_RE
        .captures(text)
        .and_then(|c| c[1].parse::<f64>().ok())
    {
        return years;
    }

    let mut ranges: Vec<(i32, i32)> = YEAR_RANGE_RE
        .captures_iter(text)
        .filter_map(|c| {
            let start = c[1].parse::<i32>().ok()?;
            let end = match c.get(2) {
                Some(end) => end.as_str().parse::<i32>().ok()?,
                None => current_year,
            };
            Some((start, end))
        })
        .collect();

    if ranges.is_empty() {
        return 0.0;
    }
    ranges.sort_by_key(|(start, _)| *start);

    let mut total_years = 0.0_f64;
    let mut last_end = 0;
    for (start, end) in ranges {
        if start > last_end {
            total_years += (end - start) as f64;
        } else if end > last_end {
            total_years += (end - last_end) as f64;
        }
        last_end = last_end.max(end);
    }

    let total_months: u32 = MONTHS_RE
        .captures_iter(text)
        .filter_map(|c| c[1].parse::<u32>().ok())
        .sum();
    total_years += total_months as f64 / 12.0;

    ((total_years * 10.0).round() / 10.0).max(1.0)
}

/// Parses dated role lines (`Title at Company (2018 - Present)`) out of every
/// experience section. A section runs until the next `Word:` line.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    experience_sections(text)
        .into_iter()
        .flat_map(parse_section)
        .collect()
}

fn experience_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut cursor = 0;

    while let Some(header) = SECTION_HEADER_RE.find_at(text, cursor) {
        let body_start = header.end();
        let body_end = NEXT_SECTION_RE
            .find_at(text, body_start)
            .map(|m| m.start())
            .unwrap_or(text.len());
        sections.push(&text[body_start..body_end]);
        cursor = body_end.max(body_start + 1).min(text.len());
        if cursor >= text.len() {
            break;
        }
    }

    sections
}

fn parse_section(section: &str) -> Vec<ExperienceEntry> {
    let lines: Vec<&str> = section.lines().map(str::trim).collect();
    let mut entries: Vec<ExperienceEntry> = Vec::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }
        if BULLET_RE.is_match(line) {
            let bullet = BULLET_RE.replace(line, "").trim().to_string();
            if let Some(entry) = entries.last_mut() {
                if !EDUCATION_BULLET_RE.is_match(&bullet) {
                    entry.responsibilities.push(bullet);
                }
            }
            continue;
        }
        if !is_role_line(line) {
            continue;
        }
        if let Some(caps) = ENTRY_RE.captures(line) {
            let mut technologies = extract_primary_skills(line);
            technologies.extend(extract_secondary_skills(line));
            entries.push(ExperienceEntry {
                title: caps[1].trim().to_string(),
                company: caps[2].trim().to_string(),
                duration: caps[3].trim().to_string(),
                responsibilities: Vec::new(),
                technologies,
            });
        }
    }

    entries
}

fn is_role_line(line: &str) -> bool {
    DATED_LINE_RE.is_match(line)
        && !line.to_lowercase().contains("education")
        && !DEGREE_RE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Summary: Experienced software developer with expertise in JavaScript.\n\
        Experience:\n\
        Software Developer at TechCorp (2018 - Present)\n\
        - Developed web applications using React and Node.js\n\
        - Collaborated with cross-functional teams\n\
        Junior Developer, WebWorks (2015 - 2018)\n\
        - Maintained Python scripts\n\
        Education:\n\
        Bachelor of Science in Computer Science (2011 - 2015)\n";

    #[test]
    fn test_explicit_years_statement_wins() {
        assert_eq!(total_experience_years("7+ years experience in Rust", 2025), 7.0);
        assert_eq!(total_experience_years("5 years of experience", 2025), 5.0);
    }

    #[test]
    fn test_sequential_ranges_sum() {
        let text = "Acme (2015 - 2018)\nGlobex (2018 - 2020)";
        assert_eq!(total_experience_years(text, 2025), 5.0);
    }

    #[test]
    fn test_overlapping_ranges_not_double_counted() {
        let text = "Acme (2015 - 2020)\nSide gig (2018 - 2019)\nGlobex (2019 - 2022)";
        assert_eq!(total_experience_years(text, 2025), 7.0);
    }

    #[test]
    fn test_present_uses_current_year() {
        assert_eq!(total_experience_years("Acme (2020 - Present)", 2025), 5.0);
    }

    #[test]
    fn test_months_are_added() {
        let text = "Acme (2020 - 2022)\nInternship 6 months";
        assert_eq!(total_experience_years(text, 2025), 2.5);
    }

    #[test]
    fn test_short_range_floors_at_one_year() {
        assert_eq!(total_experience_years("Acme (2024 - 2024)", 2025), 1.0);
    }

    #[test]
    fn test_no_dates_means_zero() {
        assert_eq!(total_experience_years("no dates at all", 2025), 0.0);
    }

    #[test]
    fn test_extracts_entries_with_their_bullets() {
        let entries = extract_experience(SAMPLE);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].title, "Software Developer");
        assert_eq!(entries[0].company, "TechCorp");
        assert_eq!(entries[0].duration, "2018 - Present");
        assert_eq!(entries[0].responsibilities.len(), 2);

        assert_eq!(entries[1].title, "Junior Developer");
        assert_eq!(entries[1].company, "WebWorks");
        assert_eq!(
            entries[1].responsibilities,
            vec!["Maintained Python scripts".to_string()]
        );
    }

    #[test]
    fn test_degree_lines_are_not_roles() {
        let entries = extract_experience(SAMPLE);
        assert!(entries.iter().all(|e| !e.title.contains("Bachelor")));
    }

    #[test]
    fn test_technologies_come_from_role_line() {
        let text = "Experience:\nReact Engineer at Shop (2020 - 2022)\n";
        let entries = extract_experience(text);
        assert_eq!(entries[0].technologies, vec!["React".to_string()]);
    }

    #[test]
    fn test_no_section_means_no_entries() {
        assert!(extract_experience("Skills: Rust").is_empty());
    }
}
