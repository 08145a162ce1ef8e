//! Curated filter presets for student-oriented searches.
//!
//! Each preset expands to a plain [`SearchFilter`]; nothing here touches
//! the network. Term lists are bilingual (Swedish/English) because the
//! upstream corpus mixes both languages.

use crate::catalog::{SWEDEN_COUNTRY_ID, SWEDISH_LANGUAGE_ID};
use crate::error::SourceError;
use crate::filter::{SearchFilter, SortOrder};

/// Options for the general student-job preset.
#[derive(Debug, Clone)]
pub struct StudentSearch {
    /// Free-text keyword; defaults to `student` when empty.
    pub keyword: String,
    /// Municipality concept id or code.
    pub location: String,
    /// Occupation-field concept id.
    pub field: String,
    pub part_time: bool,
    pub entry_level: bool,
    pub internship: bool,
    pub remote: bool,
    pub max_results: u32,
}

impl Default for StudentSearch {
    fn default() -> Self {
        StudentSearch {
            keyword: String::new(),
            location: String::new(),
            field: String::new(),
            part_time: false,
            entry_level: false,
            internship: false,
            remote: false,
            max_results: 50,
        }
    }
}

impl StudentSearch {
    /// Expand the options into a relevance-sorted filter.
    pub fn into_filter(self) -> SearchFilter {
        let mut query = if self.keyword.trim().is_empty() {
            "student".to_string()
        } else {
            self.keyword.trim().to_string()
        };

        if self.part_time {
            query.push_str(" deltid \"part time\" \"part-time\"");
        }
        if self.entry_level {
            query.push_str(" junior trainee \"entry level\" \"entry-level\" nybörjare \"ingen erfarenhet\"");
        }
        if self.internship {
            query.push_str(" praktik internship \"work placement\" \"summer job\" \"sommarjobb\"");
        }

        SearchFilter::default()
            .with_query(query)
            .with_municipality(self.location)
            .with_occupation_field(self.field)
            .with_remote(self.remote)
            .with_limit(self.max_results)
            .with_sort(SortOrder::Relevance)
    }
}

fn terms_filter(terms: &[&str], field: &str, location: &str, sort: SortOrder) -> SearchFilter {
    let mut query = terms.join(" ");
    if !field.trim().is_empty() {
        query.push(' ');
        query.push_str(field.trim());
    }
    SearchFilter::default()
        .with_query(query)
        .with_municipality(location.to_string())
        .with_occupation_field(field.to_string())
        .with_limit(50)
        .with_sort(sort)
}

/// Internships and practical training; `paid` widens the terms toward
/// compensated positions.
pub fn internships(field: &str, location: &str, paid: bool) -> SearchFilter {
    let mut terms = vec![
        "internship",
        "praktik",
        "practical training",
        "praktikplats",
        "trainee",
        "traineeprogram",
        "work placement",
        "thesis project",
        "examensarbete",
        "degree project",
    ];
    if paid {
        terms.extend([
            "paid internship",
            "paid trainee",
            "betald praktik",
            "stipend",
            "stipendium",
            "salary",
            "lön",
        ]);
    }
    terms_filter(&terms, field, location, SortOrder::PubdateDesc)
}

/// Summer jobs and other seasonal positions.
pub fn seasonal_jobs(location: &str, field: &str) -> SearchFilter {
    let terms = [
        "summer job",
        "sommarjobb",
        "seasonal",
        "säsong",
        "sommar",
        "summer work",
        "summer internship",
        "summer position",
    ];
    // Seasonal postings churn quickly; ask for the upstream maximum.
    terms_filter(&terms, field, location, SortOrder::PubdateDesc).with_limit(100)
}

/// Positions aimed at recent graduates.
pub fn recent_graduate_jobs(field: &str, location: &str) -> SearchFilter {
    let terms = [
        "recent graduate",
        "nyexaminerad",
        "new graduate",
        "graduate program",
        "graduate scheme",
        "graduate position",
        "junior",
        "entry-level",
        "entry level",
        "trainee",
        "graduate trainee",
    ];
    terms_filter(&terms, field, location, SortOrder::PubdateDesc)
}

/// Positions that do not require prior experience.
pub fn no_experience_jobs(field: &str, location: &str) -> SearchFilter {
    let terms = [
        "no experience",
        "ingen erfarenhet",
        "no prior experience",
        "ingen tidigare erfarenhet",
        "entry level",
        "entry-level",
        "nybörjare",
        "junior",
        "graduate",
    ];
    terms_filter(&terms, field, location, SortOrder::PubdateDesc)
}

/// Positions with flexible or off-hours schedules.
pub fn flexible_hour_jobs(location: &str) -> SearchFilter {
    let terms = [
        "flexible hours",
        "flexible working",
        "flexibla tider",
        "flex time",
        "flextime",
        "flextid",
        "part time",
        "part-time",
        "deltid",
        "evening work",
        "weekend work",
        "kvällsarbete",
        "helgarbete",
    ];
    terms_filter(&terms, "", location, SortOrder::PubdateDesc)
}

/// On-campus positions at a named university.
pub fn campus_jobs(university: &str) -> Result<SearchFilter, SourceError> {
    let university = university.trim();
    if university.is_empty() {
        return Err(SourceError::InvalidInput(
            "University name is required".to_string(),
        ));
    }
    let terms = [
        "campus",
        "on campus",
        "university",
        "student job",
        "student assistant",
        "teaching assistant",
        "research assistant",
    ];
    Ok(SearchFilter::default()
        .with_query(format!("{university} {}", terms.join(" ")))
        .with_limit(30)
        .with_sort(SortOrder::PubdateDesc))
}

/// Positions matching an academic degree, with common abbreviations
/// expanded.
pub fn by_degree(degree: &str, location: &str) -> Result<SearchFilter, SourceError> {
    let degree = degree.trim();
    if degree.is_empty() {
        return Err(SourceError::InvalidInput("Degree is required".to_string()));
    }
    let expanded = match degree {
        "BSc" => "Bachelor of Science",
        "BA" => "Bachelor of Arts",
        "MSc" => "Master of Science",
        "MA" => "Master of Arts",
        "PhD" => "PhD Doctorate",
        "MBA" => "Master of Business Administration",
        other => other,
    };
    let query = if expanded == degree {
        format!("{degree} utbildning degree examen")
    } else {
        format!("{expanded} {degree} utbildning degree examen")
    };
    Ok(SearchFilter::default()
        .with_query(query)
        .with_municipality(location.to_string())
        .with_limit(50))
}

/// Positions matching a set of skills, sorted by relevance.
pub fn by_skills(skills: &[&str], location: &str) -> Result<SearchFilter, SourceError> {
    if skills.is_empty() {
        return Err(SourceError::InvalidInput(
            "At least one skill is required".to_string(),
        ));
    }
    Ok(SearchFilter::default()
        .with_query(skills.join(" "))
        .with_municipality(location.to_string())
        .with_limit(50)
        .with_sort(SortOrder::Relevance))
}

/// Public-sector positions: Swedish government employers all have
/// organization numbers starting with `2`.
pub fn public_sector_jobs(keyword: &str) -> SearchFilter {
    SearchFilter::default()
        .with_query(keyword.to_string())
        .with_employer("2")
        .with_limit(50)
        .with_sort(SortOrder::PubdateDesc)
}

/// Swedish-language positions outside Sweden.
pub fn swedish_jobs_abroad() -> SearchFilter {
    SearchFilter {
        language: SWEDISH_LANGUAGE_ID.to_string(),
        country: format!("-{SWEDEN_COUNTRY_ID}"),
        ..SearchFilter::default()
    }
    .with_limit(50)
    .with_sort(SortOrder::PubdateDesc)
}

/// Free-text query that excludes a term (`include -exclude`).
pub fn negative_search(include: &str, exclude: &str) -> Result<SearchFilter, SourceError> {
    let include = include.trim();
    if include.is_empty() {
        return Err(SourceError::InvalidInput(
            "Include term is required".to_string(),
        ));
    }
    let query = if exclude.trim().is_empty() {
        include.to_string()
    } else {
        format!("{include} -{}", exclude.trim())
    };
    Ok(SearchFilter::default()
        .with_query(query)
        .with_limit(50)
        .with_sort(SortOrder::PubdateDesc))
}

/// Prefix wildcard query (`prefix*`).
pub fn wildcard_search(prefix: &str) -> Result<SearchFilter, SourceError> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Err(SourceError::InvalidInput("Prefix is required".to_string()));
    }
    Ok(SearchFilter::default()
        .with_query(format!("{prefix}*"))
        .with_limit(50)
        .with_sort(SortOrder::PubdateDesc))
}

/// Exact-phrase query (`"phrase"`).
pub fn exact_phrase_search(phrase: &str) -> Result<SearchFilter, SourceError> {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return Err(SourceError::InvalidInput("Phrase is required".to_string()));
    }
    Ok(SearchFilter::default()
        .with_query(format!("\"{phrase}\""))
        .with_limit(50)
        .with_sort(SortOrder::PubdateDesc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_search_defaults_keyword() {
        let filter = StudentSearch::default().into_filter();
        assert_eq!(filter.q, "student");
        assert_eq!(filter.sort, Some(SortOrder::Relevance));
        assert_eq!(filter.limit, 50);
    }

    #[test]
    fn student_search_expands_term_groups() {
        let filter = StudentSearch {
            keyword: "kassör".to_string(),
            part_time: true,
            internship: true,
            ..StudentSearch::default()
        }
        .into_filter();
        assert!(filter.q.starts_with("kassör"));
        assert!(filter.q.contains("deltid"));
        assert!(filter.q.contains("praktik"));
        assert!(!filter.q.contains("nybörjare"));
    }

    #[test]
    fn paid_internships_widen_terms() {
        let unpaid = internships("", "", false);
        let paid = internships("", "", true);
        assert!(!unpaid.q.contains("betald praktik"));
        assert!(paid.q.contains("betald praktik"));
    }

    #[test]
    fn degree_abbreviations_expand() {
        let filter = by_degree("MSc", "").unwrap();
        assert!(filter.q.contains("Master of Science"));
        assert!(filter.q.contains("MSc"));
        assert!(by_degree("  ", "").is_err());
    }

    #[test]
    fn public_sector_filters_on_org_prefix() {
        let filter = public_sector_jobs("handläggare");
        assert_eq!(filter.employer, "2");
        assert_eq!(filter.q, "handläggare");
    }

    #[test]
    fn swedish_abroad_negates_sweden() {
        let filter = swedish_jobs_abroad();
        assert_eq!(filter.language, SWEDISH_LANGUAGE_ID);
        assert_eq!(filter.country, format!("-{SWEDEN_COUNTRY_ID}"));
    }

    #[test]
    fn query_shape_helpers_validate_input() {
        assert_eq!(negative_search("kock", "diskare").unwrap().q, "kock -diskare");
        assert_eq!(negative_search("kock", "").unwrap().q, "kock");
        assert!(negative_search("", "diskare").is_err());

        assert_eq!(wildcard_search("program").unwrap().q, "program*");
        assert!(wildcard_search(" ").is_err());

        assert_eq!(exact_phrase_search("junior utvecklare").unwrap().q, "\"junior utvecklare\"");
        assert!(exact_phrase_search("").is_err());
    }

    #[test]
    fn skills_require_at_least_one_entry() {
        assert!(by_skills(&[], "").is_err());
        let filter = by_skills(&["rust", "sql"], "0180").unwrap();
        assert_eq!(filter.q, "rust sql");
        assert_eq!(filter.municipality, "0180");
    }
}
