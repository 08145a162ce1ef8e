//! Static taxonomy references used when building filters.
//!
//! Concept ids come from the JobTech taxonomy; codes are the legacy numeric
//! municipality/occupation-field codes both upstreams still accept.

/// A named taxonomy entry with its concept id (when known) and legacy code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConceptRef {
    pub name: &'static str,
    pub concept_id: Option<&'static str>,
    pub code: &'static str,
}

/// Swedish language concept id.
pub const SWEDISH_LANGUAGE_ID: &str = "zSLA_vw2_FXN";

/// Sweden country concept id. Prefix with `-` in a filter to exclude.
pub const SWEDEN_COUNTRY_ID: &str = "i46j_HmG_v64";

/// Larger Swedish municipalities commonly searched for.
pub const POPULAR_LOCATIONS: &[ConceptRef] = &[
    ConceptRef { name: "Stockholm", concept_id: Some("tfRE_hXa_eq7"), code: "0180" },
    ConceptRef { name: "Göteborg", concept_id: None, code: "1480" },
    ConceptRef { name: "Malmö", concept_id: None, code: "1280" },
    ConceptRef { name: "Uppsala", concept_id: None, code: "0380" },
    ConceptRef { name: "Linköping", concept_id: None, code: "0580" },
    ConceptRef { name: "Örebro", concept_id: None, code: "1880" },
    ConceptRef { name: "Västerås", concept_id: None, code: "1980" },
    ConceptRef { name: "Helsingborg", concept_id: None, code: "1283" },
];

/// Occupation fields most relevant to student job seekers.
pub const STUDENT_OCCUPATION_FIELDS: &[ConceptRef] = &[
    ConceptRef { name: "Data/IT", concept_id: Some("apaJ_2ja_LuF"), code: "3" },
    ConceptRef { name: "Utbildning", concept_id: None, code: "5" },
    ConceptRef { name: "Naturvetenskap/Forskning", concept_id: None, code: "9" },
    ConceptRef { name: "Ekonomi/Administration", concept_id: None, code: "11" },
    ConceptRef { name: "Hälso- och sjukvård", concept_id: None, code: "12" },
    ConceptRef { name: "Teknik/Ingenjör", concept_id: None, code: "18" },
    ConceptRef { name: "Kultur/Media/Design", concept_id: None, code: "22" },
];

/// Look up a popular location by display name.
pub fn location_by_name(name: &str) -> Option<&'static ConceptRef> {
    POPULAR_LOCATIONS.iter().find(|entry| entry.name == name)
}

/// Look up a student occupation field by display name.
pub fn occupation_field_by_name(name: &str) -> Option<&'static ConceptRef> {
    STUDENT_OCCUPATION_FIELDS.iter().find(|entry| entry.name == name)
}
