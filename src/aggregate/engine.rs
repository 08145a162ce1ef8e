//! Dual-source merge: dedup, sort, truncate, error folding.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::{SearchResult, SourceSearchResult};
use crate::model::JobHit;

/// Per-source limit when fanning out to both sources: each is asked for
/// `ceil(limit / 2)` so the merged, deduplicated set can still reach the
/// requested limit. A heuristic, not a guarantee — heavy duplication can
/// leave the final count short.
pub fn split_limit(limit: u32) -> u32 {
    limit.div_ceil(2)
}

/// Combine the two fetcher outputs into one aggregated result.
///
/// Both inputs must already be resolved; this never short-circuits on the
/// first failure. `limit` is the caller's original (clamped) limit, applied
/// after merging.
pub fn combine(a: SourceSearchResult, b: SourceSearchResult, limit: u32) -> SearchResult {
    let mut errors = Vec::new();
    if let Some(error) = &a.error {
        errors.push(format!("{}: {}", a.source.api_label(), error));
    }
    if let Some(error) = &b.error {
        errors.push(format!("{}: {}", b.source.api_label(), error));
    }

    let mut sources = Vec::new();
    if a.error.is_none() {
        sources.push(a.source);
    }
    if b.error.is_none() {
        sources.push(b.source);
    }

    let total = a.total.max(b.total);

    // Concatenation order fixes the dedup tie-break: the first source's
    // copy of a colliding identifier survives.
    let mut hits = a.hits;
    hits.extend(b.hits);
    let mut hits = dedup_by_id(hits);
    sort_by_publication_date(&mut hits);
    hits.truncate(limit as usize);

    SearchResult {
        hits,
        total,
        sources,
        error: if errors.is_empty() {
            None
        } else {
            Some(errors.join("; "))
        },
    }
}

/// Keep the first occurrence of each identifier, in input order.
///
/// Identifiers are assumed globally unique across both upstreams; if they
/// ever collide for unrelated ads, the later copy is silently lost here.
fn dedup_by_id(hits: Vec<JobHit>) -> Vec<JobHit> {
    let mut seen = HashSet::with_capacity(hits.len());
    hits.into_iter()
        .filter(|hit| seen.insert(hit.id.clone()))
        .collect()
}

/// Newest first. Hits missing a publication date compare equal, so the
/// stable sort leaves their relative order untouched.
fn sort_by_publication_date(hits: &mut [JobHit]) {
    hits.sort_by(|a, b| match (&a.publication_date, &b.publication_date) {
        (Some(a_date), Some(b_date)) => b_date.cmp(a_date),
        _ => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Employer, SourceTag, WorkplaceAddress};
    use chrono::{TimeZone, Utc};

    fn hit(source: SourceTag, id: &str, day: Option<u32>) -> JobHit {
        JobHit {
            id: id.to_string(),
            headline: format!("{source} {id}"),
            employer: Employer::default(),
            workplace_address: WorkplaceAddress::default(),
            publication_date: day.map(|d| Utc.with_ymd_and_hms(2025, 3, d, 12, 0, 0).unwrap()),
            application_deadline: None,
            remote: false,
            scope_of_work: None,
            description: None,
            webpage_url: None,
            logotype_url: None,
            source,
        }
    }

    fn ok_result(source: SourceTag, hits: Vec<JobHit>, total: u64) -> SourceSearchResult {
        SourceSearchResult {
            source,
            hits,
            total,
            error: None,
            query_url: None,
        }
    }

    #[test]
    fn split_limit_rounds_up() {
        assert_eq!(split_limit(15), 8);
        assert_eq!(split_limit(20), 10);
        assert_eq!(split_limit(1), 1);
    }

    #[test]
    fn colliding_ids_keep_first_sources_copy() {
        let a = ok_result(SourceTag::JobAd, vec![hit(SourceTag::JobAd, "X1", None)], 1);
        let b = ok_result(
            SourceTag::JobSearch,
            vec![hit(SourceTag::JobSearch, "X1", None)],
            1,
        );
        let combined = combine(a, b, 20);
        assert_eq!(combined.hits.len(), 1);
        assert_eq!(combined.hits[0].id, "X1");
        assert_eq!(combined.hits[0].source, SourceTag::JobAd);
    }

    #[test]
    fn total_is_max_not_sum() {
        let a = ok_result(SourceTag::JobAd, Vec::new(), 50);
        let b = ok_result(SourceTag::JobSearch, Vec::new(), 30);
        assert_eq!(combine(a, b, 20).total, 50);
    }

    #[test]
    fn hits_sort_newest_first() {
        let a = ok_result(
            SourceTag::JobAd,
            vec![hit(SourceTag::JobAd, "old", Some(1)), hit(SourceTag::JobAd, "new", Some(20))],
            2,
        );
        let b = ok_result(
            SourceTag::JobSearch,
            vec![hit(SourceTag::JobSearch, "mid", Some(10))],
            1,
        );
        let combined = combine(a, b, 20);
        let order: Vec<&str> = combined.hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(order, vec!["new", "mid", "old"]);
    }

    #[test]
    fn undated_hits_keep_their_relative_order() {
        let a = ok_result(
            SourceTag::JobAd,
            vec![hit(SourceTag::JobAd, "a1", None), hit(SourceTag::JobAd, "a2", None)],
            2,
        );
        let b = ok_result(
            SourceTag::JobSearch,
            vec![hit(SourceTag::JobSearch, "b1", None)],
            1,
        );
        let combined = combine(a, b, 20);
        let order: Vec<&str> = combined.hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(order, vec!["a1", "a2", "b1"]);
    }

    #[test]
    fn merged_hits_truncate_to_requested_limit() {
        let a = ok_result(
            SourceTag::JobAd,
            (0..8).map(|n| hit(SourceTag::JobAd, &format!("a{n}"), None)).collect(),
            8,
        );
        let b = ok_result(
            SourceTag::JobSearch,
            (0..8).map(|n| hit(SourceTag::JobSearch, &format!("b{n}"), None)).collect(),
            8,
        );
        assert_eq!(combine(a, b, 10).hits.len(), 10);
    }

    #[test]
    fn partial_failure_keeps_surviving_hits_and_error() {
        let a = SourceSearchResult::failed(SourceTag::JobAd, "HTTP Error: 502");
        let b = ok_result(
            SourceTag::JobSearch,
            (0..5).map(|n| hit(SourceTag::JobSearch, &format!("b{n}"), None)).collect(),
            5,
        );
        let combined = combine(a, b, 20);
        assert_eq!(combined.hits.len(), 5);
        assert_eq!(combined.sources, vec![SourceTag::JobSearch]);
        assert!(combined.error.as_deref().unwrap().contains("JobAd API: HTTP Error: 502"));
        assert!(combined.is_partial());
    }

    #[test]
    fn both_failures_combine_into_total_failure() {
        let a = SourceSearchResult::failed(SourceTag::JobAd, "first");
        let b = SourceSearchResult::failed(SourceTag::JobSearch, "second");
        let combined = combine(a, b, 20);
        assert!(combined.hits.is_empty());
        assert!(combined.sources.is_empty());
        assert_eq!(
            combined.error.as_deref(),
            Some("JobAd API: first; JobSearch API: second")
        );
        assert!(combined.is_total_failure());
    }
}
