//! Repository filtering and sorting utilities
//!
//! All helpers take a slice and return a new `Vec`; the input is never
//! reordered or modified.

use crate::constants::github::DAYS_PER_MONTH;
use crate::github::{RepositoryDescriptor, SortOrder};
use chrono::{DateTime, Duration, Utc};

/// Keep repositories whose visibility equals `visibility`, ignoring case
pub fn filter_by_visibility(
    repositories: &[RepositoryDescriptor],
    visibility: &str,
) -> Vec<RepositoryDescriptor> {
    repositories
        .iter()
        .filter(|repo| repo.visibility.eq_ignore_ascii_case(visibility))
        .cloned()
        .collect()
}

/// Instant `months` thirty-day months before `now`
pub fn months_ago(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now - Duration::days(i64::from(months) * DAYS_PER_MONTH)
}

/// Repositories updated at or after `now - months*30 days`
pub fn updated_within(
    repositories: &[RepositoryDescriptor],
    months: u32,
    now: DateTime<Utc>,
) -> Vec<RepositoryDescriptor> {
    let cutoff = months_ago(now, months);
    repositories
        .iter()
        .filter(|repo| repo.updated_at.is_some_and(|updated| updated >= cutoff))
        .cloned()
        .collect()
}

/// Repositories with an update time strictly before `now - months*30 days`
pub fn updated_before(
    repositories: &[RepositoryDescriptor],
    months: u32,
    now: DateTime<Utc>,
) -> Vec<RepositoryDescriptor> {
    let cutoff = months_ago(now, months);
    repositories
        .iter()
        .filter(|repo| repo.updated_at.is_some_and(|updated| updated < cutoff))
        .cloned()
        .collect()
}

/// Stable sort by update time; entries without one count as the oldest
pub fn sort_by_updated(
    repositories: &[RepositoryDescriptor],
    order: SortOrder,
) -> Vec<RepositoryDescriptor> {
    let mut sorted = repositories.to_vec();
    match order {
        SortOrder::Asc => sorted.sort_by(|a, b| a.updated_at.cmp(&b.updated_at)),
        SortOrder::Desc => sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
    sorted
}

/// Time window applied by [`RepoQuery`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateWindow {
    Within(u32),
    Before(u32),
}

/// Filters and ordering for a repository listing
#[derive(Debug, Clone, Default)]
pub struct RepoQuery {
    pub visibility: Option<String>,
    pub window: Option<UpdateWindow>,
    pub sort: Option<SortOrder>,
}

impl RepoQuery {
    /// Apply visibility, then the time window, then ordering
    pub fn apply(
        &self,
        repositories: &[RepositoryDescriptor],
        now: DateTime<Utc>,
    ) -> Vec<RepositoryDescriptor> {
        let mut result = match self.visibility.as_deref() {
            Some(visibility) => filter_by_visibility(repositories, visibility),
            None => repositories.to_vec(),
        };

        result = match self.window {
            Some(UpdateWindow::Within(months)) => updated_within(&result, months, now),
            Some(UpdateWindow::Before(months)) => updated_before(&result, months, now),
            None => result,
        };

        match self.sort {
            Some(order) => sort_by_updated(&result, order),
            None => result,
        }
    }
}
