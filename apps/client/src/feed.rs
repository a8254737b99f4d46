//! Jobs feed: the listing page's fetch/search state plus the client-side
//! filter and pagination it applies over the in-memory job array.

use std::sync::Arc;

use tracing::warn;

use crate::gateway::Gateway;
use crate::models::job::Job;

/// Jobs shown per listing page.
pub const JOBS_PER_PAGE: usize = 6;

/// Holds the fetched job list and the last fetch error. Failed loads keep
/// the previous list so the page degrades to stale data plus a retry
/// prompt instead of going blank.
pub struct JobsFeed {
    gateway: Arc<dyn Gateway>,
    jobs: Vec<Job>,
    last_error: Option<String>,
}

impl JobsFeed {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            jobs: Vec::new(),
            last_error: None,
        }
    }

    /// Reloads the full job collection.
    pub async fn refresh(&mut self) {
        match self.gateway.list_jobs().await {
            Ok(jobs) => {
                self.jobs = jobs;
                self.last_error = None;
            }
            Err(err) => {
                warn!(error = %err, "job list refresh failed");
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Replaces the list with server-side search results.
    pub async fn search(&mut self, query: &str) {
        match self.gateway.search_jobs(query).await {
            Ok(jobs) => {
                self.jobs = jobs;
                self.last_error = None;
            }
            Err(err) => {
                warn!(query, error = %err, "job search failed");
                self.last_error = Some(err.to_string());
            }
        }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Case-insensitive substring filter over title, company display name,
    /// and description. An empty term matches everything.
    pub fn filtered(&self, term: &str) -> Vec<&Job> {
        let needle = term.to_lowercase();
        self.jobs
            .iter()
            .filter(|job| {
                job.title.to_lowercase().contains(&needle)
                    || job.company_display_name.to_lowercase().contains(&needle)
                    || job.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// One page (1-based) of the filtered list. Out-of-range pages are empty.
    pub fn visible(&self, term: &str, page: usize) -> Vec<&Job> {
        let filtered = self.filtered(term);
        let start = page.saturating_sub(1) * JOBS_PER_PAGE;
        let end = (start + JOBS_PER_PAGE).min(filtered.len());
        if start >= filtered.len() {
            return Vec::new();
        }
        filtered[start..end].to_vec()
    }

    /// Number of pages the filtered list spans.
    pub fn total_pages(&self, term: &str) -> usize {
        self.filtered(term).len().div_ceil(JOBS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::{job_fixture, StubGateway};

    fn feed_with_jobs(count: usize) -> JobsFeed {
        let jobs: Vec<Job> = (0..count)
            .map(|i| job_fixture(&format!("R-{i}"), 1_700_000_000 + i as i64))
            .collect();
        JobsFeed::new(Arc::new(StubGateway {
            jobs,
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn test_refresh_populates_jobs_and_clears_error() {
        let mut feed = feed_with_jobs(3);
        feed.refresh().await;

        assert_eq!(feed.jobs().len(), 3);
        assert!(feed.last_error().is_none());
    }

    #[tokio::test]
    async fn test_failed_refresh_records_error_and_keeps_previous_jobs() {
        let jobs = vec![job_fixture("R-0", 1_700_000_000)];
        let gateway = Arc::new(StubGateway {
            jobs: jobs.clone(),
            ..Default::default()
        });
        let mut feed = JobsFeed::new(gateway);
        feed.refresh().await;
        assert_eq!(feed.jobs().len(), 1);

        let failing = Arc::new(StubGateway {
            jobs_failure: Some((503, "unavailable".to_string())),
            ..Default::default()
        });
        feed.gateway = failing;
        feed.refresh().await;

        assert_eq!(feed.jobs().len(), 1);
        assert!(feed.last_error().unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_search_goes_through_the_gateway() {
        let gateway = Arc::new(StubGateway::default());
        let mut feed = JobsFeed::new(gateway.clone());

        feed.search("rust").await;

        assert_eq!(gateway.calls(), vec!["search_jobs:rust".to_string()]);
    }

    #[tokio::test]
    async fn test_filter_is_case_insensitive_over_title_and_company() {
        let mut feed = feed_with_jobs(3);
        feed.refresh().await;

        // Fixture titles are "Role R-0" .. "Role R-2"; company is "TalentReq".
        assert_eq!(feed.filtered("role r-1").len(), 1);
        assert_eq!(feed.filtered("TALENTREQ").len(), 3);
        assert!(feed.filtered("nowhere").is_empty());
        assert_eq!(feed.filtered("").len(), 3);
    }

    #[tokio::test]
    async fn test_pagination_slices_and_stays_in_bounds() {
        let mut feed = feed_with_jobs(8);
        feed.refresh().await;

        assert_eq!(feed.total_pages(""), 2);
        assert_eq!(feed.visible("", 1).len(), JOBS_PER_PAGE);
        assert_eq!(feed.visible("", 2).len(), 2);
        assert!(feed.visible("", 3).is_empty());
        assert!(feed.visible("", 0).len() == JOBS_PER_PAGE); // page 0 treated as first
    }
}
