//! Pagination: bound a fetch query, pair it with an independent count.
//!
//! The count side of a paginated lookup is derived from the same criteria
//! as the fetch side and selects only a row count, never full or
//! projected columns. Ordering from the page request applies to the fetch
//! side only. When the first page comes back short, the count query is
//! skipped: a short first page already proves the full result size.

use crate::observability::{log_event, Event};
use crate::page::{Page, PageLimits, PageRequest};
use crate::predicate::Predicate;
use crate::query::{CountQuery, ExecutableQuery, QueryResult};

/// Builds the fetch and count sides of one paginated lookup from a
/// shared predicate
pub trait PageQuerySource<P> {
    /// Composes the row-fetching query
    fn build_fetch_query(&self, predicate: &Predicate) -> QueryResult<ExecutableQuery<'_, P>>;

    /// Composes the count-only query over the same predicate
    fn build_count_query(&self, predicate: &Predicate) -> QueryResult<CountQuery<'_>>;
}

/// Produces pages with an accurate total count
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    limits: PageLimits,
}

impl Paginator {
    pub fn new(limits: PageLimits) -> Self {
        Self { limits }
    }

    /// The page-size limits this paginator enforces
    pub fn limits(&self) -> PageLimits {
        self.limits
    }

    /// Pages a composed fetch query using an independent count query.
    ///
    /// The request is validated first; nothing executes for an invalid
    /// one. The count query is executed only when the fetched slice does
    /// not already prove the total.
    pub fn paginate<P>(
        &self,
        fetch: ExecutableQuery<'_, P>,
        count: CountQuery<'_>,
        request: &PageRequest,
    ) -> QueryResult<Page<P>> {
        self.limits.validate(request)?;

        let contents = fetch.bounded(request).execute()?;
        let fetched = contents.len() as u64;

        let total = if request.offset() == 0 && fetched < request.size() {
            // A short first page is the whole result set.
            log_event(Event::CountSkipped, &[("total", &fetched.to_string())]);
            fetched
        } else {
            let total = count.execute()?;
            log_event(Event::CountExecuted, &[("total", &total.to_string())]);
            total
        };

        log_event(
            Event::PageFetched,
            &[
                ("offset", &request.offset().to_string()),
                ("rows", &fetched.to_string()),
                ("total", &total.to_string()),
            ],
        );
        Ok(Page::new(contents, request, total))
    }

    /// Composes both sides of the lookup from a predicate, then pages
    /// them
    pub fn paginate_from<P, S>(
        &self,
        source: &S,
        predicate: &Predicate,
        request: &PageRequest,
    ) -> QueryResult<Page<P>>
    where
        S: PageQuerySource<P> + ?Sized,
    {
        let fetch = source.build_fetch_query(predicate)?;
        let count = source.build_count_query(predicate)?;
        self.paginate(fetch, count, request)
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PageLimits::default())
    }
}
