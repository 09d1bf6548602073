//! Search and pagination state of the packages listing.
//!
//! [`CatalogViewController`] owns the view state (query, current page, page
//! size) together with the loading gate, and derives the filtered collection,
//! page count and visible slice from it. All mutation goes through the
//! transition methods, which keep `1 <= current_page <= max(total_pages, 1)`.

use std::sync::Arc;

use super::loading_gate::{LoadTicket, LoadingGate};
use super::site_config::SiteConfig;

/// Records that can be matched by the listing search box.
pub trait Searchable {
    fn matches_query(&self, query: &str) -> bool;
}

// ============================================================================
// Pure derivation
// ============================================================================

/// Items matching `query`, in their original order.
pub fn filter_items<'a, T: Searchable>(query: &str, items: &'a [T]) -> Vec<&'a T> {
    items.iter().filter(|item| item.matches_query(query)).collect()
}

/// `ceil(count / page_size)`; zero items or a zero page size give 0 pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// One-based page of `items`. Out-of-range pages are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    /// One-based
    pub current_page: usize,
    pub page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            page_size,
        }
    }
}

/// Outcome of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Transition {
    /// Nothing changed; any pending delay keeps running.
    Unchanged,
    /// State changed and the loading delay restarted under this ticket.
    Changed(LoadTicket),
}

impl Transition {
    pub fn ticket(&self) -> Option<LoadTicket> {
        match self {
            Transition::Unchanged => None,
            Transition::Changed(ticket) => Some(*ticket),
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed(_))
    }
}

/// What the listing body should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogDisplay<T> {
    /// Placeholder cards while the artificial delay runs
    Loading { placeholders: usize },
    /// The query matched nothing
    Empty,
    Items(Vec<T>),
}

/// Observable state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshot<T> {
    pub query: String,
    pub current_page: usize,
    pub total_pages: usize,
    /// Size of the filtered result before paging
    pub total_count: usize,
    pub visible_items: Vec<T>,
    pub loading: bool,
    pub page_size: usize,
}

impl<T: Clone> CatalogSnapshot<T> {
    pub fn display(&self) -> CatalogDisplay<T> {
        if self.loading {
            CatalogDisplay::Loading {
                placeholders: self.page_size,
            }
        } else if self.visible_items.is_empty() {
            CatalogDisplay::Empty
        } else {
            CatalogDisplay::Items(self.visible_items.clone())
        }
    }

    /// Pager is only shown when there is more than one page.
    pub fn has_pager(&self) -> bool {
        self.total_pages > 1
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone)]
pub struct CatalogViewController<T> {
    items: Arc<[T]>,
    state: ViewState,
    gate: LoadingGate,
}

impl<T: Searchable + Clone> CatalogViewController<T> {
    /// Controller over `items`, starting on page 1 with an empty query and
    /// the initial loading delay pending.
    pub fn new(items: impl Into<Arc<[T]>>, page_size: usize) -> Self {
        Self {
            items: items.into(),
            state: ViewState::new(page_size),
            gate: LoadingGate::new(),
        }
    }

    pub fn with_config(items: impl Into<Arc<[T]>>, config: &SiteConfig) -> Self {
        Self::new(items, config.clone().normalized().page_size)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.gate.is_loading()
    }

    /// Ticket of the delay the view should currently be waiting on.
    pub fn pending_ticket(&self) -> Option<LoadTicket> {
        self.gate.pending()
    }

    /// Reveal results if `ticket` belongs to the latest change.
    pub fn finish_loading(&mut self, ticket: LoadTicket) -> bool {
        self.gate.finish(ticket)
    }

    /// Replace the query; the page always returns to 1.
    pub fn set_query(&mut self, query: impl Into<String>) -> Transition {
        let query = query.into();
        if query == self.state.query && self.state.current_page == 1 {
            return Transition::Unchanged;
        }
        self.state.query = query;
        self.state.current_page = 1;
        self.changed()
    }

    /// Jump to page `n`; ignored unless `1 <= n <= total_pages`.
    pub fn set_page(&mut self, n: usize) -> Transition {
        if n < 1 || n > self.page_count() || n == self.state.current_page {
            return Transition::Unchanged;
        }
        self.state.current_page = n;
        self.changed()
    }

    pub fn next_page(&mut self) -> Transition {
        let target = (self.state.current_page + 1).min(self.page_count());
        self.set_page(target)
    }

    pub fn prev_page(&mut self) -> Transition {
        let target = self.state.current_page.saturating_sub(1).max(1);
        self.set_page(target)
    }

    pub fn filtered_items(&self) -> Vec<T> {
        filter_items(&self.state.query, &self.items[..])
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn page_count(&self) -> usize {
        let count = filter_items(&self.state.query, &self.items[..]).len();
        total_pages(count, self.state.page_size)
    }

    pub fn visible_items(&self) -> Vec<T> {
        let filtered = self.filtered_items();
        page_slice(&filtered, self.state.current_page, self.state.page_size).to_vec()
    }

    pub fn snapshot(&self) -> CatalogSnapshot<T> {
        let filtered = self.filtered_items();
        let total_count = filtered.len();
        CatalogSnapshot {
            query: self.state.query.clone(),
            current_page: self.state.current_page,
            total_pages: total_pages(total_count, self.state.page_size),
            total_count,
            visible_items: page_slice(&filtered, self.state.current_page, self.state.page_size)
                .to_vec(),
            loading: self.gate.is_loading(),
            page_size: self.state.page_size,
        }
    }

    /// `1 <= current_page <= max(total_pages, 1)`
    pub fn page_is_valid(&self) -> bool {
        let page = self.state.current_page;
        page >= 1 && page <= self.page_count().max(1)
    }

    fn changed(&mut self) -> Transition {
        debug_assert!(self.page_is_valid());
        Transition::Changed(self.gate.restart())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_package_category::Category;
    use crate::enums::icon_tag::IconTag;

    /// Ten categories; names "cat-1".."cat-10", descriptions alternate
    /// between "payments" and "files".
    fn fixture(n: u32) -> Vec<Category> {
        (1..=n)
            .map(|i| {
                let description = if i % 2 == 0 { "payments" } else { "files" };
                Category::new(i, format!("cat-{i}"), description, IconTag::Code, i, "blue")
            })
            .collect()
    }

    fn ids(items: &[Category]) -> Vec<u32> {
        items.iter().map(|c| c.id.value()).collect()
    }

    #[test]
    fn test_total_pages_rounds_up_and_handles_zero() {
        assert_eq!(total_pages(0, 8), 0);
        assert_eq!(total_pages(1, 8), 1);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_page_slice_bounds() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(page_slice(&data, 1, 2), &[1, 2]);
        assert_eq!(page_slice(&data, 3, 2), &[5]);
        assert!(page_slice(&data, 4, 2).is_empty());
        assert!(page_slice(&data, 0, 2).is_empty());
    }

    #[test]
    fn test_filter_keeps_exact_matches_in_order() {
        let items = fixture(10);
        for query in ["", "cat-1", "payments", "files", "cat-", "zzz", "cat-10"] {
            let filtered: Vec<u32> = filter_items(query, &items).iter().map(|c| c.id.value()).collect();
            let expected: Vec<u32> = items
                .iter()
                .filter(|c| c.name.contains(query) || c.description.contains(query))
                .map(|c| c.id.value())
                .collect();
            assert_eq!(filtered, expected, "query {query:?}");

            let mut sorted = filtered.clone();
            sorted.sort();
            assert_eq!(filtered, sorted, "order must follow the source");
        }
    }

    #[test]
    fn test_scenario_a_two_pages_of_ten() {
        let mut ctl = CatalogViewController::new(fixture(10), 8);
        assert_eq!(ctl.page_count(), 2);
        assert_eq!(ids(&ctl.visible_items()), (1..=8).collect::<Vec<_>>());

        assert!(ctl.set_page(2).is_changed());
        assert_eq!(ids(&ctl.visible_items()), vec![9, 10]);
    }

    #[test]
    fn test_scenario_b_no_matches() {
        let mut ctl = CatalogViewController::new(fixture(10), 8);
        let ticket = ctl.set_query("لا شيء").ticket().unwrap();
        assert!(ctl.finish_loading(ticket));

        let snapshot = ctl.snapshot();
        assert_eq!(snapshot.total_pages, 0);
        assert!(snapshot.visible_items.is_empty());
        assert_eq!(snapshot.display(), CatalogDisplay::Empty);
        assert!(!snapshot.has_pager());
        assert!(ctl.page_is_valid());
    }

    #[test]
    fn test_scenario_c_query_shrinks_result_from_page_two() {
        let mut items = fixture(10);
        for c in items.iter_mut().take(3) {
            c.name = format!("{} special", c.name);
        }
        let mut ctl = CatalogViewController::new(items, 8);
        let _ = ctl.set_page(2);
        assert_eq!(ctl.current_page(), 2);

        let _ = ctl.set_query("special");
        assert_eq!(ctl.current_page(), 1);
        assert_eq!(ctl.page_count(), 1);
        assert_eq!(ids(&ctl.visible_items()), vec![1, 2, 3]);
    }

    #[test]
    fn test_scenario_d_only_last_query_is_revealed() {
        let mut ctl = CatalogViewController::new(fixture(10), 8);
        let initial = ctl.pending_ticket().unwrap();

        let t1 = ctl.set_query("cat").ticket().unwrap();
        let t2 = ctl.set_query("pay").ticket().unwrap();
        let t3 = ctl.set_query("payments").ticket().unwrap();

        // late timers from superseded changes
        assert!(!ctl.finish_loading(initial));
        assert!(!ctl.finish_loading(t1));
        assert!(!ctl.finish_loading(t2));
        assert_eq!(
            ctl.snapshot().display(),
            CatalogDisplay::Loading { placeholders: 8 }
        );

        assert!(ctl.finish_loading(t3));
        let snapshot = ctl.snapshot();
        assert_eq!(snapshot.query, "payments");
        assert_eq!(ids(&snapshot.visible_items), vec![2, 4, 6, 8, 10]);
        assert!(matches!(snapshot.display(), CatalogDisplay::Items(ref v) if v.len() == 5));
    }

    #[test]
    fn test_set_query_always_resets_page() {
        let mut ctl = CatalogViewController::new(fixture(20), 8);
        let _ = ctl.set_page(3);
        assert_eq!(ctl.current_page(), 3);

        // still three pages worth of matches, reset anyway
        let _ = ctl.set_query("cat-");
        assert_eq!(ctl.current_page(), 1);

        let _ = ctl.set_page(2);
        // same query text still resets
        assert!(ctl.set_query("cat-").is_changed());
        assert_eq!(ctl.current_page(), 1);
    }

    #[test]
    fn test_same_query_on_first_page_is_unchanged() {
        let mut ctl = CatalogViewController::new(fixture(10), 8);
        assert_eq!(ctl.set_query(""), Transition::Unchanged);
        assert!(ctl.set_query("cat").is_changed());
        assert_eq!(ctl.set_query("cat"), Transition::Unchanged);
    }

    #[test]
    fn test_set_page_out_of_range_is_noop() {
        let mut ctl = CatalogViewController::new(fixture(10), 8);
        let before = ctl.state().clone();
        let pending = ctl.pending_ticket();

        assert_eq!(ctl.set_page(0), Transition::Unchanged);
        assert_eq!(ctl.set_page(3), Transition::Unchanged);
        assert_eq!(ctl.set_page(usize::MAX), Transition::Unchanged);
        assert_eq!(ctl.state(), &before);
        assert_eq!(ctl.pending_ticket(), pending);
    }

    #[test]
    fn test_next_page_on_last_page_is_idempotent() {
        let mut ctl = CatalogViewController::new(fixture(10), 8);
        let _ = ctl.next_page();
        assert_eq!(ctl.current_page(), 2);

        let before = ctl.state().clone();
        assert_eq!(ctl.next_page(), Transition::Unchanged);
        assert_eq!(ctl.state(), &before);
    }

    #[test]
    fn test_prev_page_clamps_at_one() {
        let mut ctl = CatalogViewController::new(fixture(10), 8);
        assert_eq!(ctl.prev_page(), Transition::Unchanged);
        let _ = ctl.set_page(2);
        assert!(ctl.prev_page().is_changed());
        assert_eq!(ctl.current_page(), 1);
    }

    #[test]
    fn test_navigation_on_empty_result_never_leaves_page_one() {
        let mut ctl = CatalogViewController::new(fixture(10), 8);
        let _ = ctl.set_query("nothing matches this");
        assert_eq!(ctl.next_page(), Transition::Unchanged);
        assert_eq!(ctl.prev_page(), Transition::Unchanged);
        assert_eq!(ctl.set_page(1), Transition::Unchanged);
        assert_eq!(ctl.current_page(), 1);
    }

    #[test]
    fn test_page_invariant_holds_across_transition_sequence() {
        let mut ctl = CatalogViewController::new(fixture(30), 8);
        let queries = ["", "cat-1", "payments", "zzz", "cat-2", "files", ""];
        for (step, query) in queries.iter().enumerate() {
            for _ in 0..step {
                let _ = ctl.next_page();
                assert!(ctl.page_is_valid());
            }
            let _ = ctl.set_page(step + 1);
            assert!(ctl.page_is_valid());
            let _ = ctl.prev_page();
            assert!(ctl.page_is_valid());
            let _ = ctl.set_query(*query);
            assert_eq!(ctl.current_page(), 1);
            assert!(ctl.page_is_valid());
        }
    }

    #[test]
    fn test_page_change_restarts_loading() {
        let mut ctl = CatalogViewController::new(fixture(10), 8);
        let initial = ctl.pending_ticket().unwrap();
        assert!(ctl.finish_loading(initial));
        assert!(!ctl.is_loading());

        let ticket = ctl.next_page().ticket().unwrap();
        assert!(ctl.is_loading());
        assert!(ctl.finish_loading(ticket));
        assert!(!ctl.snapshot().is_first_page());
        assert!(ctl.snapshot().is_last_page());
    }

    #[test]
    fn test_snapshot_reports_count_and_pager_edges() {
        let mut ctl = CatalogViewController::new(fixture(10), 4);
        let snapshot = ctl.snapshot();
        assert_eq!(snapshot.total_count, 10);
        assert_eq!(snapshot.total_pages, 3);
        assert!(snapshot.is_first_page());
        assert!(!snapshot.is_last_page());

        let _ = ctl.set_page(2);
        let snapshot = ctl.snapshot();
        assert!(!snapshot.is_first_page());
        assert!(!snapshot.is_last_page());

        let _ = ctl.set_query("payments");
        let snapshot = ctl.snapshot();
        assert_eq!(snapshot.total_count, 5);
        assert_eq!(snapshot.total_pages, 2);
        assert!(snapshot.is_first_page());

        // no matches: both pager directions are closed
        let _ = ctl.set_query("zzz");
        let snapshot = ctl.snapshot();
        assert_eq!(snapshot.total_count, 0);
        assert!(snapshot.is_first_page());
        assert!(snapshot.is_last_page());
    }

    #[test]
    fn test_page_count_agrees_with_filter() {
        let mut ctl = CatalogViewController::new(fixture(30), 8);
        for query in ["", "cat-1", "payments", "zzz", "files"] {
            let _ = ctl.set_query(query);
            let expected = total_pages(filter_items(query, &fixture(30)).len(), 8);
            assert_eq!(ctl.page_count(), expected, "query {query:?}");
            assert_eq!(ctl.snapshot().total_pages, expected);
        }
    }

    #[test]
    fn test_with_config_uses_page_size() {
        let config = SiteConfig {
            page_size: 4,
            ..SiteConfig::default()
        };
        let ctl = CatalogViewController::with_config(fixture(10), &config);
        assert_eq!(ctl.page_size(), 4);
        assert_eq!(ctl.page_count(), 3);
    }
}
