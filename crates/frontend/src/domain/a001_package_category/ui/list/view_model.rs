use crate::shared::loading_timer::RestartableTimeout;
use contracts::domain::a001_package_category::Category;
use contracts::shared::catalog_view::{CatalogSnapshot, CatalogViewController, Transition};
use contracts::shared::loading_gate::LoadTicket;
use contracts::shared::site_config::SiteConfig;
use leptos::prelude::*;

/// ViewModel of the packages listing.
///
/// Wraps the catalog controller in a signal and owns the artificial
/// loading delay: every state change drops the pending timer and starts a
/// new one for the fresh ticket.
#[derive(Clone, Copy)]
pub struct PackageCatalogViewModel {
    controller: RwSignal<CatalogViewController<Category>>,
    pub snapshot: Memo<CatalogSnapshot<Category>>,
    timer: RestartableTimeout,
    loading_delay_ms: u32,
}

impl PackageCatalogViewModel {
    pub fn new(categories: &'static [Category], config: &SiteConfig) -> Self {
        let controller = RwSignal::new(CatalogViewController::with_config(categories, config));
        let snapshot = Memo::new(move |_| controller.with(|c| c.snapshot()));

        let vm = Self {
            controller,
            snapshot,
            timer: RestartableTimeout::new(),
            loading_delay_ms: config.loading_delay_ms,
        };

        // initial reveal
        if let Some(ticket) = controller.with_untracked(|c| c.pending_ticket()) {
            vm.schedule_reveal(ticket);
        }
        vm
    }

    pub fn set_query(&self, query: String) {
        log::debug!("catalog query: {:?}", query);
        let transition = self.controller.try_update(|c| c.set_query(query));
        self.apply(transition);
    }

    pub fn set_page(&self, page: usize) {
        let transition = self.controller.try_update(|c| c.set_page(page));
        self.apply(transition);
    }

    pub fn next_page(&self) {
        let transition = self.controller.try_update(|c| c.next_page());
        self.apply(transition);
    }

    pub fn prev_page(&self) {
        let transition = self.controller.try_update(|c| c.prev_page());
        self.apply(transition);
    }

    fn apply(&self, transition: Option<Transition>) {
        if let Some(ticket) = transition.and_then(|t| t.ticket()) {
            self.schedule_reveal(ticket);
        }
    }

    fn schedule_reveal(&self, ticket: LoadTicket) {
        let controller = self.controller;
        self.timer.schedule(self.loading_delay_ms, move || {
            controller.maybe_update(|c| c.finish_loading(ticket));
        });
    }
}
