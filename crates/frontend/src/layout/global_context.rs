use contracts::system::navigation::PageId;
use leptos::logging::log;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// `?page=<id>` in the address bar
#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

/// Page named by a location search string (`?page=courses`).
pub fn page_from_search(search: &str) -> Option<PageId> {
    let query: PageQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    query.page.map(|id| PageId::from_id(&id))
}

/// Search string that selects `page`.
pub fn search_for_page(page: PageId) -> String {
    let query_string = serde_qs::to_string(&PageQuery {
        page: Some(page.id().to_string()),
    })
    .unwrap_or_default();
    format!("?{}", query_string)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_page: RwSignal<PageId>,
    pub mobile_menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_page: RwSignal::new(PageId::Home),
            mobile_menu_open: RwSignal::new(false),
        }
    }

    /// Restore the page from the URL, then keep the URL in sync with it.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_search(&search) {
            self.current_page.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = search_for_page(this.current_page.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Navigation callback handed to every page, header and footer.
    pub fn navigate(&self, page: PageId) {
        log!("navigate: '{}'", page.id());
        self.mobile_menu_open.set(false);
        self.current_page.set(page);
        scroll_to_top();
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

fn scroll_to_top() {
    if let Some(w) = window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&options);
    }
}
