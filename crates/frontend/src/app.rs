use crate::config::load_site_config;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::pages::{ArticlesPage, CoursesPage, HomePage, PackagesPage};
use contracts::system::navigation::PageId;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    provide_context(load_site_config());

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell center=move || {
            view! {
                {move || match ctx.current_page.get() {
                    PageId::Home => view! { <HomePage /> }.into_any(),
                    PageId::Packages => view! { <PackagesPage /> }.into_any(),
                    PageId::Courses => view! { <CoursesPage /> }.into_any(),
                    PageId::Articles => view! { <ArticlesPage /> }.into_any(),
                }}
            }.into_any()
        } />
    }
}
