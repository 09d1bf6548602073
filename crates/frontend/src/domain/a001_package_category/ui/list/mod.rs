mod view_model;

pub use view_model::PackageCatalogViewModel;

use super::card::CategoryCard;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::skeleton_loader::SkeletonGrid;
use crate::shared::icons::icon;
use contracts::domain::a001_package_category::{package_categories, Category};
use contracts::shared::catalog_view::CatalogDisplay;
use contracts::shared::site_config::SiteConfig;
use leptos::prelude::*;

/// Bundled catalog, or nothing if the bundle is broken.
fn catalog_or_empty() -> &'static [Category] {
    match package_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("package catalog unavailable: {:#}", e);
            &[]
        }
    }
}

/// Line above the grid, e.g. "عدد الفئات: 12".
pub fn result_count_label(count: usize) -> String {
    format!("عدد الفئات: {}", count)
}

/// Searchable, paginated grid of package categories.
#[component]
pub fn PackageCategoryList() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let vm = PackageCatalogViewModel::new(catalog_or_empty(), &config);
    let snapshot = vm.snapshot;

    let current_page = Signal::derive(move || snapshot.with(|s| s.current_page));
    let total_pages = Signal::derive(move || snapshot.with(|s| s.total_pages));
    let is_first_page = Signal::derive(move || snapshot.with(|s| s.is_first_page()));
    let is_last_page = Signal::derive(move || snapshot.with(|s| s.is_last_page()));
    let on_page_change = Callback::new(move |page: usize| vm.set_page(page));
    let on_next = Callback::new(move |_: ()| vm.next_page());
    let on_prev = Callback::new(move |_: ()| vm.prev_page());

    view! {
        <div class="page page--packages">
            <PageHeader
                title="استكشف الحزم"
                subtitle="تصفح حزم لارافيل حسب الفئات المتاحة".to_string()
            >
                <div class="search-box">
                    <span class="search-box__icon">{icon("search")}</span>
                    <input
                        type="text"
                        class="search-box__input"
                        placeholder="ابحث في الفئات..."
                        prop:value=move || snapshot.with(|s| s.query.clone())
                        on:input=move |ev| vm.set_query(event_target_value(&ev))
                    />
                </div>
            </PageHeader>

            <section class="container catalog">
                {move || match snapshot.with(|s| s.display()) {
                    CatalogDisplay::Loading { placeholders } => view! {
                        <SkeletonGrid count=placeholders />
                    }.into_any(),
                    CatalogDisplay::Empty => view! {
                        <div class="catalog-empty">
                            <p>"لم يتم العثور على نتائج"</p>
                        </div>
                    }.into_any(),
                    CatalogDisplay::Items(items) => view! {
                        <p class="catalog-count">
                            {move || result_count_label(snapshot.with(|s| s.total_count))}
                        </p>
                        <div class="catalog-grid">
                            {items.into_iter().enumerate().map(|(i, category)| view! {
                                <CategoryCard category=category delay_ms={(i as u32) * 40} />
                            }).collect_view()}
                        </div>
                        <Show when=move || snapshot.with(|s| s.has_pager())>
                            <PaginationControls
                                current_page=current_page
                                total_pages=total_pages
                                is_first_page=is_first_page
                                is_last_page=is_last_page
                                on_page_change=on_page_change
                                on_next=on_next
                                on_prev=on_prev
                            />
                        </Show>
                    }.into_any(),
                }}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_count_label() {
        assert_eq!(result_count_label(12), "عدد الفئات: 12");
        assert_eq!(result_count_label(1), "عدد الفئات: 1");
    }
}
