use leptos::prelude::*;

/// Grey placeholder shaped like a category card, shown while results load.
#[component]
pub fn SkeletonLoader() -> impl IntoView {
    view! {
        <div class="skeleton-card" aria-hidden="true">
            <div class="skeleton-card__icon skeleton-pulse"></div>
            <div class="skeleton-card__line skeleton-card__line--title skeleton-pulse"></div>
            <div class="skeleton-card__line skeleton-pulse"></div>
            <div class="skeleton-card__line skeleton-card__line--short skeleton-pulse"></div>
        </div>
    }
}

/// `count` skeleton cards laid out like the catalog grid.
#[component]
pub fn SkeletonGrid(count: usize) -> impl IntoView {
    view! {
        <div class="catalog-grid" aria-busy="true">
            {(0..count).map(|_| view! { <SkeletonLoader /> }).collect_view()}
        </div>
    }
}
