use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::{category_icon, icon};
use contracts::domain::a001_package_category::Category;
use leptos::prelude::*;

#[component]
pub fn CategoryCard(
    category: Category,
    /// Stagger offset of the appear animation
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let accent = format!("accent--{}", category.color);

    view! {
        <CardAnimated class="category-card" delay_ms=delay_ms>
            <div class="category-card__icon-wrap">
                <div class=format!("category-card__icon {}", accent)>
                    {category_icon(category.icon)}
                </div>
            </div>
            <h3 class="category-card__title">{category.name}</h3>
            <p class="category-card__description">{category.description}</p>
            <div class="category-card__footer">
                <span class="category-card__count">
                    {format!("{} حزمة", category.packages_count)}
                </span>
                <span class="category-card__arrow">{icon("arrow-left")}</span>
            </div>
        </CardAnimated>
    }
}
