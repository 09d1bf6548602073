use crate::domain::a001_package_category::ui::PackageCategoryList;
use crate::shared::components::newsletter::Newsletter;
use leptos::prelude::*;

#[component]
pub fn PackagesPage() -> impl IntoView {
    view! {
        <PackageCategoryList />
        <div class="container">
            <Newsletter />
        </div>
    }
}
