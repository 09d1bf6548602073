use leptos::prelude::*;

/// Hero band on top of every page: title, optional subtitle, then children
/// (search box, call-to-action buttons).
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    children: Children,
) -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container page-header__content">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <p class="page-header__subtitle">{s}</p>
                })}
                <div class="page-header__actions">
                    {children()}
                </div>
            </div>
        </section>
    }
}
