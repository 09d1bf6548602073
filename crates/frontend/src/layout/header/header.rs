use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::system::navigation::PageId;
use leptos::prelude::*;

/// Site brand: "عرب" + accented "فيل"
#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <span class="brand">
            <span class="brand__mark">{icon("logo")}</span>
            <span class="brand__name">"عرب"<span class="brand__accent">"فيل"</span></span>
        </span>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    let menu_item = move |page: PageId, mobile: bool| {
        let base = if mobile { "header__link header__link--mobile" } else { "header__link" };
        view! {
            <button
                class=base
                class:header__link--active=move || ctx.current_page.get() == page
                on:click=move |_| ctx.navigate(page)
            >
                {page.label()}
            </button>
        }
    };

    view! {
        <header data-zone="header" class="header">
            <div class="container header__bar">
                <div class="header__brand" on:click=move |_| ctx.navigate(PageId::Home)>
                    <Brand />
                </div>

                <nav class="header__nav">
                    {PageId::menu().into_iter().map(|page| menu_item(page, false)).collect_view()}
                </nav>

                <button
                    class="header__menu-toggle"
                    aria-label="القائمة"
                    on:click=move |_| ctx.toggle_mobile_menu()
                >
                    {move || if ctx.mobile_menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            <Show when=move || ctx.mobile_menu_open.get()>
                <nav class="container header__nav-mobile">
                    {PageId::menu().into_iter().map(|page| menu_item(page, true)).collect_view()}
                </nav>
            </Show>
        </header>
    }
}
