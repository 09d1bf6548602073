pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout" dir="rtl" lang="ar">
            <header::Header />
            <main class="app-main">
                {center()}
            </main>
            <footer::Footer />
        </div>
    }
}
