use crate::domain::a001_package_category::ui::CategoryCard;
use crate::layout::global_context::use_app_context;
use crate::shared::components::newsletter::Newsletter;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::domain::a001_package_category::package_categories;
use contracts::system::navigation::PageId;
use leptos::prelude::*;
use thaw::*;

const FEATURED_COUNT: usize = 4;

const FEATURES: [(&str, &str, &str); 3] = [
    ("code", "حزم مختارة", "فئات منظمة لأشهر حزم لارافيل مع وصف عربي واضح"),
    ("book-open", "دورات عربية", "تعلم لارافيل خطوة بخطوة مع دروس باللغة العربية"),
    ("file-text", "مقالات تقنية", "شروحات ونصائح عملية من مطورين عرب"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    // the catalog list logs a broken bundle; here the section just stays empty
    let featured: Vec<_> = package_categories()
        .map(|all| all.iter().take(FEATURED_COUNT).cloned().collect())
        .unwrap_or_default();

    view! {
        <div class="page page--home">
            <PageHeader
                title="مرحباً بك في عربفيل"
                subtitle="دليلك العربي لحزم لارافيل والدورات والمقالات".to_string()
            >
                <Space>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(PageId::Packages)>
                        "استكشف الحزم"
                    </Button>
                    <Button on_click=move |_| ctx.navigate(PageId::Courses)>
                        "ابدأ التعلم"
                    </Button>
                </Space>
            </PageHeader>

            <section class="container features">
                {FEATURES.iter().map(|(icon_name, title, text)| view! {
                    <div class="feature">
                        <div class="feature__icon">{icon(icon_name)}</div>
                        <h3 class="feature__title">{*title}</h3>
                        <p class="feature__text">{*text}</p>
                    </div>
                }).collect_view()}
            </section>

            <section class="container featured">
                <div class="section-heading">
                    <h2>"فئات مميزة"</h2>
                    <button class="section-heading__more" on:click=move |_| ctx.navigate(PageId::Packages)>
                        "عرض الكل"
                        {icon("arrow-left")}
                    </button>
                </div>
                <div class="catalog-grid">
                    {featured.into_iter().enumerate().map(|(i, category)| view! {
                        <CategoryCard category=category delay_ms={(i as u32) * 40} />
                    }).collect_view()}
                </div>
            </section>

            <div class="container">
                <Newsletter />
            </div>
        </div>
    }
}
