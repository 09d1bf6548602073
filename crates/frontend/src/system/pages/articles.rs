use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct Article {
    title: &'static str,
    excerpt: &'static str,
    read_minutes: u32,
}

const ARTICLES: [Article; 4] = [
    Article {
        title: "كيف تختار الحزمة المناسبة لمشروعك",
        excerpt: "معايير عملية لتقييم الحزم: الصيانة والتوثيق والتوافق مع إصدارات لارافيل.",
        read_minutes: 6,
    },
    Article {
        title: "دعم العربية والاتجاه من اليمين في لارافيل",
        excerpt: "ملفات الترجمة وتنسيق التواريخ والأرقام وواجهات RTL.",
        read_minutes: 8,
    },
    Article {
        title: "تأمين تطبيقك قبل الإطلاق",
        excerpt: "قائمة مراجعة للحماية من الثغرات الشائعة وإدارة الصلاحيات.",
        read_minutes: 10,
    },
    Article {
        title: "الطوابير بدون ألم",
        excerpt: "متى تستخدم الطوابير وكيف تراقبها في بيئة الإنتاج.",
        read_minutes: 7,
    },
];

#[component]
pub fn ArticlesPage() -> impl IntoView {
    view! {
        <div class="page page--articles">
            <PageHeader
                title="مقالات لارافيل"
                subtitle="شروحات ونصائح من مجتمع المطورين العرب".to_string()
            >
                {()}
            </PageHeader>
            <section class="container content-list">
                {ARTICLES.iter().enumerate().map(|(i, article)| view! {
                    <CardAnimated class="content-card content-card--wide" delay_ms={(i as u32) * 40}>
                        <div class="content-card__icon">{icon("file-text")}</div>
                        <h3 class="content-card__title">{article.title}</h3>
                        <p class="content-card__text">{article.excerpt}</p>
                        <div class="content-card__meta">
                            <span>{format!("{} دقائق قراءة", article.read_minutes)}</span>
                        </div>
                    </CardAnimated>
                }).collect_view()}
            </section>
        </div>
    }
}
