use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct Course {
    title: &'static str,
    summary: &'static str,
    lessons: u32,
    level: &'static str,
}

const COURSES: [Course; 6] = [
    Course {
        title: "أساسيات لارافيل",
        summary: "التثبيت والتوجيه والمتحكمات وقوالب Blade",
        lessons: 24,
        level: "مبتدئ",
    },
    Course {
        title: "Eloquent بعمق",
        summary: "العلاقات والاستعلامات المتقدمة وتحسين الأداء",
        lessons: 18,
        level: "متوسط",
    },
    Course {
        title: "بناء واجهات API",
        summary: "واجهات REST مع Sanctum والتوثيق والاختبار",
        lessons: 20,
        level: "متوسط",
    },
    Course {
        title: "Livewire من الصفر",
        summary: "واجهات تفاعلية دون مغادرة PHP",
        lessons: 15,
        level: "متوسط",
    },
    Course {
        title: "الاختبارات في لارافيل",
        summary: "PHPUnit وPest واختبار الميزات",
        lessons: 12,
        level: "متقدم",
    },
    Course {
        title: "النشر والإنتاج",
        summary: "الطوابير والتخزين المؤقت والنشر على الخوادم",
        lessons: 10,
        level: "متقدم",
    },
];

#[component]
pub fn CoursesPage() -> impl IntoView {
    view! {
        <div class="page page--courses">
            <PageHeader
                title="الدورات العربية"
                subtitle="تعلم لارافيل بلغتك من الأساسيات حتى الاحتراف".to_string()
            >
                {()}
            </PageHeader>
            <section class="container content-grid">
                {COURSES.iter().enumerate().map(|(i, course)| view! {
                    <CardAnimated class="content-card" delay_ms={(i as u32) * 40}>
                        <div class="content-card__icon">{icon("book-open")}</div>
                        <h3 class="content-card__title">{course.title}</h3>
                        <p class="content-card__text">{course.summary}</p>
                        <div class="content-card__meta">
                            <span>{format!("{} درساً", course.lessons)}</span>
                            <span class="content-card__badge">{course.level}</span>
                        </div>
                    </CardAnimated>
                }).collect_view()}
            </section>
        </div>
    }
}
