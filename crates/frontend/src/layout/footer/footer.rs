use crate::layout::global_context::use_app_context;
use crate::layout::header::header::Brand;
use chrono::Datelike;
use contracts::system::navigation::PageId;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let year = chrono::Utc::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="container footer__grid">
                <div class="footer__about">
                    <Brand />
                    <p>"منصة عربية لاكتشاف حزم لارافيل وتعلم تطوير الويب بلغتك."</p>
                </div>
                <div class="footer__links">
                    <h4>"روابط سريعة"</h4>
                    {PageId::menu().into_iter().map(|page| view! {
                        <button class="footer__link" on:click=move |_| ctx.navigate(page)>
                            {page.label()}
                        </button>
                    }).collect_view()}
                </div>
            </div>
            <div class="footer__bottom">
                {format!("© {} عربفيل. جميع الحقوق محفوظة.", year)}
            </div>
        </footer>
    }
}
