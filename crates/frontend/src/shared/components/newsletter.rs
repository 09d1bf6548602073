use crate::shared::icons::icon;
use contracts::shared::newsletter::{validate_email, NewsletterError};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
enum SignupStatus {
    Idle,
    Invalid(NewsletterError),
    Subscribed(String),
}

/// Newsletter signup block.
///
/// Stub only: a valid address is acknowledged locally and nothing is sent.
#[component]
pub fn Newsletter() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let status = RwSignal::new(SignupStatus::Idle);

    let submit = move || match validate_email(&email.get_untracked()) {
        Ok(address) => {
            log::info!("newsletter signup accepted for {}", address);
            email.set(String::new());
            status.set(SignupStatus::Subscribed(address));
        }
        Err(e) => {
            log::debug!("newsletter signup rejected: {}", e);
            status.set(SignupStatus::Invalid(e));
        }
    };

    view! {
        <section class="newsletter">
            <div class="newsletter__icon">{icon("mail")}</div>
            <h2 class="newsletter__title">"اشترك في النشرة البريدية"</h2>
            <p class="newsletter__text">"احصل على أحدث الحزم والدورات والمقالات مباشرة في بريدك"</p>
            <div class="newsletter__form">
                <Input value=email placeholder="بريدك الإلكتروني" />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| submit()>
                    "اشترك"
                </Button>
            </div>
            {move || match status.get() {
                SignupStatus::Idle => view! { <></> }.into_any(),
                SignupStatus::Invalid(e) => view! {
                    <p class="newsletter__message newsletter__message--error">{e.message()}</p>
                }.into_any(),
                SignupStatus::Subscribed(address) => view! {
                    <p class="newsletter__message newsletter__message--success">
                        {format!("شكراً لاشتراكك! سنراسلك على {}", address)}
                    </p>
                }.into_any(),
            }}
        </section>
    }
}
