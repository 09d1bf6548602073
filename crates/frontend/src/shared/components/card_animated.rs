//! CardAnimated: Thaw `Card` с анимацией появления.
//!
//! Анимация определена в `static/arabfil.css` (`@keyframes card-appear`).
//!
//! # Пример
//! ```text
//! <CardAnimated delay_ms=0>   // карточка 1
//! <CardAnimated delay_ms=40>  // карточка 2
//! <CardAnimated class="category-card" delay_ms=80>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Thaw [`Card`] с плавным появлением, со сдвигом на `delay_ms`.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительный CSS-класс карточки.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
