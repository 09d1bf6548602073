use leptos::prelude::*;

/// Номера страниц для кнопок (с единицы).
pub fn page_numbers(total_pages: usize) -> Vec<usize> {
    (1..=total_pages).collect()
}

/// Пагинация сетки каталога.
///
/// Страницы нумеруются с единицы. Кнопки только сообщают о намерении,
/// допустимость страницы и границы решает контроллер вызывающей стороны.
/// Порядок разметки под RTL: "далее" находится слева.
#[component]
pub fn PaginationControls(
    /// Текущая страница (с 1)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Блокирует "назад"
    #[prop(into)]
    is_first_page: Signal<bool>,

    /// Блокирует "далее"
    #[prop(into)]
    is_last_page: Signal<bool>,

    /// Клик по номеру страницы
    on_page_change: Callback<usize>,

    on_next: Callback<()>,

    on_prev: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="pagination-controls" aria-label="التنقل بين الصفحات">
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || is_last_page.get()
            >
                "التالي"
            </button>

            {move || page_numbers(total_pages.get()).into_iter().map(|page| {
                view! {
                    <button
                        class="pagination-btn pagination-btn--number"
                        class:pagination-btn--active=move || current_page.get() == page
                        on:click=move |_| on_page_change.run(page)
                    >
                        {page.to_string()}
                    </button>
                }
            }).collect_view()}

            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || is_first_page.get()
            >
                "السابق"
            </button>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_numbers() {
        assert_eq!(page_numbers(0), Vec::<usize>::new());
        assert_eq!(page_numbers(1), vec![1]);
        assert_eq!(page_numbers(3), vec![1, 2, 3]);
    }
}
