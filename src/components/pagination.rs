use yew::prelude::*;

use crate::viewmodels::PageWindow;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub window: PageWindow,
    pub total: u64,
    pub on_page: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let window = props.window;
    let total_pages = window.total_pages(props.total);

    let on_prev = props.on_page.reform(move |_: MouseEvent| window.page.saturating_sub(1).max(1));
    let on_next = props.on_page.reform(move |_: MouseEvent| window.page.saturating_add(1).min(total_pages));

    html! {
        <div class="pagination">
            <button type="button" class="btn-page" disabled={!window.has_prev()} onclick={on_prev}>
                {"‹ Prev"}
            </button>
            <span class="page-info">{format!("Page {} of {}", window.page, total_pages)}</span>
            <button type="button" class="btn-page" disabled={!window.has_next(props.total)} onclick={on_next}>
                {"Next ›"}
            </button>
        </div>
    }
}
