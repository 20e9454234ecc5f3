use dioxus::prelude::*;
use quiz_core::model::Category;

use crate::vm::CategoryVm;

#[component]
pub fn CategoryList(
    categories: Vec<CategoryVm>,
    #[props(!optional)] error: Option<String>,
    on_select: EventHandler<Category>,
) -> Element {
    let buttons = categories.into_iter().enumerate().map(|(i, vm)| {
        // Alternate button colors.
        let class = if i % 2 == 0 { "btn" } else { "btn secondary" };
        let CategoryVm { category, label } = vm;
        rsx! {
            button {
                key: "{label}",
                class: "{class}",
                onclick: move |_| on_select.call(category.clone()),
                "{label}"
            }
        }
    });

    rsx! {
        div { class: "panel",
            h1 { class: "center", "Choose Your History Quiz" }
            if let Some(message) = error {
                p { class: "error", "{message}" }
            }
            div { class: "category-list", {buttons} }
        }
    }
}
