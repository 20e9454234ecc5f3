use dioxus::prelude::*;

use crate::vm::ResultsVm;

#[component]
pub fn ResultsPanel(vm: ResultsVm, on_restart: EventHandler<()>) -> Element {
    let items = vm.items.iter().enumerate().map(|(i, item)| {
        rsx! {
            div { key: "{i}", class: "review",
                div { class: "question-header",
                    h3 { "{item.prompt}" }
                    span { class: "chip", "{item.category}" }
                }
                p { class: item.answer_class(), "{item.answer_label}" }
                if let Some(correct) = &item.correct_label {
                    p { class: "answer correct", "{correct}" }
                }
                if let Some(explanation) = &item.explanation {
                    p { class: "explanation", "{explanation}" }
                }
            }
        }
    });

    rsx! {
        div { class: "panel",
            h1 { class: "center", "Quiz Complete!" }
            h2 { class: "center", "{vm.score_label}" }
            p { class: "center", "{vm.tally_label}" }
            div { class: "review-list", {items} }
            div { class: "actions",
                button { class: "btn", onclick: move |_| on_restart.call(()), "Try Again" }
            }
        }
    }
}
