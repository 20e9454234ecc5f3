use dioxus::prelude::*;

use crate::vm::QuestionVm;

#[component]
pub fn QuestionCard(vm: QuestionVm, on_answer: EventHandler<usize>) -> Element {
    let locked = vm.locked;
    let options = vm.options.iter().map(|option| {
        let index = option.index;
        rsx! {
            button {
                key: "{index}",
                class: option.state.class(),
                disabled: locked,
                onclick: move |_| on_answer.call(index),
                "{option.text}"
            }
        }
    });

    rsx! {
        div { class: "panel",
            p { class: "progress", "{vm.progress_label}" }
            div { class: "question-header",
                h2 { "{vm.prompt}" }
                span { class: "chip", "{vm.category}" }
            }
            div { class: "options", {options} }
            if let Some(feedback) = &vm.feedback {
                p { class: feedback.class(), "{feedback.message}" }
            }
        }
    }
}
