use dioxus::prelude::*;
use quiz_core::model::{Category, SessionPhase};

use crate::context::AppContext;
use crate::views::{CategoryList, QuestionCard, ResultsPanel};
use crate::vm::{QuizIntent, map_categories, map_question, map_results};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Whole quiz flow on one page; the controller's phase picks the panel.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let (mut controller, mut advances) = use_hook(|| {
        let (controller, advances) = ctx.new_controller();
        (Signal::new(controller), Signal::new(Some(advances)))
    });
    let mut error = use_signal(|| None::<String>);

    // Elapsed feedback windows come back here; the controller drops stale ones.
    use_future(move || async move {
        let Some(mut receiver) = advances.write().take() else {
            return;
        };
        while let Some(ticket) = receiver.recv().await {
            controller.write().advance(ticket);
        }
    });

    let dispatch = use_callback(move |intent: QuizIntent| match intent {
        QuizIntent::SelectCategory(category) => {
            match controller.write().select_category(&category) {
                Ok(()) => error.set(None),
                Err(err) => error.set(Some(format!("{err}. Please pick another quiz."))),
            }
        }
        QuizIntent::Answer(index) => {
            if let Err(err) = controller.write().select_answer(index) {
                tracing::error!(error = %err, index, "answer rejected by controller");
            }
        }
        QuizIntent::Restart => {
            controller.write().restart();
            error.set(None);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, controller);
            }
        }
    }

    let state = controller.read();
    match state.phase() {
        SessionPhase::SelectingCategory => {
            let categories = map_categories(&state.categories());
            rsx! {
                CategoryList {
                    categories: categories,
                    error: error(),
                    on_select: move |category: Category| dispatch.call(QuizIntent::SelectCategory(category)),
                }
            }
        }
        SessionPhase::Answering => match map_question(&state) {
            Some(vm) => rsx! {
                QuestionCard {
                    vm: vm,
                    on_answer: move |index: usize| dispatch.call(QuizIntent::Answer(index)),
                }
            },
            None => rsx! {},
        },
        SessionPhase::ShowingResults => {
            let vm = map_results(&state.compute_results());
            rsx! {
                ResultsPanel {
                    vm: vm,
                    on_restart: move |()| dispatch.call(QuizIntent::Restart),
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    controller: Rc<RefCell<Option<Signal<services::QuizController>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        controller: Signal<services::QuizController>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.controller.borrow_mut() = Some(controller);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn controller(&self) -> Signal<services::QuizController> {
        (*self.controller.borrow()).expect("quiz controller registered")
    }
}
