use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use planner_core::model::{CourseId, Level};

use crate::views::{ViewError, option_class};
use crate::vm::{AssessmentIntent, AssessmentOutcome, AssessmentVm};

#[cfg(test)]
use std::cell::RefCell;

/// The one running countdown task for the displayed question.
#[derive(Clone, Default)]
struct CountdownHandle {
    task: Rc<Cell<Option<Task>>>,
}

impl CountdownHandle {
    fn replace(&self, next: Option<Task>) {
        if let Some(previous) = self.task.replace(next) {
            previous.cancel();
        }
    }

    fn cancel(&self) {
        self.replace(None);
    }
}

#[component]
pub fn AssessmentView(course_id: CourseId, level: Level) -> Element {
    let navigator = use_navigator();
    let vm = use_signal(move || AssessmentVm::new(course_id, level).ok());
    let countdown = use_hook(CountdownHandle::default);

    let question_index = use_memo(move || {
        vm.read()
            .as_ref()
            .map(|vm| vm.assessment().current_index())
    });

    // Restart the clock whenever the question changes; ticks do not re-run this.
    use_effect({
        let countdown = countdown.clone();
        move || {
            if question_index().is_none() {
                countdown.cancel();
                return;
            }
            let mut vm = vm;
            let task = spawn(async move {
                loop {
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    let running = vm.write().as_mut().is_some_and(|vm| {
                        vm.apply(AssessmentIntent::Tick);
                        vm.assessment().remaining_secs() > 0
                    });
                    if !running {
                        break;
                    }
                }
            });
            countdown.replace(Some(task));
        }
    });

    use_drop({
        let countdown = countdown.clone();
        move || countdown.cancel()
    });

    let dispatch = use_callback(move |intent: AssessmentIntent| {
        let mut vm = vm;
        let outcome = match vm.write().as_mut() {
            Some(vm) => vm.apply(intent),
            None => AssessmentOutcome::Stay,
        };
        if let AssessmentOutcome::Finished(route) = outcome {
            countdown.cancel();
            tracing::debug!(to = %route, "assessment complete");
            navigator.push(route);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<AssessmentTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let Some(current) = vm.read().clone() else {
        return rsx! {
            div { class: "page assessment",
                p { class: "form-error", "{ViewError::Unknown.message()}" }
            }
        };
    };
    let assessment = current.assessment();
    let question = assessment.current_question();
    let selected = assessment.selected();
    let progress = assessment.progress_percent();

    rsx! {
        div { class: "page assessment",
            div { class: "progress-header",
                span { "{current.question_label()}" }
                span { class: "timer", "{current.timer_label()}" }
            }
            div { class: "bar",
                div { class: "fill", style: "width: {progress}%" }
            }

            div { class: "card question-card",
                h2 { "{question.prompt}" }
                div { class: "options",
                    for (index, option) in question.options.iter().enumerate() {
                        button {
                            key: "{index}",
                            class: option_class(selected, index),
                            onclick: move |_| dispatch.call(AssessmentIntent::Select(index)),
                            "{option}"
                        }
                    }
                }
                button {
                    class: "primary",
                    disabled: !assessment.can_advance(),
                    onclick: move |_| dispatch.call(AssessmentIntent::Next),
                    "{current.next_label()}"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct AssessmentTestHandles {
    dispatch: Rc<RefCell<Option<Callback<AssessmentIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<AssessmentVm>>>>>,
}

#[cfg(test)]
impl AssessmentTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<AssessmentIntent>,
        vm: Signal<Option<AssessmentVm>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<AssessmentIntent> {
        (*self.dispatch.borrow()).expect("assessment dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<AssessmentVm>> {
        (*self.vm.borrow()).expect("assessment vm registered")
    }
}
