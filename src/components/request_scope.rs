use dioxus::core::Task;
use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

/// Holds the task of the request a view has in flight. Released (and the
/// task cancelled) when the owning view unmounts, so no completion runs
/// against torn-down state.
#[derive(Clone, Default)]
pub struct RequestScope {
    task: Rc<Cell<Option<Task>>>,
}

impl RequestScope {
    pub fn track(&self, task: Task) {
        self.task.set(Some(task));
    }

    pub fn release(&self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}

pub fn use_request_scope() -> RequestScope {
    let scope = use_hook(RequestScope::default);
    use_drop({
        let scope = scope.clone();
        move || scope.release()
    });
    scope
}
