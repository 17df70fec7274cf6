//! Task board page: search, create/edit form and the two sticky-note columns.
//!
//! ERROR HANDLING
//! ==============
//! Failed remote calls are logged and shown in a banner. A failed completion
//! toggle reloads the list so the board matches the server again. Session
//! rejections are handled by the auth interceptor before results reach here.

use leptos::prelude::*;

use crate::app::AppServices;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::navbar::Navbar;
use crate::components::task_form::{TaskForm, TaskSubmit};
use crate::components::task_item::{DragSource, TaskItem};
use crate::config::LOGIN_PATH;
use crate::net::error::ApiError;
use crate::net::types::Task;
use crate::state::tasks::{TaskList, TasksState};

#[component]
pub fn TasksPage() -> impl IntoView {
    let services = expect_context::<AppServices>();
    if !services.guard.check().is_allowed() {
        return view! { <p class="tasks-page__redirect">"Redirecting to login..."</p> }.into_any();
    }

    let email = services.auth.user_email();
    let services = StoredValue::new(services);
    let state = RwSignal::new(TasksState::default());
    let drag = RwSignal::new(None::<(TaskList, usize)>);
    let busy = RwSignal::new(false);
    let delete_task_id = RwSignal::new(None::<String>);
    let show_logout = RwSignal::new(false);

    load_tasks(services.get_value(), state);

    let editing = Memo::new(move |_| state.with(|s| s.editing.clone()));

    let on_search = Callback::new(move |text: String| state.update(|s| s.search = text));

    let on_submit = Callback::new(move |(id, patch): TaskSubmit| {
        busy.set(true);
        let services = services.get_value();
        leptos::task::spawn_local(async move {
            let result = match id {
                Some(id) => services.tasks.update(&id, &patch).await.map(|task| {
                    state.update(|s| s.apply_updated(task));
                }),
                None => services.tasks.create(&patch).await.map(|task| {
                    state.update(|s| s.prepend(task));
                }),
            };
            if let Err(err) = result {
                report(state, "Could not save note", &err);
            }
            busy.set(false);
        });
    });

    let on_cancel_edit = Callback::new(move |()| state.update(TasksState::cancel_edit));

    let on_edit = Callback::new(move |task: Task| state.update(|s| s.begin_edit(&task)));

    let on_toggle = Callback::new(move |task: Task| {
        let completed = !task.completed;
        state.update(|s| s.apply_completed(&task.id, completed));
        save_completed(services.get_value(), state, task.id, completed);
    });

    let on_drop = Callback::new(move |target: (TaskList, usize)| {
        let Some(source) = drag.get_untracked() else {
            return;
        };
        drag.set(None);
        let mut moved = None;
        state.update(|s| moved = s.apply_drop(source, target));
        if let Some(task) = moved {
            save_completed(services.get_value(), state, task.id, task.completed);
        }
    });

    let on_delete = Callback::new(move |id: String| delete_task_id.set(Some(id)));

    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = delete_task_id.get_untracked() else {
            return;
        };
        delete_task_id.set(None);
        let services = services.get_value();
        leptos::task::spawn_local(async move {
            match services.tasks.delete(&id).await {
                Ok(()) => state.update(|s| s.remove(&id)),
                Err(err) => report(state, "Could not delete note", &err),
            }
        });
    });

    let on_delete_cancel = Callback::new(move |()| delete_task_id.set(None));

    let on_logout = Callback::new(move |()| show_logout.set(true));

    let on_logout_confirm = Callback::new(move |()| {
        show_logout.set(false);
        services.with_value(|s| {
            s.auth.logout();
            s.navigator.navigate(LOGIN_PATH);
        });
    });

    let on_logout_cancel = Callback::new(move |()| show_logout.set(false));

    view! {
        <div class="tasks-page">
            <Navbar email=email on_search=on_search on_logout=on_logout/>
            <main class="tasks-page__body">
                <TaskForm editing=editing.into() on_submit=on_submit on_cancel=on_cancel_edit busy=busy/>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class="tasks-page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
                <Show when=move || state.with(|s| s.loading)>
                    <p class="tasks-page__loading">"Loading notes..."</p>
                </Show>
                <div class="tasks-page__columns">
                    <TaskColumn
                        title="To do"
                        list=TaskList::Pending
                        state=state
                        drag=drag
                        on_drop=on_drop
                        on_toggle=on_toggle
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                    <TaskColumn
                        title="Done"
                        list=TaskList::Completed
                        state=state
                        drag=drag
                        on_drop=on_drop
                        on_toggle=on_toggle
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                </div>
            </main>
            <Show when=move || delete_task_id.get().is_some()>
                <ConfirmDialog
                    title="Delete note"
                    message="Delete this note? This cannot be undone."
                    confirm_label="Delete"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                    danger=true
                />
            </Show>
            <Show when=move || show_logout.get()>
                <ConfirmDialog
                    title="Log out"
                    message="Are you sure you want to log out?"
                    confirm_label="Log out"
                    on_confirm=on_logout_confirm
                    on_cancel=on_logout_cancel
                />
            </Show>
        </div>
    }
    .into_any()
}

/// One board column. Dropping on the column background appends to it.
#[component]
fn TaskColumn(
    title: &'static str,
    list: TaskList,
    state: RwSignal<TasksState>,
    drag: RwSignal<DragSource>,
    on_drop: Callback<(TaskList, usize)>,
    on_toggle: Callback<Task>,
    on_edit: Callback<Task>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let count = move || state.with(|s| s.list(list).len());

    view! {
        <section
            class="task-column"
            class:task-column--active=move || drag.get().is_some()
            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                on_drop.run((list, count()));
            }
        >
            <h2 class="task-column__title">{title} " (" {count} ")"</h2>
            <div class="task-column__notes">
                {move || {
                    state
                        .with(|s| s.list(list))
                        .into_iter()
                        .enumerate()
                        .map(|(index, task)| {
                            view! {
                                <TaskItem
                                    task=task
                                    list=list
                                    index=index
                                    drag=drag
                                    on_drop=on_drop
                                    on_toggle=on_toggle
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

fn load_tasks(services: AppServices, state: RwSignal<TasksState>) {
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });
    leptos::task::spawn_local(async move {
        match services.tasks.list().await {
            Ok(items) => state.update(|s| s.replace_all(items)),
            Err(err) => {
                state.update(|s| s.loading = false);
                report(state, "Could not load notes", &err);
            }
        }
    });
}

/// Persist a completion change and adopt the server's flag; on failure reload
/// so the board shows the server's state.
fn save_completed(services: AppServices, state: RwSignal<TasksState>, id: String, completed: bool) {
    leptos::task::spawn_local(async move {
        match services.tasks.set_completed(&id, completed).await {
            Ok(saved) => state.update(|s| s.confirm_completed(&saved)),
            Err(err) => {
                report(state, "Could not update note", &err);
                if !err.is_session_rejection() {
                    load_tasks(services, state);
                }
            }
        }
    });
}

fn report(state: RwSignal<TasksState>, context: &str, err: &ApiError) {
    leptos::logging::warn!("{context}: {err}");
    state.update(|s| s.error = Some(format!("{context}: {err}")));
}
