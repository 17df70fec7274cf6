//! Create/edit form for a sticky note.
//!
//! The form is in edit mode while `editing` holds a task; the draft is refilled
//! whenever that signal changes. Submitting validates the draft and hands the
//! request body to the page, which performs the remote call.

use leptos::prelude::*;

use crate::app::AppServices;
use crate::net::types::{Task, TaskPatch};
use crate::util::color::NOTE_PALETTE;
use crate::util::validation::{TaskDraft, validate_task};

/// Form submission: target task id when editing, and the request body.
pub type TaskSubmit = (Option<String>, TaskPatch);

#[component]
pub fn TaskForm(
    editing: Signal<Option<Task>>,
    on_submit: Callback<TaskSubmit>,
    on_cancel: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let services = expect_context::<AppServices>();
    let draft = RwSignal::new(TaskDraft::blank());
    let error = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        let next = editing.get().as_ref().map_or_else(TaskDraft::blank, TaskDraft::from_task);
        draft.set(next);
        error.set(None);
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        match validate_task(&current, services.auth.user_id()) {
            Ok(patch) => {
                error.set(None);
                let id = editing.get_untracked().map(|task| task.id);
                on_submit.run((id, patch));
                if editing.get_untracked().is_none() {
                    draft.set(TaskDraft::blank());
                }
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let is_editing = move || editing.get().is_some();

    view! {
        <form class="task-form" on:submit=submit style=move || format!("background-color: {}", draft.get().color)>
            <h2>{move || if is_editing() { "Edit note" } else { "New note" }}</h2>
            <input
                class="task-form__title"
                type="text"
                placeholder="Title"
                prop:value=move || draft.get().title
                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
            />
            <textarea
                class="task-form__description"
                placeholder="Write something..."
                rows="5"
                prop:value=move || draft.get().description
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
            ></textarea>
            <div class="task-form__palette" role="radiogroup" aria-label="Note color">
                {NOTE_PALETTE
                    .iter()
                    .map(|&swatch| {
                        view! {
                            <button
                                type="button"
                                class="task-form__swatch"
                                class:selected=move || draft.get().color == swatch
                                style=format!("background-color: {swatch}")
                                title=swatch
                                on:click=move |_| draft.update(|d| d.color = swatch.to_owned())
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || error.get().is_some()>
                <p class="task-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="task-form__actions">
                <Show when=is_editing>
                    <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </Show>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if is_editing() { "Save" } else { "Add note" }}
                </button>
            </div>
        </form>
    }
}
