//! Sticky-note card for one task.
//!
//! DESIGN
//! ======
//! Cards are HTML5 drag sources and drop targets. The card only reports
//! positions (`DragSource` on drag start, target column + index on drop); the
//! page decides whether that is a reorder or a cross-column transfer.

#[cfg(test)]
#[path = "task_item_test.rs"]
mod task_item_test;

use leptos::prelude::*;

use crate::net::types::Task;
use crate::state::tasks::TaskList;

/// Column and view index of the card being dragged.
pub type DragSource = Option<(TaskList, usize)>;

/// Plain-text preview of an HTML description: tags dropped, common entities
/// decoded, whitespace collapsed.
pub fn preview_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[component]
pub fn TaskItem(
    task: Task,
    list: TaskList,
    index: usize,
    drag: RwSignal<DragSource>,
    on_drop: Callback<(TaskList, usize)>,
    on_toggle: Callback<Task>,
    on_edit: Callback<Task>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let preview = preview_text(&task.description);
    let style = format!("background-color: {}", task.color);
    let completed = task.completed;
    let title = task.title.clone();
    let toggle_task = task.clone();
    let edit_task = task.clone();
    let delete_id = task.id.clone();
    #[cfg(feature = "csr")]
    let drag_id = task.id.clone();

    view! {
        <article
            class="sticky-note"
            class:sticky-note--done=completed
            style=style
            draggable="true"
            on:dragstart=move |ev: leptos::ev::DragEvent| {
                #[cfg(feature = "csr")]
                if let Some(data) = ev.data_transfer() {
                    let _ = data.set_data("text/plain", &drag_id);
                }
                #[cfg(not(feature = "csr"))]
                let _ = ev;
                drag.set(Some((list, index)));
            }
            on:dragend=move |_| drag.set(None)
            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                on_drop.run((list, index));
            }
        >
            <label class="sticky-note__header">
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:change=move |_| on_toggle.run(toggle_task.clone())
                />
                <span class="sticky-note__title" class:done=completed>{title}</span>
            </label>
            <p class="sticky-note__preview">{preview}</p>
            <div class="sticky-note__actions">
                <button class="btn btn--icon" title="Edit note" on:click=move |_| on_edit.run(edit_task.clone())>
                    "✎"
                </button>
                <button
                    class="btn btn--icon btn--danger"
                    title="Delete note"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "✕"
                </button>
            </div>
        </article>
    }
}
