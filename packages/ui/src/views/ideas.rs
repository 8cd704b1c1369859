//! The Ideas tab: filter bar, idea list and the create/edit/combine flows.
//!
//! The list shown is always the last full list returned by the backend. Each
//! mutation goes through [`IdeaBoard`](api::IdeaBoard), which refetches after
//! the call, and the returned list replaces the current one. Failures raise a
//! blocking alert and leave the list as it was.

use api::{ApiError, IdeaQuery};
use dioxus::prelude::*;
use store::{group_by_tag, Idea, IdeaFilter, IdeaPayload};

use crate::auth::{sign_out, use_auth};
use crate::components::{Button, ButtonVariant, Input};
use crate::filter_bar::FilterBar;
use crate::icons::{FaCodeMerge, FaPlus};
use crate::idea_card::IdeaCard;
use crate::idea_editor::{EditorMode, IdeaEditor};
use crate::platform::{alert, confirm};
use crate::services::use_services;
use crate::Icon;

fn report_failure(action: &str, e: &ApiError) {
    tracing::warn!("Failed to {action}: {e}");
    alert(&format!("Failed to {action}: {}", e.detail_or("request failed")));
}

/// Add `id` to the selection, or remove it if already present.
fn toggle_selection(selection: &mut Vec<String>, id: String) {
    match selection.iter().position(|s| *s == id) {
        Some(pos) => {
            selection.remove(pos);
        }
        None => selection.push(id),
    }
}

#[component]
pub fn IdeasView() -> Element {
    let services = use_services();
    let mut auth = use_auth();
    let default_view = services.config.ui.default_view;
    let view_mode = use_signal(move || default_view);
    let filter = use_signal(IdeaFilter::default);
    let mut ideas = use_signal(Vec::<Idea>::new);
    let mut loaded = use_signal(|| false);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut selected = use_signal(Vec::<String>::new);
    let mut editor = use_signal(|| Option::<EditorMode>::None);
    let mut combine_title = use_signal(String::new);

    let make_board = {
        let services = services.clone();
        move || services.board(IdeaQuery::with_view_mode(*view_mode.peek()))
    };

    // Refetches whenever the view mode changes, since it picks the sort order
    let _loader = use_resource({
        let services = services.clone();
        move || {
            let board = services.board(IdeaQuery::with_view_mode(view_mode()));
            let services = services.clone();
            async move {
                match board.fetch().await {
                    Ok(list) => {
                        ideas.set(list);
                        load_error.set(None);
                    }
                    Err(e) if e.is_unauthorized() => {
                        tracing::warn!("Session rejected while loading ideas: {e}");
                        sign_out(&mut auth, &services);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load ideas: {e}");
                        load_error.set(Some(e.detail_or("Failed to load ideas")));
                    }
                }
                loaded.set(true);
            }
        }
    });

    let on_save = use_callback({
        let make_board = make_board.clone();
        move |payload: IdeaPayload| {
            let board = make_board();
            let target = editor.peek().clone();
            spawn(async move {
                let result = match target {
                    Some(EditorMode::Edit(idea)) => board.update(&idea.id, &payload.into()).await,
                    _ => board.create(&payload).await,
                };
                match result {
                    Ok(list) => {
                        ideas.set(list);
                        editor.set(None);
                    }
                    Err(e) => report_failure("save the idea", &e),
                }
            });
        }
    });

    let on_edit = use_callback(move |id: String| {
        let found = ideas.peek().iter().find(|i| i.id == id).cloned();
        if let Some(idea) = found {
            editor.set(Some(EditorMode::Edit(idea)));
        }
    });

    let on_delete = use_callback({
        let make_board = make_board.clone();
        move |id: String| {
            let board = make_board();
            spawn(async move {
                match board.delete(&id, confirm("Delete this idea?")).await {
                    Ok(Some(list)) => {
                        ideas.set(list);
                        selected.write().retain(|s| *s != id);
                    }
                    Ok(None) => {}
                    Err(e) => report_failure("delete the idea", &e),
                }
            });
        }
    });

    let on_toggle_favorite = use_callback({
        let make_board = make_board.clone();
        move |id: String| {
            let Some(idea) = ideas.peek().iter().find(|i| i.id == id).cloned() else {
                return;
            };
            let board = make_board();
            spawn(async move {
                match board.toggle_favorite(&idea).await {
                    Ok(list) => ideas.set(list),
                    Err(e) => report_failure("update the idea", &e),
                }
            });
        }
    });

    let on_toggle_select = use_callback(move |id: String| {
        toggle_selection(&mut selected.write(), id);
    });

    let on_combine = {
        let make_board = make_board.clone();
        move |_: MouseEvent| {
            let pair = selected.peek().clone();
            let [first, second] = pair.as_slice() else {
                return;
            };
            let (first, second) = (first.clone(), second.clone());
            let title = combine_title.peek().clone();
            let board = make_board();
            spawn(async move {
                match board.combine(&first, &second, Some(title)).await {
                    Ok(list) => {
                        ideas.set(list);
                        selected.write().clear();
                        combine_title.set(String::new());
                    }
                    Err(e) => report_failure("combine the ideas", &e),
                }
            });
        }
    };

    let visible = filter.read().apply(&ideas.read());
    let has_any = !ideas.read().is_empty();
    let selection_len = selected.read().len();

    let card = move |idea: Idea| {
        let is_selected = selected.read().contains(&idea.id);
        rsx! {
            IdeaCard {
                key: "{idea.id}",
                idea,
                selected: is_selected,
                on_edit,
                on_delete,
                on_toggle_favorite,
                on_toggle_select,
            }
        }
    };

    let list = if !loaded() {
        rsx! { p { class: "mv-muted", "Loading ideas..." } }
    } else if let Some(message) = load_error() {
        rsx! { p { class: "mv-error", "{message}" } }
    } else if visible.is_empty() {
        rsx! {
            div {
                class: "mv-empty",
                if has_any {
                    "No ideas match the current filters."
                } else {
                    "No ideas yet. Capture your first one!"
                }
            }
        }
    } else {
        match view_mode() {
            store::ViewMode::Tag => rsx! {
                for (tag, group) in group_by_tag(&visible) {
                    section {
                        key: "{tag}",
                        class: "mv-tag-group",
                        h3 { class: "mv-tag-group__title", "#{tag} ({group.len()})" }
                        div {
                            class: "mv-grid",
                            for idea in group {
                                {card(idea)}
                            }
                        }
                    }
                }
            },
            store::ViewMode::Grid => rsx! {
                div {
                    class: "mv-grid",
                    for idea in visible {
                        {card(idea)}
                    }
                }
            },
            store::ViewMode::Timeline => rsx! {
                div {
                    class: "mv-list",
                    for idea in visible {
                        {card(idea)}
                    }
                }
            },
        }
    };

    rsx! {
        div {
            class: "mv-ideas",
            div {
                class: "mv-ideas__toolbar",
                FilterBar { filter, view_mode }
                Button {
                    onclick: move |_: MouseEvent| editor.set(Some(EditorMode::New)),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " New idea"
                }
            }

            if selection_len > 0 {
                div {
                    class: "mv-combine-bar",
                    span { "{selection_len} selected" }
                    Input {
                        placeholder: "Title for the combined idea (optional)",
                        value: combine_title(),
                        oninput: move |evt: FormEvent| combine_title.set(evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: selection_len != 2,
                        title: "Select exactly two ideas to combine",
                        onclick: on_combine,
                        Icon { icon: FaCodeMerge, width: 12, height: 12 }
                        " Combine"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_: MouseEvent| selected.write().clear(),
                        "Clear"
                    }
                }
            }

            {list}

            if let Some(mode) = editor() {
                IdeaEditor {
                    mode,
                    on_save,
                    on_cancel: move |_| editor.set(None),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_selection() {
        let mut selection = Vec::new();
        toggle_selection(&mut selection, "a".into());
        toggle_selection(&mut selection, "b".into());
        assert_eq!(selection, vec!["a", "b"]);
        toggle_selection(&mut selection, "a".into());
        assert_eq!(selection, vec!["b"]);
    }
}
