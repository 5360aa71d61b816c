use dioxus::prelude::*;
use svenska::VocabularyWord;

use crate::components::{Button, ButtonVariant, Spinner};
use crate::icons::{FaArrowLeft, FaTrash, FaVolumeHigh};
use crate::{speak_swedish, use_app_actions, use_app_state, Icon, WordPicture};

use super::ModalOverlay;

/// The learner's saved words, with pronunciation and removal.
#[component]
pub fn VocabularyView(on_back: EventHandler<()>, on_navigate_explore: EventHandler<()>) -> Element {
    let state = use_app_state();
    let actions = use_app_actions();
    let mut confirm_remove = use_signal(|| Option::<VocabularyWord>::None);

    let header = rsx! {
        div {
            class: "view-back-header",
            button {
                class: "icon-button",
                title: "Back",
                onclick: move |_| on_back.call(()),
                Icon { icon: FaArrowLeft, width: 18, height: 18 }
            }
            h1 { class: "view-title", "My Vocabulary" }
        }
    };

    if !state.read().loaded {
        return rsx! {
            div {
                class: "view-page",
                {header}
                div {
                    class: "card empty-card",
                    Spinner {}
                    p { class: "view-muted", "Loading your vocabulary..." }
                }
            }
        };
    }

    let words = state.read().saved.words().to_vec();
    let sound = state.read().preferences.sound_enabled;

    let handle_remove = move |_| {
        let Some(word) = confirm_remove.take() else {
            return;
        };
        spawn(async move {
            actions.remove_word(word.id).await;
        });
    };

    rsx! {
        div {
            class: "view-page",
            {header}

            if words.is_empty() {
                div {
                    class: "card empty-card",
                    span { class: "empty-glyph", "📚" }
                    h3 { "No words saved yet" }
                    p { class: "view-muted", "Start exploring and add words to build your vocabulary!" }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_navigate_explore.call(()),
                        "Explore Words"
                    }
                }
            } else {
                p {
                    class: "vocabulary-count",
                    "You have learned "
                    strong { "{words.len()}" }
                    " words"
                }
                div {
                    class: "vocabulary-list",
                    for word in words {
                        VocabularyRow {
                            key: "{word.id}",
                            sound,
                            on_remove: move |w| confirm_remove.set(Some(w)),
                            word: word.clone(),
                        }
                    }
                }
            }
        }

        if let Some(word) = confirm_remove() {
            ModalOverlay {
                on_close: move |_| confirm_remove.set(None),
                div {
                    class: "dialog",
                    h2 { class: "dialog-title", "Remove word?" }
                    p {
                        class: "view-muted",
                        "Are you sure you want to remove \"{word.word}\" from your vocabulary?"
                    }
                    div {
                        class: "button-row",
                        Button {
                            class: "flex-1",
                            variant: ButtonVariant::Outline,
                            onclick: move |_| confirm_remove.set(None),
                            "Cancel"
                        }
                        Button {
                            class: "flex-1",
                            variant: ButtonVariant::Destructive,
                            onclick: handle_remove,
                            "Remove"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VocabularyRow(word: VocabularyWord, sound: bool, on_remove: EventHandler<VocabularyWord>) -> Element {
    let spoken = word.word.clone();
    let removed = word.clone();

    rsx! {
        div {
            class: "card vocabulary-row",
            WordPicture { word: word.clone(), class: "vocabulary-thumb" }
            div {
                class: "vocabulary-row-body",
                div {
                    class: "word-card-title",
                    h3 { "{word.word}" }
                    div {
                        class: "vocabulary-row-actions",
                        if sound {
                            button {
                                class: "icon-button",
                                title: "Listen",
                                onclick: move |_| speak_swedish(&spoken),
                                Icon { icon: FaVolumeHigh, width: 16, height: 16 }
                            }
                        }
                        button {
                            class: "icon-button danger",
                            title: "Remove",
                            onclick: move |_| on_remove.call(removed.clone()),
                            Icon { icon: FaTrash, width: 16, height: 16 }
                        }
                    }
                }
                p { class: "view-muted", "{word.translation}" }
            }
        }
    }
}
