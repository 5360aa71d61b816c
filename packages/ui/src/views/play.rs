use dioxus::prelude::*;
use svenska::quiz::QuizKind;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaAlignLeft, FaArrowLeft, FaBook, FaImage, FaVolumeHigh};
use crate::{use_app_state, Icon};

use super::{QuizView, ReviewView};

/// Words shown as chips before "+N more".
const PREVIEW_WORDS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
enum PlayMode {
    Menu,
    Quiz(QuizKind),
    Review,
}

#[component]
fn QuizIcon(kind: QuizKind) -> Element {
    match kind {
        QuizKind::ImageToWord => rsx! { Icon { icon: FaImage, width: 22, height: 22 } },
        QuizKind::ListenAndChoose => rsx! { Icon { icon: FaVolumeHigh, width: 22, height: 22 } },
        QuizKind::CompleteSentence => rsx! { Icon { icon: FaAlignLeft, width: 22, height: 22 } },
    }
}

/// Games list and the entry point to reviewing saved words.
#[component]
pub fn PlayView(
    /// Called by "View All".
    on_navigate_vocabulary: EventHandler<()>,
    /// Called by "Explore Words" when nothing is saved yet.
    on_navigate_explore: EventHandler<()>,
) -> Element {
    let state = use_app_state();
    let mut mode = use_signal(|| PlayMode::Menu);

    match mode() {
        PlayMode::Quiz(kind) => {
            return rsx! {
                QuizView { kind, on_close: move |_| mode.set(PlayMode::Menu) }
            };
        }
        PlayMode::Review => {
            let words = state.read().saved.words().to_vec();
            return rsx! {
                div {
                    class: "view-page",
                    div {
                        class: "view-back-header",
                        button {
                            class: "icon-button",
                            title: "Back",
                            onclick: move |_| mode.set(PlayMode::Menu),
                            Icon { icon: FaArrowLeft, width: 18, height: 18 }
                        }
                        h1 { class: "view-title", "My Vocabulary" }
                    }
                    ReviewView { words, on_close: move |_| mode.set(PlayMode::Menu) }
                }
            };
        }
        PlayMode::Menu => {}
    }

    let saved = state.read().saved.clone();
    let (preview, rest) = saved.preview(PREVIEW_WORDS);

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Play" }

            section {
                class: "view-section",
                h2 { class: "view-section-title", "Games" }
                div {
                    class: "game-list",
                    for kind in QuizKind::ALL {
                        button {
                            key: "{kind.slug()}",
                            class: "card game-card",
                            onclick: move |_| mode.set(PlayMode::Quiz(kind)),
                            div { class: "game-icon", QuizIcon { kind } }
                            div {
                                class: "game-text",
                                h3 { "{kind.title()}" }
                                p { class: "view-muted", "{kind.description()}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "view-section",
                div {
                    class: "view-section-header",
                    h2 { class: "view-section-title", "My Vocabulary" }
                    button {
                        class: "link-button",
                        onclick: move |_| on_navigate_vocabulary.call(()),
                        "View All"
                    }
                }
                div {
                    class: "card review-entry",
                    div {
                        class: "review-entry-header",
                        div { class: "game-icon success", Icon { icon: FaBook, width: 22, height: 22 } }
                        div {
                            h3 { "Review Words" }
                            p { class: "view-muted", "{saved.len()} words saved" }
                        }
                    }
                    if saved.is_empty() {
                        div {
                            class: "empty-inline",
                            p { class: "view-muted", "No words saved yet" }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| on_navigate_explore.call(()),
                                "Explore Words"
                            }
                        }
                    } else {
                        div {
                            class: "word-chips",
                            for word in preview {
                                span { key: "{word.id}", class: "chip", "{word.word}" }
                            }
                            if rest > 0 {
                                span { class: "chip", "+{rest} more" }
                            }
                        }
                        Button {
                            class: "w-full",
                            variant: ButtonVariant::Primary,
                            onclick: move |_| mode.set(PlayMode::Review),
                            "Start Practice"
                        }
                    }
                }
            }
        }
    }
}
