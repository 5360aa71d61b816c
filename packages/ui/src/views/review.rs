use dioxus::prelude::*;
use svenska::review::{Phase, Review};
use svenska::VocabularyWord;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaCheck, FaVolumeHigh, FaXmark};
use crate::{speak_swedish, use_app_actions, use_app_state, Celebration, Icon, LogLevel, WordPicture};

/// Flashcard review over `words`: reveal, then mark each word known or
/// still learning, then see the score.
#[component]
pub fn ReviewView(words: Vec<VocabularyWord>, on_close: EventHandler<()>) -> Element {
    let state = use_app_state();
    let actions = use_app_actions();
    let mut review = use_signal(move || Review::new(words));

    let config = state.read().config.review.clone();
    let sound = state.read().preferences.sound_enabled;

    let Some(current) = review() else {
        return rsx! {
            div {
                class: "card empty-card",
                p { class: "view-muted", "There are no saved words to review yet." }
                Button { variant: ButtonVariant::Outline, onclick: move |_| on_close.call(()), "Back" }
            }
        };
    };

    let mastery = config.mastery_percent;
    let mut mark = move |known: bool| {
        let mut finished = None;
        if let Some(r) = review.write().as_mut() {
            r.mark(known);
            finished = r.outcome(mastery);
        }
        if let Some(outcome) = finished {
            actions.log(
                LogLevel::Success,
                &format!("Review complete: {}/{} known", outcome.known, outcome.total),
            );
        }
    };

    if let Some(outcome) = current.outcome(mastery) {
        return rsx! {
            div {
                class: "card review-result",
                if outcome.celebrate {
                    Celebration { seconds: config.celebration_secs }
                }
                div { class: "review-score", "{outcome.known}/{outcome.total}" }
                h3 { "Review Complete!" }
                p { class: "view-muted", "{outcome.verdict.message()}" }
                div {
                    class: "button-row",
                    Button {
                        class: "flex-1",
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Exit"
                    }
                    Button {
                        class: "flex-1",
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            if let Some(r) = review.write().as_mut() {
                                r.reset();
                            }
                        },
                        "Review Again"
                    }
                }
            }
        };
    }

    let Some(word) = current.current().cloned() else {
        return rsx! {};
    };
    let spoken = word.word.clone();

    rsx! {
        div {
            class: "card flashcard",
            WordPicture { word: word.clone(), class: "flashcard-picture" }
            div {
                class: "flashcard-body",
                div {
                    class: "word-card-title",
                    h3 { "{word.word}" }
                    if sound {
                        button {
                            class: "icon-button",
                            title: "Listen",
                            onclick: move |_| speak_swedish(&spoken),
                            Icon { icon: FaVolumeHigh, width: 18, height: 18 }
                        }
                    }
                }

                if current.phase() == Phase::Revealed {
                    div { class: "flashcard-translation", "{word.translation}" }
                    div {
                        class: "button-row",
                        Button {
                            class: "flex-1",
                            variant: ButtonVariant::Outline,
                            onclick: move |_| mark(false),
                            Icon { icon: FaXmark, width: 14, height: 14 }
                            span { "Still Learning" }
                        }
                        Button {
                            class: "flex-1",
                            variant: ButtonVariant::Primary,
                            onclick: move |_| mark(true),
                            Icon { icon: FaCheck, width: 14, height: 14 }
                            span { "I Know This" }
                        }
                    }
                } else {
                    Button {
                        class: "w-full",
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            if let Some(r) = review.write().as_mut() {
                                r.reveal();
                            }
                        },
                        "Show Translation"
                    }
                }

                div {
                    class: "flashcard-footer",
                    span { "Word {current.position()} of {current.total()}" }
                    span { "{current.known_count()} words mastered" }
                }
            }
        }
    }
}
