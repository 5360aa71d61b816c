use dioxus::prelude::*;
use svenska::catalog;
use svenska::config::QuizConfig;
use svenska::quiz::{Prompt, Question, Quiz, QuizKind};
use svenska::random::thread_random;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaArrowLeft, FaVolumeHigh};
use crate::{speak_swedish, use_app_actions, use_app_state, Icon, LogLevel};

fn new_quiz(kind: QuizKind, config: &QuizConfig) -> Option<Quiz> {
    let pool = catalog::all_words();
    Quiz::new(kind, &pool, config.rounds, config.options, &mut thread_random())
}

/// A multiple-choice game over the built-in words.
#[component]
pub fn QuizView(kind: QuizKind, on_close: EventHandler<()>) -> Element {
    let state = use_app_state();
    let actions = use_app_actions();
    let mut quiz = use_signal(move || new_quiz(kind, &state.read().config.quiz));

    let sound = state.read().preferences.sound_enabled;

    let header = rsx! {
        div {
            class: "view-back-header",
            button {
                class: "icon-button",
                title: "Back",
                onclick: move |_| on_close.call(()),
                Icon { icon: FaArrowLeft, width: 18, height: 18 }
            }
            h1 { class: "view-title", "{kind.title()}" }
        }
    };

    let Some(current) = quiz() else {
        return rsx! {
            div {
                class: "view-page",
                {header}
                div { class: "card empty-card", p { class: "view-muted", "No questions available for this game." } }
            }
        };
    };

    if current.is_finished() {
        return rsx! {
            div {
                class: "view-page",
                {header}
                div {
                    class: "card review-result",
                    div { class: "review-score", "{current.score()}/{current.total()}" }
                    h3 { "Game Over!" }
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
                            onclick: move |_| quiz.set(new_quiz(kind, &state.read().config.quiz)),
                            "Play Again"
                        }
                    }
                }
            }
        };
    }

    let Some(question) = current.current().cloned() else {
        return rsx! {};
    };
    let answered = question.chosen().is_some();

    let mut choose = move |choice: String| {
        let correct = quiz.write().as_mut().and_then(|q| q.answer(&choice));
        if let Some(correct) = correct {
            tracing::debug!("{choice}: {}", if correct { "correct" } else { "wrong" });
        }
    };

    let mut advance = move || {
        let mut finished = None;
        if let Some(q) = quiz.write().as_mut() {
            q.next();
            if q.is_finished() {
                finished = Some((q.score(), q.total()));
            }
        }
        if let Some((score, total)) = finished {
            actions.log(
                LogLevel::Success,
                &format!("{}: {score}/{total} correct", kind.title()),
            );
        }
    };

    let prompt = match question.prompt.clone() {
        Prompt::Picture { glyph, image_url } => rsx! {
            div {
                class: "word-picture quiz-picture",
                if let Some(url) = image_url {
                    img { src: "{url}", alt: "?" }
                } else {
                    span { class: "word-glyph", "{glyph}" }
                }
            }
            p { class: "view-muted", "Which Swedish word matches this picture?" }
        },
        Prompt::Audio { word } => rsx! {
            button {
                class: "btn btn-primary quiz-listen",
                disabled: !sound,
                onclick: move |_| speak_swedish(&word),
                Icon { icon: FaVolumeHigh, width: 22, height: 22 }
                span { "Play word" }
            }
            if !sound {
                p { class: "view-hint", "Sound is turned off in Settings." }
            }
            p { class: "view-muted", "Which word did you hear?" }
        },
        Prompt::Sentence { text, english } => rsx! {
            p { class: "quiz-sentence", "{text}" }
            p { class: "view-muted", "{english}" }
        },
    };

    rsx! {
        div {
            class: "view-page",
            {header}
            div {
                class: "card quiz-card",
                div {
                    class: "flashcard-footer",
                    span { "Question {current.position()} of {current.total()}" }
                    span { "{current.score()} correct" }
                }
                div { class: "quiz-prompt", {prompt} }
                div {
                    class: "quiz-options",
                    for option in question.options.clone() {
                        button {
                            key: "{option}",
                            class: option_class(&question, &option),
                            disabled: answered,
                            onclick: {
                                let option = option.clone();
                                move |_| choose(option.clone())
                            },
                            "{option}"
                        }
                    }
                }
                if answered {
                    if question.is_correct() {
                        p { class: "quiz-feedback correct", "Rätt! Correct." }
                    } else {
                        p { class: "quiz-feedback wrong", "The answer was \"{question.answer.word}\" ({question.answer.translation})." }
                    }
                    Button {
                        class: "w-full",
                        variant: ButtonVariant::Primary,
                        onclick: move |_| advance(),
                        if current.position() == current.total() { "See Results" } else { "Next" }
                    }
                }
            }
        }
    }
}

fn option_class(question: &Question, option: &str) -> &'static str {
    match question.chosen() {
        None => "quiz-option",
        Some(_) if option == question.answer.word => "quiz-option correct",
        Some(chosen) if chosen == option => "quiz-option wrong",
        Some(_) => "quiz-option",
    }
}
