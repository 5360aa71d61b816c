use dioxus::prelude::*;
use svenska::phrases::{PhraseBook, PHRASE_CATEGORIES};
use svenska::translate::{Language, TranslatorState};
use svenska::PlatformTimer;

use crate::components::{Button, ButtonVariant, Spinner};
use crate::icons::{FaArrowRightArrowLeft, FaChevronDown, FaChevronUp, FaVolumeHigh};
use crate::{speak_swedish, use_app_state, Icon};

#[component]
pub fn TranslateView() -> Element {
    let state = use_app_state();
    let mut translator = use_signal(TranslatorState::new);
    let mut translating = use_signal(|| false);

    let current = translator();
    let sound = state.read().preferences.sound_enabled;

    let handle_translate = move |_| {
        if translating() || !translator().can_translate() {
            return;
        }
        spawn(async move {
            translating.set(true);
            let delay = state.read().config.simulation.translation_delay();
            let mut draft = translator();
            draft.translate_delayed(&PlatformTimer, delay).await;
            tracing::debug!("translated {:?} -> {:?}", draft.input, draft.output);
            translator.write().output = draft.output;
            translating.set(false);
        });
    };

    // Whichever side is Swedish is what gets pronounced.
    let swedish_text = match current.from {
        Language::Swedish => current.input.clone(),
        Language::English => current.output.clone(),
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Translate" }

            div {
                class: "card translate-card",
                div {
                    class: "translate-direction",
                    span { class: "translate-language", "{current.from.label()}" }
                    button {
                        class: "icon-button",
                        title: "Swap languages",
                        disabled: translating(),
                        onclick: move |_| translator.write().swap(),
                        Icon { icon: FaArrowRightArrowLeft, width: 16, height: 16 }
                    }
                    span { class: "translate-language", "{current.to().label()}" }
                }
                textarea {
                    class: "translate-input",
                    rows: 3,
                    placeholder: "Enter text in {current.from.label()}...",
                    value: "{current.input}",
                    disabled: translating(),
                    oninput: move |evt: FormEvent| translator.write().input = evt.value(),
                }
                Button {
                    class: "w-full",
                    variant: ButtonVariant::Primary,
                    disabled: !current.can_translate() || translating(),
                    onclick: handle_translate,
                    if translating() {
                        Spinner { small: true }
                        span { "Translating..." }
                    } else {
                        span { "Translate" }
                    }
                }
            }

            if !current.output.is_empty() {
                div {
                    class: "card translate-output",
                    div {
                        class: "translate-output-header",
                        span { class: "view-muted", "{current.to().label()}" }
                        if sound && !swedish_text.trim().is_empty() {
                            button {
                                class: "icon-button",
                                title: "Listen",
                                onclick: move |_| speak_swedish(&swedish_text),
                                Icon { icon: FaVolumeHigh, width: 16, height: 16 }
                            }
                        }
                    }
                    p { class: "translate-result", "{current.output}" }
                }
            }

            section {
                class: "view-section",
                h2 { class: "view-section-title", "Common Phrases" }
                CommonPhrases { sound }
            }
        }
    }
}

#[component]
fn CommonPhrases(sound: bool) -> Element {
    let mut book = use_signal(PhraseBook::default);

    rsx! {
        for category in PHRASE_CATEGORIES {
            div {
                key: "{category.name}",
                class: "card phrase-category",
                button {
                    class: "phrase-category-header",
                    onclick: move |_| book.write().toggle(category.name),
                    span { "{category.name}" }
                    if book.read().is_expanded(category.name) {
                        Icon { icon: FaChevronUp, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaChevronDown, width: 14, height: 14 }
                    }
                }
                if book.read().is_expanded(category.name) {
                    div {
                        class: "phrase-list",
                        for phrase in category.phrases {
                            div {
                                key: "{phrase.swedish}",
                                class: "phrase-row",
                                div {
                                    p { class: "phrase-swedish", "{phrase.swedish}" }
                                    p { class: "view-muted", "{phrase.english}" }
                                }
                                if sound {
                                    button {
                                        class: "icon-button",
                                        title: "Listen",
                                        onclick: move |_| speak_swedish(phrase.swedish),
                                        Icon { icon: FaVolumeHigh, width: 14, height: 14 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
