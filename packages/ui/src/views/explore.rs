use std::time::Duration;

use dioxus::prelude::*;
use svenska::random::thread_random;
use svenska::recognition::{ProcessingStage, Recognizer};
use svenska::{catalog, Category, PlatformTimer, Timer, VocabularyWord};

use crate::components::Spinner;
use crate::icons::{FaCamera, FaCheck, FaPlus, FaUpload, FaVolumeHigh};
use crate::upload::{image_from_event, release_preview, releasable_preview, try_begin};
use crate::{speak_swedish, use_app_actions, use_app_state, CategoryIcon, Icon, LogLevel, WordPicture};

const SUCCESS_NOTICE: Duration = Duration::from_secs(3);

/// Home screen: recognize a photo or browse the built-in words by category.
#[component]
pub fn ExploreView() -> Element {
    let state = use_app_state();
    let actions = use_app_actions();

    let mut category = use_signal(Category::default);
    let mut stage = use_signal(|| Option::<ProcessingStage>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut uploaded = use_signal(|| Option::<VocabularyWord>::None);
    let mut pending = use_signal(|| Option::<Task>::None);

    let busy = stage().is_some();

    // Frees the current result's preview unless the learner saved that word.
    let mut drop_uploaded = move || {
        if let Some(word) = uploaded.take() {
            if let Some(url) = releasable_preview(&word, &state.read().saved) {
                release_preview(url);
            }
        }
    };

    let mut clear_uploaded = move || {
        if let Some(task) = pending.take() {
            task.cancel();
            tracing::debug!("recognition cancelled");
        }
        drop_uploaded();
        stage.set(None);
        error.set(None);
    };

    let handle_file = move |evt: FormEvent| {
        if !try_begin(&mut stage.write()) {
            return;
        }
        drop_uploaded();
        error.set(None);

        let task = spawn(async move {
            let upload = match image_from_event(&evt).await {
                Some(Ok(upload)) => upload,
                Some(Err(e)) => {
                    actions.log(LogLevel::Warning, &e.to_string());
                    error.set(Some(e.user_message()));
                    stage.set(None);
                    pending.set(None);
                    return;
                }
                None => {
                    stage.set(None);
                    pending.set(None);
                    return;
                }
            };

            let delay = state.read().config.simulation.recognition_delay();
            let mut recognizer = Recognizer::new(thread_random(), PlatformTimer, delay);
            let result = recognizer.process(&upload, |s| stage.set(Some(s))).await;
            stage.set(None);
            pending.set(None);

            match result {
                Ok(word) => {
                    actions.log(
                        LogLevel::Info,
                        &format!("Recognized {} as \"{}\"", upload.name, word.word),
                    );
                    uploaded.set(Some(word));
                }
                Err(e) => {
                    actions.log(LogLevel::Error, &format!("Processing {} failed: {e}", upload.name));
                    error.set(Some(e.user_message()));
                }
            }
        });
        pending.set(Some(task));
    };

    let words = catalog::words_in(category());
    let saved = state.read().saved.clone();

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Explore" }

            div {
                class: "upload-actions",
                label {
                    class: if busy { "btn btn-primary upload-button disabled" } else { "btn btn-primary upload-button" },
                    Icon { icon: FaUpload, width: 14, height: 14 }
                    span { "Browse Files" }
                    input {
                        class: "hidden-input",
                        r#type: "file",
                        accept: "image/*",
                        disabled: busy,
                        onchange: handle_file,
                    }
                }
                label {
                    class: if busy { "btn btn-outline upload-button disabled" } else { "btn btn-outline upload-button" },
                    Icon { icon: FaCamera, width: 14, height: 14 }
                    span { "Take Photo" }
                    input {
                        class: "hidden-input",
                        r#type: "file",
                        accept: "image/*",
                        "capture": "environment",
                        disabled: busy,
                        onchange: handle_file,
                    }
                }
            }

            if let Some(s) = stage() {
                div {
                    class: "card processing-card",
                    Spinner {}
                    p { class: "view-muted", "{s.status()}" }
                    button {
                        class: "link-button",
                        onclick: move |_| clear_uploaded(),
                        "Cancel"
                    }
                }
            }
            if let Some(message) = error() {
                div { class: "card error-card", p { "{message}" } }
            }

            if let Some(word) = uploaded() {
                section {
                    class: "view-section",
                    div {
                        class: "view-section-header",
                        h2 { class: "view-section-title", "Uploaded Image Result" }
                        button {
                            class: "link-button",
                            onclick: move |_| clear_uploaded(),
                            "Clear"
                        }
                    }
                    VocabularyCard {
                        is_added: saved.contains(word.id),
                        show_example: true,
                        word: word.clone(),
                    }
                }
            } else {
                section {
                    class: "view-section",
                    h2 { class: "view-section-title", "Categories" }
                    div {
                        class: "category-chips",
                        for c in Category::ALL {
                            button {
                                key: "{c.id()}",
                                class: if category() == c { "chip chip-active" } else { "chip" },
                                onclick: move |_| category.set(c),
                                "{c.label()}"
                            }
                        }
                    }
                }

                div {
                    class: "category-header",
                    div { class: "category-header-icon", CategoryIcon { category: category() } }
                    h2 { "{category().label()}" }
                }

                if words.is_empty() {
                    div {
                        class: "card empty-card",
                        span { class: "empty-glyph", "📚" }
                        h3 { "No Words Found" }
                        p { class: "view-muted", "No vocabulary words available for this category yet." }
                        p { class: "view-hint", "Try selecting a different category or upload an image to learn new words!" }
                    }
                } else {
                    div {
                        class: "word-grid",
                        for word in words {
                            VocabularyCard {
                                key: "{word.id}",
                                is_added: saved.contains(word.id),
                                word: word.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A word with its picture and an "add to my vocabulary" button.
#[component]
fn VocabularyCard(word: VocabularyWord, is_added: bool, #[props(default)] show_example: bool) -> Element {
    let state = use_app_state();
    let actions = use_app_actions();
    let mut adding = use_signal(|| false);
    let mut show_success = use_signal(|| false);

    let sound = state.read().preferences.sound_enabled;
    let done = is_added || show_success();

    let handle_add = {
        let word = word.clone();
        move |_| {
            if is_added || adding() {
                return;
            }
            let word = word.clone();
            spawn(async move {
                adding.set(true);
                let delay = state.read().config.simulation.save_delay();
                PlatformTimer.sleep(delay).await;
                actions.save_word(word).await;
                adding.set(false);
                show_success.set(true);
                PlatformTimer.sleep(SUCCESS_NOTICE).await;
                show_success.set(false);
            });
        }
    };

    let spoken = word.word.clone();

    rsx! {
        div {
            class: "card word-card",
            WordPicture { word: word.clone() }
            div {
                class: "word-card-body",
                div {
                    class: "word-card-title",
                    h3 { "{word.word}" }
                    if sound {
                        button {
                            class: "icon-button",
                            title: "Listen",
                            onclick: move |_| speak_swedish(&spoken),
                            Icon { icon: FaVolumeHigh, width: 16, height: 16 }
                        }
                    }
                }
                p { class: "word-card-translation", "{word.translation}" }
                if show_example {
                    if let Some(example) = word.example.as_ref() {
                        div {
                            class: "example-sentence",
                            p { class: "example-swedish", "{example.swedish}" }
                            p { class: "view-muted", "{example.english}" }
                        }
                    }
                }
                button {
                    class: if done { "btn btn-success add-button done" } else { "btn btn-success add-button" },
                    disabled: is_added || adding(),
                    onclick: handle_add,
                    if adding() {
                        Spinner { small: true }
                        span { "Adding..." }
                    } else if done {
                        Icon { icon: FaCheck, width: 14, height: 14 }
                        span { "Added to My Vocabulary" }
                    } else {
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { "Add to My Vocabulary" }
                    }
                }
                if show_success() {
                    div { class: "success-notice", "Word saved! Check it in Play → My Vocabulary" }
                }
            }
        }
    }
}
