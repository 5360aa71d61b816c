use dioxus::prelude::*;
use svenska::{Category, VocabularyWord};

use crate::icons::{
    FaBox, FaCar, FaGamepad, FaLocationDot, FaPaw, FaShirt, FaTree, FaUsers, FaUtensils,
};
use crate::Icon;

/// The word's picture: the uploaded image when there is one, its glyph
/// otherwise.
#[component]
pub fn WordPicture(word: VocabularyWord, #[props(default)] class: String) -> Element {
    rsx! {
        div {
            class: "word-picture {class}",
            if let Some(url) = word.image_url.as_ref() {
                img { src: "{url}", alt: "{word.word}" }
            } else {
                span { class: "word-glyph", role: "img", aria_label: "{word.translation}", "{word.glyph}" }
            }
        }
    }
}

#[component]
pub fn CategoryIcon(category: Category, #[props(default = 16)] size: u32) -> Element {
    match category {
        Category::Food => rsx! { Icon { icon: FaUtensils, width: size, height: size } },
        Category::Animals => rsx! { Icon { icon: FaPaw, width: size, height: size } },
        Category::Transport => rsx! { Icon { icon: FaCar, width: size, height: size } },
        Category::Nature => rsx! { Icon { icon: FaTree, width: size, height: size } },
        Category::Objects => rsx! { Icon { icon: FaBox, width: size, height: size } },
        Category::Clothing => rsx! { Icon { icon: FaShirt, width: size, height: size } },
        Category::Places => rsx! { Icon { icon: FaLocationDot, width: size, height: size } },
        Category::Entertainment => rsx! { Icon { icon: FaGamepad, width: size, height: size } },
        Category::People => rsx! { Icon { icon: FaUsers, width: size, height: size } },
    }
}
