//! Two-sided flashcard that flips between Polish and the target language.
//!
//! The flip itself is CSS-driven: this component only toggles the
//! `--flipped` modifier class and leaves the 3D transform to the
//! stylesheet. The caller owns the flip signal so it can reset the card
//! face when advancing to the next flashcard.

#[cfg(test)]
#[path = "flip_card_test.rs"]
mod flip_card_test;

use leptos::prelude::*;

use crate::net::types::StudyFlashcard;
use crate::state::language::TargetLanguage;

fn back_face_label(lang: TargetLanguage) -> &'static str {
    match lang {
        TargetLanguage::Fr => "Français",
        TargetLanguage::En => "English",
    }
}

#[component]
pub fn FlipCard(
    card: StudyFlashcard,
    flipped: RwSignal<bool>,
    #[prop(into)] language: Signal<TargetLanguage>,
) -> impl IntoView {
    let back_text = card.text_target.clone();
    let image = card.image_url.clone().map(|url| {
        let alt = card.text_target.clone();
        view! { <img class="flip-card__image" src=url alt=alt/> }
    });

    view! {
        <div
            class="flip-card"
            class:flip-card--flipped=move || flipped.get()
            on:click=move |_| flipped.update(|f| *f = !*f)
        >
            <div class="flip-card__face flip-card__face--front">
                <span class="flip-card__lang">"Polski"</span>
                <p class="flip-card__text">{card.text_pl.clone()}</p>
                <span class="flip-card__hint">"Kliknij, aby zobaczyć tłumaczenie"</span>
            </div>
            <div class="flip-card__face flip-card__face--back">
                <span class="flip-card__lang">{move || back_face_label(language.get())}</span>
                <p class="flip-card__text">{back_text}</p>
                {image}
                <span class="flip-card__hint">"Kliknij, aby wrócić"</span>
            </div>
        </div>
    }
}
