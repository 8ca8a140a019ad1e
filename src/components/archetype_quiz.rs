//! Archetype Quiz Component
//!
//! Five questions, one answer each; the most-voted archetype wins.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::content::{ARCHETYPES, QUESTIONS};
use crate::context::use_theme;
use crate::quiz::{dot_state, DotState, QuizState, QuizStateStoreFields};

#[component]
pub fn ArchetypeQuiz() -> impl IntoView {
    let theme = use_theme();
    let store = Store::new(QuizState::new(QUESTIONS.len(), ARCHETYPES.len()));

    let answer = move |option: usize| {
        store.update(|quiz| quiz.answer(option));
        if let Some(idx) = store.result().get_untracked() {
            log::info!("[QUIZ] finished: {}", ARCHETYPES[idx].id);
        }
    };

    let card_class = move || theme.theme.get().pick("quiz-card fire-card", "quiz-card");
    let title_class = move || theme.theme.get().pick("quiz-title fire-text", "quiz-title");
    let action_class = move || theme.theme.get().pick("btn fire-button", "btn btn-red");

    let question_view = move || {
        let current = store.current().get();
        let question = &QUESTIONS[current];
        view! {
            <div class="quiz-question">
                <div class="quiz-meta">
                    <span class="quiz-count">{format!("Question {} of {}", current + 1, QUESTIONS.len())}</span>
                    <div class="quiz-dots">
                        {(0..QUESTIONS.len()).map(|i| {
                            let class = match dot_state(i, current) {
                                DotState::Current => "dot current",
                                DotState::Done => "dot done",
                                DotState::Upcoming => "dot",
                            };
                            view! { <div class=class></div> }
                        }).collect_view()}
                    </div>
                </div>
                <h4>{question.text}</h4>
                <div class="quiz-options">
                    {question.options.iter().enumerate().map(|(i, option)| {
                        let selected = move || store.with(|quiz| quiz.answer_for(quiz.current) == Some(i));
                        view! {
                            <button
                                class=move || if selected() { "quiz-option selected" } else { "quiz-option" }
                                on:click=move |_| answer(i)
                            >
                                {*option}
                            </button>
                        }
                    }).collect_view()}
                </div>
                <div class="quiz-nav">
                    <button
                        class="btn btn-outline"
                        disabled=move || store.current().get() == 0
                        on:click=move |_| store.update(|quiz| quiz.previous())
                    >
                        "‹ Previous"
                    </button>
                    <Show when=move || store.with(|quiz| quiz.can_skip())>
                        <button class=action_class on:click=move |_| store.update(|quiz| quiz.skip())>
                            "Skip ›"
                        </button>
                    </Show>
                </div>
            </div>
        }
    };

    let result_view = move || {
        store.result().get().map(|idx| {
            let archetype = &ARCHETYPES[idx];
            view! {
                <div class="quiz-result">
                    <span class="quiz-count">"Your Result"</span>
                    <h4 class=move || theme.theme.get().pick("fire-text", "text-red")>
                        {format!("You are: {}", archetype.name)}
                    </h4>
                    <p>{archetype.description}</p>
                    <div class="quiz-traits">
                        {archetype.traits.iter().map(|t| view! { <span class="trait">{*t}</span> }).collect_view()}
                    </div>
                    <button class=action_class on:click=move |_| store.update(|quiz| quiz.restart())>
                        "Take Quiz Again"
                    </button>
                </div>
            }
        })
    };

    view! {
        <div class=card_class>
            <h3 class=title_class>"Discover Your Masculine Archetype"</h3>
            <Show when=move || store.result().get().is_none() fallback=result_view>
                {question_view}
            </Show>
        </div>
    }
}
