//! Daily Quiz Component
//!
//! One knowledge question per calendar day; the first pick is final.

use chrono::Local;
use leptos::prelude::*;

use crate::content::DAILY_QUESTIONS;
use crate::quiz::{daily_question_index, DailyQuizState, OptionState};

#[component]
pub fn DailyQuiz() -> impl IntoView {
    let today = Local::now().date_naive();
    let question = &DAILY_QUESTIONS[daily_question_index(today, DAILY_QUESTIONS.len())];
    let correct = question.correct;
    let (state, set_state) = signal(DailyQuizState::default());

    let select = move |option: usize| {
        let mut accepted = false;
        set_state.update(|s| accepted = s.select(option));
        if accepted {
            log::debug!("[DAILY] picked option {} (correct: {})", option, option == correct);
        }
    };

    view! {
        <div class="daily-quiz">
            <h3><span class="text-red">"Daily"</span>" Energy Quiz"</h3>
            <p class="daily-question">{question.question}</p>
            <div class="daily-options">
                {question.options.iter().enumerate().map(|(i, option)| {
                    let option_state = move || state.get().option_state(i, correct);
                    view! {
                        <button
                            class=move || match option_state() {
                                OptionState::Open => "daily-option",
                                OptionState::Correct | OptionState::Revealed => "daily-option correct",
                                OptionState::Wrong => "daily-option wrong",
                                OptionState::Dimmed => "daily-option dimmed",
                            }
                            disabled=move || state.get().selected.is_some()
                            on:click=move |_| select(i)
                        >
                            {*option}
                            <span class="daily-mark">
                                {move || match option_state() {
                                    OptionState::Correct | OptionState::Revealed => "✓",
                                    OptionState::Wrong => "✗",
                                    _ => "",
                                }}
                            </span>
                        </button>
                    }
                }).collect_view()}
            </div>
            {move || state.get().is_correct(correct).map(|right| {
                if right {
                    view! { <div class="daily-feedback correct">"Correct! Your masculine awareness is strong."</div> }.into_any()
                } else {
                    view! { <div class="daily-feedback wrong">"Not quite. Keep studying the protocol to deepen your understanding."</div> }.into_any()
                }
            })}
        </div>
    }
}
