use yew::prelude::*;

use crate::content::{SectionId, ACCENT_RED};

#[derive(Properties, PartialEq)]
pub struct SectionIndicatorProps {
    pub sections: &'static [SectionId],
    pub current: usize,
    pub on_select: Callback<usize>,
}

/// One dot per section; the current one is drawn larger in the accent colour.
#[function_component(SectionIndicator)]
pub fn section_indicator(props: &SectionIndicatorProps) -> Html {
    let SectionIndicatorProps { sections, current, on_select } = props;

    html! {
        <nav class="section-indicator">
            <style>
                {r#"
                    .section-indicator {
                        position: fixed;
                        right: 1.25rem;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 50;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .section-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        padding: 0;
                        border: none;
                        border-radius: 9999px;
                        background: #9ca3af;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .section-dot.current {
                        width: 1rem;
                        height: 1rem;
                    }
                    @media (max-width: 768px) {
                        .section-indicator { display: none; }
                    }
                "#}
            </style>
            {
                sections.iter().enumerate().map(|(index, section)| {
                    let is_current = index == *current;
                    let onclick = {
                        let on_select = on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(index))
                    };
                    html! {
                        <button
                            key={section.key()}
                            class={classes!("section-dot", is_current.then(|| "current"))}
                            style={is_current.then(|| format!("background-color: {};", ACCENT_RED))}
                            aria-label={section.label()}
                            aria-current={is_current.then(|| "true")}
                            {onclick}
                        />
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}
