use yew::prelude::*;

use crate::content::InsightItem;
use crate::scroll::Direction;

#[derive(Properties, PartialEq)]
pub struct InsightsProps {
    pub items: &'static [InsightItem],
    pub on_move: Callback<Direction>,
}

#[function_component(Insights)]
pub fn insights(props: &InsightsProps) -> Html {
    let InsightsProps { items, on_move } = props;

    let move_up = {
        let on_move = on_move.clone();
        Callback::from(move |_: MouseEvent| on_move.emit(Direction::Backward))
    };
    let move_down = {
        let on_move = on_move.clone();
        Callback::from(move |_: MouseEvent| on_move.emit(Direction::Forward))
    };

    html! {
        <section class="fp-section insights">
            <style>
                {r#"
                    .insights {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 5rem 2.5rem;
                        background: #fff;
                        color: #27272a;
                    }
                    .insights-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        width: 100%;
                    }
                    .insights h2 {
                        text-align: center;
                        font-size: 3rem;
                        font-weight: 300;
                        letter-spacing: 0.1em;
                        margin-bottom: 4rem;
                    }
                    .insight-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .insight-card {
                        min-height: 350px;
                        padding: 1.5rem;
                        border: 1px solid #e5e7eb;
                        border-radius: 8px;
                        background: #fff;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: box-shadow 0.7s ease;
                    }
                    .insight-card:hover {
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    }
                    .insight-card.highlight {
                        background: #27272a;
                        border-color: #27272a;
                        color: #fff;
                    }
                    .insight-category {
                        font-size: 0.75rem;
                        font-weight: 600;
                        color: #52525b;
                    }
                    .insight-card h3 {
                        margin-top: 0.75rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .insight-summary {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        color: #52525b;
                    }
                    .insight-date {
                        margin-top: 2rem;
                        font-size: 0.75rem;
                        color: #71717a;
                    }
                    .insight-card.highlight .insight-category,
                    .insight-card.highlight .insight-summary {
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .insight-card.highlight .insight-date {
                        color: rgba(255, 255, 255, 0.5);
                    }
                    .insight-arrows {
                        position: absolute;
                        right: 2.5rem;
                        top: 50%;
                        transform: translateY(-50%);
                    }
                    .insight-arrows button {
                        display: block;
                        margin-bottom: 0.5rem;
                        padding: 0.75rem;
                        border: none;
                        border-radius: 9999px;
                        background: #f3f4f6;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        cursor: pointer;
                    }
                    .insight-arrows button:hover {
                        background: #e5e7eb;
                    }
                    @media (max-width: 1024px) {
                        .insight-grid { grid-template-columns: repeat(2, 1fr); }
                        .insight-arrows { display: none; }
                    }
                    @media (max-width: 768px) {
                        .insights { padding: 5rem 1rem; }
                        .insight-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="insights-inner">
                <h2>{"INSIGHTS"}</h2>
                <div class="insight-grid">
                    {
                        items.iter().map(|item| {
                            html! {
                                <article key={item.title} class={classes!("insight-card", item.highlight.then(|| "highlight"))}>
                                    <span class="insight-category">{item.category}</span>
                                    <h3>{item.title}</h3>
                                    <p class="insight-summary">{item.excerpt()}</p>
                                    <p class="insight-date">{item.date}</p>
                                </article>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <div class="insight-arrows">
                <button aria-label="Scroll Up" onclick={move_up}>{"▲"}</button>
                <button aria-label="Scroll Down" onclick={move_down}>{"▼"}</button>
            </div>
        </section>
    }
}
