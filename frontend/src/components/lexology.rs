use yew::prelude::*;

use crate::content::{placeholder_image, ACCENT_RED};

#[function_component(Lexology)]
pub fn lexology() -> Html {
    let mountain = placeholder_image(800, 600, "3c4043", "ffffff", "SNOWY MOUNTAIN");
    let accent_border = format!("border-color: {};", ACCENT_RED);
    let accent_fill = format!("background-color: {};", ACCENT_RED);

    html! {
        <section class="fp-section lexology">
            <style>
                {r#"
                    .lexology {
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 5rem 2.5rem;
                        background: #f9fafb;
                        color: #27272a;
                    }
                    .feature-card {
                        max-width: 80rem;
                        width: 100%;
                        margin: 0 auto;
                        padding: 3rem;
                        background: #fff;
                        border-radius: 8px;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    }
                    .feature-row {
                        display: flex;
                        gap: 2.5rem;
                        align-items: center;
                    }
                    .feature-media, .feature-text {
                        flex: 1;
                        position: relative;
                    }
                    .feature-media img {
                        width: 100%;
                        height: auto;
                        object-fit: cover;
                        border-radius: 6px;
                    }
                    .feature-tag {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        z-index: 2;
                        padding: 0.25rem 0.5rem;
                        font-size: 0.75rem;
                        letter-spacing: 0.05em;
                        color: #fff;
                        background: #3f3f46;
                    }
                    .feature-caption {
                        position: absolute;
                        bottom: 2rem;
                        left: 2rem;
                        z-index: 2;
                        color: #fff;
                        font-size: 1.875rem;
                        font-weight: 700;
                    }
                    .frame-top, .frame-bottom {
                        position: absolute;
                        width: 100%;
                        height: 100%;
                        pointer-events: none;
                    }
                    .frame-top {
                        top: -1rem;
                        left: -1rem;
                        border-top: 2px solid;
                        border-left: 2px solid;
                    }
                    .frame-bottom {
                        bottom: -1rem;
                        right: -1rem;
                        border-bottom: 2px solid;
                        border-right: 2px solid;
                    }
                    .accent-bar {
                        position: absolute;
                        top: 0;
                        left: 0;
                        height: 4px;
                        width: 5rem;
                    }
                    .feature-text h3 {
                        margin-top: 2.5rem;
                        font-size: 3rem;
                        font-weight: 300;
                        line-height: 1.3;
                    }
                    .feature-text p {
                        margin-top: 1.5rem;
                        max-width: 28rem;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        color: #4b5563;
                    }
                    .view-more {
                        margin-top: 2.5rem;
                        padding: 0.75rem 2rem;
                        border: 1px solid #9ca3af;
                        border-radius: 4px;
                        background: transparent;
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        cursor: pointer;
                    }
                    .view-more:hover {
                        background: #f3f4f6;
                    }
                    .pager {
                        display: flex;
                        gap: 0.75rem;
                        margin-top: 2rem;
                    }
                    .pager.centered {
                        justify-content: center;
                        margin-top: 4rem;
                    }
                    .pager span {
                        height: 4px;
                        width: 2.5rem;
                        border-radius: 9999px;
                        background: #d1d5db;
                    }
                    @media (max-width: 1024px) {
                        .feature-row { flex-direction: column; }
                        .feature-text h3 { font-size: 1.875rem; }
                    }
                "#}
            </style>
            <div class="feature-card">
                <div class="feature-row">
                    <div class="feature-media">
                        <span class="feature-tag">{"Lexology Index: South Korea 2025"}</span>
                        <img src={mountain} alt="Snowy mountains placeholder" />
                        <div class="feature-caption">
                            <p>{"147명, 분야별"}</p>
                            <p>{"'Recommended' 선정"}</p>
                        </div>
                        <div class="frame-top" style={accent_border.clone()}></div>
                        <div class="frame-bottom" style={accent_border}></div>
                    </div>
                    <div class="feature-text">
                        <div class="accent-bar" style={accent_fill.clone()}></div>
                        <h3>{"147명, 분야별 'Recommended' 선정"}</h3>
                        <p>
                            {"박·최 법률사무소 147명의 변호사·변리사·회계사 등이 각 업무 분야별 'Recommended' Individuals로 등재되며 구성원들의 전문성과..."}
                            <br />
                            {"*위 텍스트는 이미지와 동일하게 일부러 잘림 (The text is intentionally cut off to match the image)."}
                        </p>
                        <button class="view-more">{"VIEW MORE"}</button>
                    </div>
                </div>
                <div class="pager centered">
                    <span style={accent_fill}></span>
                    <span></span>
                    <span></span>
                </div>
            </div>
        </section>
    }
}
