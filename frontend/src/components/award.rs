use yew::prelude::*;

use crate::content::{placeholder_image, ACCENT_RED};

#[function_component(Award)]
pub fn award() -> Html {
    let background = placeholder_image(1920, 1080, "ff9900", "ffffff", "ROAD WITH SUNSET");
    let badge = placeholder_image(500, 300, "4a4e69", "ffffff", "Award Badge Image");
    let accent_fill = format!("background-color: {};", ACCENT_RED);

    // shares .feature-* and .pager rules with the Lexology section
    html! {
        <section class="fp-section award" style={format!("background-image: url({});", background)}>
            <style>
                {r#"
                    .award {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 0 2.5rem;
                        background-size: cover;
                        background-position: center;
                        color: #27272a;
                    }
                    .award-overlay {
                        position: absolute;
                        inset: 0;
                        background: #000;
                        opacity: 0.3;
                    }
                    .award .feature-card {
                        position: relative;
                        background: rgba(255, 255, 255, 0.9);
                    }
                    .award-badge {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                        background: rgba(0, 0, 0, 0.1);
                    }
                    .award-badge div {
                        padding: 1.5rem;
                        border-radius: 9999px;
                        background: #fff;
                        text-align: center;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .award-badge small {
                        display: block;
                        font-size: 0.75rem;
                        font-weight: 600;
                        color: #52525b;
                    }
                    .award-badge strong {
                        display: block;
                        margin-top: 0.25rem;
                        font-size: 1.25rem;
                    }
                    @media (max-width: 1024px) {
                        .award .feature-media { order: 2; }
                    }
                "#}
            </style>
            <div class="award-overlay"></div>
            <div class="feature-card">
                <div class="feature-row">
                    <div class="feature-media">
                        <img src={badge} alt="Award badge placeholder" />
                        <div class="award-badge">
                            <div>
                                <small>{"WINNER"}</small>
                                <strong>{"ASIA-PACIFIC & GREATER CHINA REGION AWARDS 2025"}</strong>
                            </div>
                        </div>
                    </div>
                    <div class="feature-text">
                        <div class="accent-bar" style={accent_fill.clone()}></div>
                        <h3>{"'South Korea National Law Firm of the Year' 수상"}</h3>
                        <p>
                            {"박·최 법률사무소가 Chambers Asia-Pacific & Greater China Region Awards 2025에서 'South Korea National Law Firm of the Year' (올해의 한국 로펌 상)을 수상하였습니다. 2010년 첫 시상식을 시작한 이래로, 저희 사무소는 누적 10회 수상 기록을 세우며 역량을 인정받고 있습니다."}
                        </p>
                        <button class="view-more">{"VIEW MORE"}</button>
                        <div class="pager">
                            <span style={accent_fill}></span>
                            <span></span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
