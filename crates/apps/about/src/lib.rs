//! About Me content panel.

use leptos::*;

#[component]
pub fn AboutApp() -> impl IntoView {
    view! {
        <div class="app-panel about-app">
            <h1 class="app-heading">"About Me"</h1>
            <div class="about-columns">
                <div class="about-text">
                    <p>
                        "I'm a passionate developer and machine learning enthusiast. I will be \
                         joining Air Canada as a Full Stack Developer in Toronto starting July 2024."
                    </p>
                    <p>
                        "I worked as a Machine Learning Assistant under Professor Rupam Mahmoud at \
                         the University of Alberta, where I published research on Real-Time \
                         Reinforcement Learning (RTRL). My work includes building eLSTM and RTU \
                         models, applying Actor-Critic methods to POMDPs, and developing scalable \
                         RL systems."
                    </p>
                    <p>
                        "Previously, I interned at Questrade in Toronto as a Full Stack Developer, \
                         building insurance microservices. I have a strong foundation in systems \
                         programming, having built low-level C projects like a UNIX shell, file \
                         system, and MapReduce engine."
                    </p>
                    <p>
                        "I love solving challenging problems - I've tackled 730+ LeetCode questions \
                         (contest rating: 1600, "
                        <a
                            href="https://leetcode.com/u/VariableViking/"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "profile"
                        </a>
                        ") - and enjoy building products that make an impact. My social app \
                         PalCrush (Next.js/React/TS) reached 300+ users on launch day and was a \
                         Top 50 Product Hunt project. As a Product Owner, I led a team of six to \
                         deliver a distributed social platform."
                    </p>
                    <p>
                        "I thrive at the intersection of software engineering, machine learning, \
                         and creative product development."
                    </p>
                </div>
                <img
                    src="/potrait.png"
                    alt="portrait"
                    width="188"
                    height="256"
                    class="about-portrait"
                />
            </div>
        </div>
    }
}
