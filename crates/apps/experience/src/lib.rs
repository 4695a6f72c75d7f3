//! Experience content panel.

use leptos::*;

#[component]
pub fn ExperienceApp() -> impl IntoView {
    view! {
        <div class="app-panel experience-app">
            <h2 class="app-heading">"Experience"</h2>
            <ul class="experience-list">
                <li>
                    <b>"Incoming Full Stack Developer, Air Canada (Toronto)"</b>
                    <br />
                    "Starting July 2024"
                </li>
                <li>
                    <b>
                        "Machine Learning Assistant, University of Alberta (with Prof. Rupam \
                         Mahmoud)"
                    </b>
                    <br />
                    "Published research on Real-Time Reinforcement Learning (RTRL). Built eLSTM \
                     and RTU models, applied Actor-Critic methods to POMDPs, and developed \
                     scalable RL systems for real-time and batch learning."
                </li>
                <li>
                    <b>"Full Stack Developer Intern, Questrade (Toronto)"</b>
                    <br />
                    "Built and maintained insurance microservices (C#, Node.js, AWS ECS). \
                     Enhanced policy flows, improved reliability, and refactored CI/CD pipelines. \
                     Collaborated with cross-functional teams in Agile sprints."
                </li>
                <li>
                    <b>"Product Owner & Backend Developer, Social Distribution (UAlberta)"</b>
                    <br />
                    "Led a team of 6 to deliver a distributed social platform. Designed RESTful \
                     APIs, integrated privacy/auth, and managed Agile workflow."
                </li>
                <li>
                    <b>"Personal Projects"</b>
                    <ul class="experience-sublist">
                        <li>
                            <b>"PalCrush"</b>
                            ": Social app (Next.js/React/TS), 300+ users on launch, Top 50 \
                             Product Hunt"
                        </li>
                        <li>
                            <b>"LeetCode"</b>
                            ": Solved 730+ problems (contest rating: 1600, "
                            <a
                                href="https://leetcode.com/u/VariableViking/"
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "profile"
                            </a>
                            ")"
                        </li>
                        <li>"Built low-level C systems: UNIX shell, file system, MapReduce engine"</li>
                    </ul>
                </li>
            </ul>
        </div>
    }
}
