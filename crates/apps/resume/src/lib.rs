//! Résumé viewer: pick one of two PDFs, then view it inline (desktop) or via a
//! new-tab link (mobile, where inline PDF rendering is unreliable).

use leptos::*;

const MLE_RESUME_PDF: &str = "/VirajMurabMLE.pdf";
const FULLSTACK_RESUME_PDF: &str = "/VirajMurabL.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResumeChoice {
    Menu,
    MachineLearning,
    FullStack,
}

impl ResumeChoice {
    fn pdf_path(self) -> Option<&'static str> {
        match self {
            Self::Menu => None,
            Self::MachineLearning => Some(MLE_RESUME_PDF),
            Self::FullStack => Some(FULLSTACK_RESUME_PDF),
        }
    }
}

#[component]
pub fn ResumeApp(mobile: bool) -> impl IntoView {
    let choice = create_rw_signal(ResumeChoice::Menu);

    view! {
        <div class="app-panel resume-app">
            <h2 class="app-heading">"Résumé"</h2>
            <Show
                when=move || choice.get() == ResumeChoice::Menu
                fallback=move || {
                    let src = choice
                        .get()
                        .pdf_path()
                        .unwrap_or(MLE_RESUME_PDF)
                        .to_string();
                    view! {
                        <div class="resume-viewer">
                            <button
                                class="retro-button resume-back"
                                on:click=move |_| choice.set(ResumeChoice::Menu)
                            >
                                "< Back"
                            </button>
                            {if mobile {
                                view! {
                                    <div class="resume-mobile-fallback">
                                        "PDF viewing is not supported on mobile browsers."
                                        <br />
                                        <a
                                            class="resume-open-link"
                                            href=src.clone()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            "Open Resume in New Tab"
                                        </a>
                                    </div>
                                }
                                    .into_view()
                            } else {
                                view! {
                                    <iframe
                                        class="resume-frame"
                                        src=src.clone()
                                        title="Resume PDF"
                                        width="100%"
                                        height="100%"
                                    ></iframe>
                                }
                                    .into_view()
                            }}
                        </div>
                    }
                }
            >
                <div class="resume-chooser">
                    <span>"Which resume would you like to view?"</span>
                    <div class="resume-chooser-buttons">
                        <button
                            class="retro-button"
                            on:click=move |_| choice.set(ResumeChoice::MachineLearning)
                        >
                            "MLE Resume"
                        </button>
                        <button
                            class="retro-button"
                            on:click=move |_| choice.set(ResumeChoice::FullStack)
                        >
                            "FullStack Resume"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
