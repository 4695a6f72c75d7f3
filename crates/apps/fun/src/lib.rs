//! "Fun Bits" media galleries: a cycling photo story and a long-form basketball
//! journey. Opening either gallery asks the runtime for a roomier window.

use desktop_app_contract::AppHost;
use leptos::*;

/// Window size the galleries are laid out for.
const GALLERY_MIN_WIDTH: i32 = 700;
const GALLERY_MIN_HEIGHT: i32 = 550;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GalleryChoice {
    Menu,
    Cycling,
    Basketball,
}

#[component]
pub fn FunApp(host: AppHost, mobile: bool) -> impl IntoView {
    let choice = create_rw_signal(GalleryChoice::Menu);

    let open_gallery = move |gallery: GalleryChoice| {
        choice.set(gallery);
        host.request_minimum_size(GALLERY_MIN_WIDTH, GALLERY_MIN_HEIGHT);
    };
    let back = move |_: ev::MouseEvent| choice.set(GalleryChoice::Menu);

    view! {
        <div class="app-panel fun-app">
            <h2 class="app-heading">"The Fun Bits"</h2>
            {move || match choice.get() {
                GalleryChoice::Menu => view! {
                    <div class="fun-chooser">
                        <span>"Which journey would you like to see?"</span>
                        <div class="fun-chooser-buttons">
                            <button
                                class="retro-button"
                                on:click=move |_| open_gallery(GalleryChoice::Basketball)
                            >
                                "Basketball Journey"
                            </button>
                            <button
                                class="retro-button"
                                on:click=move |_| open_gallery(GalleryChoice::Cycling)
                            >
                                "A Cycling Tale"
                            </button>
                        </div>
                    </div>
                }
                    .into_view(),
                GalleryChoice::Cycling => view! {
                    <div class="fun-gallery">
                        <button class="retro-button fun-back" on:click=back>
                            "< Back"
                        </button>
                        <div class="fun-panel-grid">
                            <GalleryPanel
                                image="/cycling/IMG_2314.png"
                                alt="Trek Bike"
                                title="My Trek XCaliber 8 Bike"
                                caption="Bought in Toronto during my Questrade internship. Has to \
                                         be one of the most expensive purchases of my life"
                            />
                            <GalleryPanel
                                image="/cycling/big_idea.png"
                                alt="Planning Ride"
                                title="The Big Idea"
                                caption="One random weekend I decided: let's ride from Oakville \
                                         to Niagara Falls!"
                            />
                            <GalleryPanel
                                image="/cycling/tough.png"
                                alt="On the Road"
                                title="100km Adventure"
                                caption="Oakville to Niagara. It was tough but I never gave up."
                            />
                            <GalleryPanel
                                image="/cycling/niagra.png"
                                alt="Arriving at Niagara"
                                title="Made it!"
                                caption="Finally reached Niagara Falls. Unbeatable feeling!"
                            />
                            <GalleryPanel
                                image="/cycling/view.png"
                                alt="Niagara View"
                                title="The View"
                                caption="Niagara in all its glory. It was worth every pedal stroke."
                            />
                            <div class="fun-panel">
                                <GalleryVideo source="/cycling/trip-browser-noaudio.mp4" />
                                <div class="fun-panel-title">"Proof of the Ride"</div>
                                <div class="fun-panel-caption">
                                    "A little video from the journey. Memories for life!"
                                </div>
                            </div>
                        </div>
                        <div class="fun-moral">
                            <b>"What I learned:"</b>
                            " Some of the best things start with a random idea and quick planning. \
                             Just keep going. You'll be really surprised to know how far you can \
                             actually get!"
                        </div>
                    </div>
                }
                    .into_view(),
                GalleryChoice::Basketball => view! {
                    <div class="fun-gallery">
                        <button class="retro-button fun-back" on:click=back>
                            "< Back"
                        </button>
                        <div
                            class="fun-story"
                            style=if mobile { "max-width:80vw;" } else { "max-width:600px;" }
                        >
                            <div class="fun-story-title">"My Basketball Journey"</div>
                            <p>
                                "I was born and brought up in Dehradun (a city in North India). I \
                                 was fortunate enough to have a basketball hoop at my house, which \
                                 is rare in India unlike in Western countries. Even more special, \
                                 I was coached by Mr. Vinod Vachani. He had worked with NBA \
                                 coaches from teams like the Warriors and the Mavericks back in \
                                 the 90s. Later, he returned to India to coach, and I happened to \
                                 cross paths with him."
                            </p>
                            <div class="fun-story-figure">
                                <img src="/basketball/intro2.PNG" alt="Basketball Intro" />
                                <div class="fun-panel-title">"Where it all started"</div>
                            </div>
                            <p>
                                "I took an interest in basketball in 9th grade and I became \
                                 extremely ambitious about playing. My goal was to make it to the \
                                 NBA and nobody could tell me otherwise. For six months, I played \
                                 basketball every single day, no days off. I was driven by the \
                                 Mamba mentality, the idea of becoming the best version of \
                                 yourself. I was determined."
                            </p>
                            <GalleryVideo source="/basketball/play.mp4" />
                            <p>
                                "I used to worship Kyrie Irving. He was my idol. All I wanted was \
                                 to have crazy handles like him. Every day after school, I'd go \
                                 straight to YouTube and watch his high school and college \
                                 highlights. I couldn't believe how easily he got past defenders \
                                 and scored against guys way taller than him. It blew my mind. I \
                                 just kept thinking, I want to move like that."
                            </p>
                            <div class="fun-story-row">
                                <img src="/basketball/kyrie.jpg" alt="Kyrie Irving" />
                                <img src="/basketball/intro_.PNG" alt="Practicing handles" />
                            </div>
                            <p>
                                "So I got to work. Every day after school I would practice for \
                                 hours trying to get quicker and sharper with the ball. At first \
                                 I kept fumbling. I'd mess up basic moves, get annoyed, sometimes \
                                 even angry, but I kept going. It became a habit. I got used to \
                                 failing. And slowly, things started to change. In a few months I \
                                 could do in-and-outs and crossovers at real speed. I could \
                                 actually get past people just like Kyrie. That moment hit hard. \
                                 I was happy. I even cried a little. That's when I really \
                                 understood that getting good at something takes time, and a lot \
                                 of patience."
                            </p>
                            <GalleryVideo source="/basketball/hard_.mp4" />
                            <p>
                                "Basketball was and still is my escape. Whenever things got \
                                 stressful in undergrad, whether it was coursework or job \
                                 hunting, I'd hit the court. It never let me down. The game \
                                 taught me resilience. It showed me that if you stick with \
                                 something and keep putting in the work, you'll get better. \
                                 Simple as that."
                            </p>
                            <p>
                                "I saw myself getting better every day, beating the pros and \
                                 honing my craft. I realized we should all chase excellence \
                                 instead of obsessing over the end result and always focus on the \
                                 process. Although I couldn't make it to the NBA, the results \
                                 I've seen and the person I've become are incredible. I'm proud \
                                 of myself for even picking up the ball to play. I will always \
                                 cherish this game!"
                            </p>
                            <GalleryVideo source="/basketball/shoot.mp4" />
                            <div class="fun-instagram">
                                <b>"Follow my basketball journey on Instagram: "</b>
                                <a
                                    href="https://www.instagram.com/viraj_ballin/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "@viraj_ballin"
                                </a>
                            </div>
                        </div>
                    </div>
                }
                    .into_view(),
            }}
        </div>
    }
}

#[component]
fn GalleryPanel(
    image: &'static str,
    alt: &'static str,
    title: &'static str,
    caption: &'static str,
) -> impl IntoView {
    view! {
        <div class="fun-panel">
            <img src=image alt=alt />
            <div class="fun-panel-title">{title}</div>
            <div class="fun-panel-caption">{caption}</div>
        </div>
    }
}

#[component]
fn GalleryVideo(source: &'static str) -> impl IntoView {
    view! {
        <div class="fun-video">
            <video
                src=source
                controls=true
                autoplay=true
                loop=true
                muted=true
                playsinline=true
            >
                "Your browser does not support the video tag."
            </video>
        </div>
    }
}
