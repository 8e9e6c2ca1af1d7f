use yew::prelude::*;

use crate::{
    components::{EnrollForm, FloatingShapes, Reveal, StatCounter},
    dom,
};

struct Card {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const PROGRAMS: &[Card] = &[
    Card {
        icon: "\u{1f423}",
        title: "Toddlers (1-2 years)",
        text: "Gentle routines, sensory play and first words in a safe, loving space.",
    },
    Card {
        icon: "\u{1f3a8}",
        title: "Early Learners (2-3 years)",
        text: "Art, music and movement that build confidence and curiosity.",
    },
    Card {
        icon: "\u{1f4da}",
        title: "Pre-K (3-4 years)",
        text: "Letters, numbers and friendships through hands-on discovery.",
    },
    Card {
        icon: "\u{1f393}",
        title: "Kindergarten Prep (4-6 years)",
        text: "Reading readiness, early math and the independence school asks for.",
    },
];

const WHY_US: &[Card] = &[
    Card {
        icon: "\u{1f469}\u{200d}\u{1f3eb}",
        title: "Qualified Teachers",
        text: "Certified early childhood educators with years of classroom experience.",
    },
    Card {
        icon: "\u{1f6e1}\u{fe0f}",
        title: "Safe Environment",
        text: "Secure entry, child-proofed rooms and trained first aid staff.",
    },
    Card {
        icon: "\u{1f34e}",
        title: "Healthy Meals",
        text: "Fresh, balanced snacks and lunches prepared every day.",
    },
    Card {
        icon: "\u{1f333}",
        title: "Outdoor Play",
        text: "A large garden and playground for daily fresh air and exploring.",
    },
    Card {
        icon: "\u{1f4f1}",
        title: "Parent Updates",
        text: "Daily photos and notes so you never miss a milestone.",
    },
    Card {
        icon: "\u{1f465}",
        title: "Small Classes",
        text: "Low child to teacher ratios for attention that counts.",
    },
];

const TESTIMONIALS: &[(&str, &str)] = &[
    (
        "Our daughter runs to the door every morning. The teachers are wonderful!",
        "Maria K., parent",
    ),
    (
        "We have seen our son grow so much in confidence and language this year.",
        "David L., parent",
    ),
    (
        "Warm, organized and always communicative. We could not ask for more.",
        "Aisha R., parent",
    ),
];

const GALLERY: &[(&str, &str)] = &[
    ("assets/gallery/classroom.jpg", "Classroom"),
    ("assets/gallery/garden.jpg", "Garden"),
    ("assets/gallery/art.jpg", "Art corner"),
    ("assets/gallery/music.jpg", "Music time"),
    ("assets/gallery/reading.jpg", "Reading nook"),
    ("assets/gallery/playground.jpg", "Playground"),
];

pub struct Home;

impl Component for Home {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <main>
                { Self::view_hero() }
                { Self::view_about() }
                { Self::view_cards("programs", "Our Programs", "program-card", PROGRAMS) }
                { Self::view_cards("why-us", "Why Choose Ducklings", "why-card", WHY_US) }
                { Self::view_testimonials() }
                { Self::view_gallery() }
                { Self::view_contact() }
            </main>
        }
    }
}

impl Home {
    fn view_hero() -> Html {
        html! {
            <section id="home" class="hero">
                <FloatingShapes />
                <div class="hero-content">
                    <h1 class="hero-title">{"A Happy Place to Learn & Grow"}</h1>
                    <p class="hero-subtitle">
                        {"Play-based preschool for ages 1 to 6, with caring teachers and a garden full of adventures."}
                    </p>
                    <div class="hero-buttons">
                        <a href="#contact" class="btn btn-primary" onclick={dom::anchor_click("contact")}>
                            {"Enroll Now"}
                        </a>
                        <a href="#programs" class="btn btn-secondary" onclick={dom::anchor_click("programs")}>
                            {"Our Programs"}
                        </a>
                    </div>
                    <div class="hero-stats">
                        <StatCounter value="15+" label="Years of Care" />
                        <StatCounter value="500+" label="Happy Graduates" />
                        <StatCounter value="98%" label="Parent Satisfaction" />
                    </div>
                </div>
            </section>
        }
    }

    fn view_about() -> Html {
        html! {
            <section id="about" class="about">
                <Reveal class="about-image">
                    <img src="assets/about.jpg" alt="Children playing at Ducklings" />
                </Reveal>
                <Reveal class="about-content">
                    <h2 class="section-title">{"About Ducklings"}</h2>
                    <p>
                        {"For over fifteen years Ducklings has been a second home for families in our neighbourhood. \
                          We believe children learn best through play, so every day mixes guided activities with time to explore."}
                    </p>
                </Reveal>
            </section>
        }
    }

    fn view_cards(
        id: &'static str,
        title: &'static str,
        card_class: &'static str,
        cards: &[Card],
    ) -> Html {
        html! {
            <section id={id} class={id}>
                <h2 class="section-title">{title}</h2>
                <div class="card-grid">
                    {
                        for cards.iter().map(|card| html! {
                            <Reveal class={card_class}>
                                <div class="card-icon">{card.icon}</div>
                                <h3>{card.title}</h3>
                                <p>{card.text}</p>
                            </Reveal>
                        })
                    }
                </div>
            </section>
        }
    }

    fn view_testimonials() -> Html {
        html! {
            <section id="testimonials" class="testimonials">
                <h2 class="section-title">{"What Parents Say"}</h2>
                <div class="card-grid">
                    {
                        for TESTIMONIALS.iter().map(|(quote, author)| html! {
                            <Reveal class="testimonial-card">
                                <p class="quote">{*quote}</p>
                                <span class="author">{*author}</span>
                            </Reveal>
                        })
                    }
                </div>
            </section>
        }
    }

    fn view_gallery() -> Html {
        html! {
            <section id="gallery" class="gallery">
                <h2 class="section-title">{"Life at Ducklings"}</h2>
                <div class="gallery-grid">
                    {
                        for GALLERY.iter().map(|(src, alt)| html! {
                            <Reveal class="gallery-item">
                                <img src={*src} alt={*alt} loading="lazy" />
                            </Reveal>
                        })
                    }
                </div>
            </section>
        }
    }

    fn view_contact() -> Html {
        html! {
            <section id="contact" class="contact">
                <Reveal class="contact-info">
                    <h2 class="section-title">{"Come Visit Us"}</h2>
                    <p>{"Leave your details and we will call you to arrange a tour."}</p>
                    <ul>
                        <li>{"12 Pond Lane, Springfield"}</li>
                        <li>{"Mon - Fri, 7:30 - 18:00"}</li>
                        <li>{"hello@ducklingspreschool.com"}</li>
                    </ul>
                </Reveal>
                <Reveal class="contact-form-wrapper">
                    <EnrollForm />
                </Reveal>
            </section>
        }
    }
}
