use yew::prelude::*;

use crate::animation::{use_scroll_activity, Entrance, InViewOptions, Reveal};
use crate::components::{
    blog::Blog, contact_form::Contact, footer::Footer, hero::Hero, portfolio::Portfolio,
    section_boundary::SectionBoundary, services::Services, skills::Skills, team::Team,
};
use crate::config;

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_activity(config::timing().scroll_idle_ms);

    html! {
        <main class="home">
            <SectionBoundary name="hero">
                <Hero />
            </SectionBoundary>
            <SectionBoundary name="services">
                <Reveal>
                    <Services />
                </Reveal>
            </SectionBoundary>
            <SectionBoundary name="portfolio">
                <Reveal options={InViewOptions::with_margin("-150px")}>
                    <Portfolio />
                </Reveal>
            </SectionBoundary>
            <SectionBoundary name="skills">
                <Reveal>
                    <Skills />
                </Reveal>
            </SectionBoundary>
            <SectionBoundary name="team">
                <Reveal entrance={Entrance::FadeScale { from: 0.98 }}>
                    <Team />
                </Reveal>
            </SectionBoundary>
            <SectionBoundary name="blog">
                <Reveal>
                    <Blog />
                </Reveal>
            </SectionBoundary>
            <SectionBoundary name="contact">
                <Reveal>
                    <Contact />
                </Reveal>
            </SectionBoundary>
            <SectionBoundary name="footer">
                <Reveal entrance={Entrance::Fade}>
                    <Footer />
                </Reveal>
            </SectionBoundary>
        </main>
    }
}
