use yew::prelude::*;

use crate::components::{
    hero::Hero, project_carousel::ProjectCarousel, services::Services, skills::Skills,
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <Hero />
            <Skills />
            <Services />
            <ProjectCarousel />
        </>
    }
}
