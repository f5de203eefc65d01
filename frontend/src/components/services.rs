use yew::prelude::*;

use crate::animation::{use_scroll_trigger, TriggerOptions};
use crate::data::services::{Service, SERVICES};

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: &'static Service,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let node = use_node_ref();
    let active = use_state_eq(|| false);
    let on_toggle = {
        let active = active.clone();
        Callback::from(move |is_active: bool| {
            if is_active {
                active.set(true);
            }
        })
    };
    use_scroll_trigger(
        node.clone(),
        TriggerOptions {
            toggle_class: Some(AttrValue::Static("in-view")),
            once: true,
            ..TriggerOptions::default()
        },
        Some(on_toggle),
    );

    let service = props.service;
    html! {
        <div ref={node} class={classes!("service-card", (*active).then_some("revealed"))}>
            <div class="service-icon">{service.icon}</div>
            <h3 class="service-title">{service.title}</h3>
            <p class="service-description">{service.description}</p>
            <ul class="service-features">
                { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="servicios" class="services">
            <h2 class="section-title gradient-text">{"Nuestros Servicios"}</h2>
            <p class="section-subtitle">{"Soluciones tecnológicas integrales para hacer crecer tu negocio"}</p>
            <div class="services-grid">
                { for SERVICES.iter().map(|service| html! { <ServiceCard key={service.title} {service} /> }) }
            </div>
        </section>
    }
}
