use log::error;
use stylist::yew::styled_component;
use yew::prelude::*;

/// Reports a fault from inside a [`SectionBoundary`].
#[derive(Clone, PartialEq)]
pub struct SectionFault(Callback<String>);

impl SectionFault {
    pub fn report(&self, reason: impl Into<String>) {
        self.0.emit(reason.into());
    }
}

/// Fault reporter of the nearest enclosing boundary. Outside a boundary
/// faults are only logged.
#[hook]
pub fn use_section_fault() -> SectionFault {
    use_context::<SectionFault>().unwrap_or_else(|| {
        SectionFault(Callback::from(|reason: String| {
            error!("Section fault outside a boundary: {}", reason)
        }))
    })
}

#[derive(Properties, PartialEq)]
pub struct SectionBoundaryProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Swaps its section for a reload prompt once anything inside reports a
/// fault. Sibling sections are unaffected.
#[function_component(SectionBoundary)]
pub fn section_boundary(props: &SectionBoundaryProps) -> Html {
    let fault = use_state(|| None::<String>);

    let reporter = {
        let fault = fault.clone();
        let name = props.name.clone();
        use_memo(
            move |_| {
                SectionFault(Callback::from(move |reason: String| {
                    error!("Section '{}' failed: {}", name, reason);
                    fault.set(Some(reason));
                }))
            },
            props.name.clone(),
        )
    };

    if fault.is_some() {
        return html! { <SectionFallback /> };
    }

    html! {
        <ContextProvider<SectionFault> context={(*reporter).clone()}>
            { for props.children.iter() }
        </ContextProvider<SectionFault>>
    }
}

#[styled_component(SectionFallback)]
fn section_fallback() -> Html {
    let reload = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().reload() {
                error!("Could not reload the page: {:?}", err);
            }
        }
    });

    html! {
        <div class={css!(r#"
            padding: 2rem;
            margin: 2rem auto;
            max-width: 600px;
            text-align: center;
            color: var(--text-color, #E6E6E6);
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 12px;

            button {
                margin-top: 1rem;
                padding: 0.75rem 1.5rem;
                border: none;
                border-radius: 8px;
                background: var(--primary-cyan, #66d3fa);
                color: #0A0A0A;
                cursor: pointer;
            }
        "#)}>
            <h2>{"Algo salió mal"}</h2>
            <p>{"Ha ocurrido un error inesperado. Por favor, recarga la página."}</p>
            <button onclick={reload}>{"Recargar página"}</button>
        </div>
    }
}
