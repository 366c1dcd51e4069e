//! Main module for the Playground application using Yew.
//! Wires the page shell, the invoice helper form and its URL state.

use log::info;
use playground::config::{PAGE_SUBTITLE, PAGE_TITLE};
use playground::{derive_invoice_text, Field, FormatConfig};
use std::rc::Rc;
use yew::prelude::*;

mod components;
mod hooks;
mod utils;

use components::{FieldInput, Header, InvoiceOutput};
use hooks::{use_invoice_form, use_url_sync};

#[derive(Properties, PartialEq)]
struct InvoiceHelperProps {
    config: Rc<FormatConfig>,
}

/// The invoice helper: three inputs, the derived text and a copy button.
#[function_component(InvoiceHelper)]
fn invoice_helper(props: &InvoiceHelperProps) -> Html {
    let form = use_invoice_form();
    let draft = form.state.draft();

    use_url_sync(draft);

    let content = use_memo((draft, props.config.clone()), |(draft, config)| {
        derive_invoice_text(draft, config)
    });

    html! {
        <div>
            <div>
                <h1 class="title">{ PAGE_TITLE }</h1>
                <p class="subtitle">{ PAGE_SUBTITLE }</p>
            </div>

            <div class="form-row">
                { Field::ALL.iter().map(|&field| html! {
                    <FieldInput
                        key={field.key()}
                        {field}
                        text={AttrValue::from(form.state.text(field).to_string())}
                        error={form.state.error(field)}
                        on_input={form.on_input.clone()}
                    />
                }).collect::<Html>() }
            </div>

            <InvoiceOutput content={AttrValue::from((*content).clone())} />
        </div>
    }
}

/// Page shell: header plus the single feature.
#[function_component]
pub fn App() -> Html {
    let config = use_memo((), |_| FormatConfig::default());

    html! {
        <>
            <Header />
            <main class="page">
                <div class="container">
                    <InvoiceHelper {config} />
                </div>
            </main>
        </>
    }
}

/// Entry point: installs logging and the panic hook, then renders the App.
fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();
    info!("starting playground");
    yew::Renderer::<App>::new().render();
}
