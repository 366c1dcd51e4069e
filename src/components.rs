//! Yew view components for the playground UI.
//!
//! Apart from [`CopyButton`], which owns its transient "copied" state, these
//! components render purely from props.

use playground::config::{BRAND, COPIED_RESET_MS, NAV_LINKS};
use playground::schema::FieldError;
use playground::Field;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_copy_feedback, FieldEdit};

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <div class="container header-row">
                <strong class="brand">{ BRAND }</strong>
                <menu class="nav">
                    { NAV_LINKS.iter().map(|(label, href)| html! {
                        <li key={*href}><a href={*href}>{ *label }</a></li>
                    }).collect::<Html>() }
                </menu>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldInputProps {
    pub field: Field,
    pub text: AttrValue,
    pub error: Option<FieldError>,
    pub on_input: Callback<FieldEdit>,
}

/// Labelled text input with its validation message underneath.
#[function_component(FieldInput)]
pub fn field_input(props: &FieldInputProps) -> Html {
    let field = props.field;
    let oninput = props.on_input.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        FieldEdit {
            field,
            text: input.value(),
        }
    });

    html! {
        <div class="form-group">
            <label for={field.key()}>{ field.label() }</label>
            <input
                type="text"
                inputmode="decimal"
                id={field.key()}
                value={props.text.clone()}
                class={if props.error.is_some() { "invalid" } else { "" }}
                placeholder={field.placeholder()}
                {oninput}
            />
            if let Some(err) = props.error {
                <div class="input-error">{ err.to_string() }</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub value: AttrValue,
}

/// Copies `value` and shows a check mark for a couple of seconds.
#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let (copied, on_copy) = use_copy_feedback(COPIED_RESET_MS);
    let onclick = on_copy.reform({
        let value = props.value.clone();
        move |_: MouseEvent| value.clone()
    });

    html! {
        <button type="button" class={classes!("copy-button", copied.then_some("copied"))} {onclick}>
            <span class="sr-only">{ "Copy text" }</span>
            { if copied { "\u{2713}" } else { "\u{29c9}" } }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct InvoiceOutputProps {
    pub content: AttrValue,
}

/// Monospace block with the invoice text. Empty while the form is incomplete.
#[function_component(InvoiceOutput)]
pub fn invoice_output(props: &InvoiceOutputProps) -> Html {
    html! {
        <div class="output">
            <pre class="invoice-text">{ props.content.clone() }</pre>
            <CopyButton value={props.content.clone()} />
        </div>
    }
}
