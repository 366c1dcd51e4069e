use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use playground::config::QUERY_PARAM;
use playground::copy_feedback::CopyFeedback;
use playground::form::FormState;
use playground::{url_state, Field, InvoiceDraft};
use yew::prelude::*;

use crate::utils::{copy_to_clipboard, read_query_param, replace_query_param};

/// A keystroke in one of the form inputs.
pub struct FieldEdit {
    pub field: Field,
    pub text: String,
}

/// Reducer wrapper so edits to different fields never overwrite each other.
#[derive(Clone, PartialEq)]
struct FormModel(FormState);

impl Reducible for FormModel {
    type Action = FieldEdit;

    fn reduce(self: Rc<Self>, edit: FieldEdit) -> Rc<Self> {
        let mut state = self.0.clone();
        state.set_field(edit.field, edit.text);
        Rc::new(Self(state))
    }
}

/// Holds the form snapshot and the callback that feeds it.
#[derive(Clone)]
pub struct InvoiceForm {
    /// Current texts and per-field errors.
    pub state: FormState,
    /// Emitted with the field and its new raw text on every input event.
    pub on_input: Callback<FieldEdit>,
}

/// Form state seeded once from the `values` query parameter.
#[hook]
pub fn use_invoice_form() -> InvoiceForm {
    let model = use_reducer(|| {
        let initial = url_state::decode(read_query_param(QUERY_PARAM).as_deref());
        FormModel(FormState::new(initial.as_ref()))
    });

    let on_input = {
        let model = model.clone();
        Callback::from(move |edit: FieldEdit| model.dispatch(edit))
    };

    InvoiceForm {
        state: model.0.clone(),
        on_input,
    }
}

/// Writes the draft back into the address bar whenever it changes.
#[hook]
pub fn use_url_sync(draft: InvoiceDraft) {
    use_effect_with(draft, |draft| {
        match url_state::encode(draft) {
            Ok(encoded) => {
                if let Err(e) = replace_query_param(QUERY_PARAM, &encoded) {
                    warn!("cannot update URL state: {:?}", e);
                }
            }
            Err(e) => warn!("cannot encode URL state: {}", e),
        }
        || ()
    });
}

/// Copy-button state: a click copies the shown text and raises the
/// indicator, which drops back `reset_ms` later.
///
/// The pending timeout lives in the effect, so it is cancelled when the
/// indicator drops or the component unmounts before it fires.
#[hook]
pub fn use_copy_feedback(reset_ms: u32) -> (bool, Callback<AttrValue>) {
    let feedback = use_state(CopyFeedback::default);

    {
        let setter = feedback.setter();
        use_effect_with(*feedback, move |current| {
            let mut lowered = *current;
            lowered.reset();
            let timeout: Option<Timeout> = current.arm_reset(reset_ms, move || setter.set(lowered));
            move || drop(timeout)
        });
    }

    let on_copy = {
        let feedback = feedback.clone();
        Callback::from(move |displayed: AttrValue| {
            let mut next = *feedback;
            copy_to_clipboard(next.click(&displayed));
            feedback.set(next);
        })
    };

    (feedback.is_copied(), on_copy)
}
