use playground::form::FormState;
use playground::schema::FieldError;
use playground::{derive_invoice_text, url_state, Field, FormatConfig, InvoiceInputs};

fn type_in(form: &mut FormState, field: Field, text: &str) -> String {
    form.set_field(field, text);
    derive_invoice_text(&form.draft(), &FormatConfig::default())
}

#[test]
fn typing_scenario_a_produces_the_invoice_text() {
    let mut form = FormState::new(None);
    assert_eq!(type_in(&mut form, Field::UsdPriceInBrl, "5.40"), "");
    assert_eq!(type_in(&mut form, Field::UsdPerHour, "45"), "");
    let text = type_in(&mut form, Field::BrlTotalValue, "20000");

    assert!(text.contains("82hrs"));
    assert!(text.contains("US$\u{a0}45,00 a hora"));
    assert!(text.contains("US$\u{a0}3.703,00"));
    assert!(text.contains("Cotação do dia: R$\u{a0}5,40"));
    assert!(text.contains("Valor em moeda nacional: R$\u{a0}20.000,00"));
    assert!(text.ends_with("Invoice nº XXXXXXXX"));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn clearing_the_exchange_rate_empties_the_output() {
    let mut form = FormState::new(None);
    type_in(&mut form, Field::UsdPerHour, "45");
    type_in(&mut form, Field::BrlTotalValue, "20000");
    assert_eq!(type_in(&mut form, Field::UsdPriceInBrl, "0"), "");
    assert_eq!(form.error(Field::UsdPriceInBrl), Some(FieldError::NotPositive));
    assert_eq!(type_in(&mut form, Field::UsdPriceInBrl, ""), "");
    assert_eq!(form.error(Field::UsdPriceInBrl), Some(FieldError::Required));
    assert_ne!(type_in(&mut form, Field::UsdPriceInBrl, "5"), "");
}

#[test]
fn url_state_restores_a_shared_calculation() {
    let mut form = FormState::new(None);
    type_in(&mut form, Field::UsdPerHour, "45");
    type_in(&mut form, Field::UsdPriceInBrl, "5.40");
    let shared_text = type_in(&mut form, Field::BrlTotalValue, "20000");
    let encoded = url_state::encode(&form.draft()).unwrap();

    let restored = FormState::new(url_state::decode(Some(encoded.as_str())).as_ref());
    assert_eq!(restored.draft(), form.draft());
    assert_eq!(
        derive_invoice_text(&restored.draft(), &FormatConfig::default()),
        shared_text
    );
}

#[test]
fn broken_url_state_loads_an_empty_form() {
    for raw in ["%7B", r#"{"usdPerHour":45}"#, "null"] {
        let form = FormState::new(url_state::decode(Some(raw)).as_ref());
        for field in Field::ALL {
            assert_eq!(form.text(field), "");
            assert_eq!(form.error(field), None);
        }
    }
}

#[test]
fn partially_filled_form_serializes_all_keys() {
    let mut form = FormState::new(None);
    type_in(&mut form, Field::BrlTotalValue, "1500.5");
    let value: serde_json::Value = serde_json::from_str(&url_state::encode(&form.draft()).unwrap()).unwrap();
    assert_eq!(value["usdPerHour"], 0);
    assert_eq!(value["usdPriceInBrl"], 0);
    assert_eq!(value["brlTotalValue"], 1500.5);

    let inputs = InvoiceInputs {
        usd_per_hour: 1.0,
        usd_price_in_brl: 1.0,
        brl_total_value: 1500.5,
    };
    assert!(url_state::decode(Some(url_state::encode(&inputs.into()).unwrap().as_str())).is_some());
}
