use anyhow::Result;

use crate::{Product, ProductRow};

fn widget() -> Product {
    Product { id: "p1".into(), name: "Widget".into(), price: 9.99, quantity: 3, description: None }
}

#[test]
fn absent_description_is_omitted_from_json() -> Result<()> {
    let json = serde_json::to_value(widget())?;
    assert_eq!(json, serde_json::json!({ "id": "p1", "name": "Widget", "price": 9.99, "quantity": 3 }));
    Ok(())
}

#[test]
fn present_description_is_serialized() -> Result<()> {
    let mut p = widget();
    p.description = Some("small".into());
    let json = serde_json::to_value(&p)?;
    assert_eq!(json["description"], "small");
    Ok(())
}

#[test]
fn missing_description_deserializes_as_none() -> Result<()> {
    let p: Product = serde_json::from_str(r#"{"id":"abc1234","name":"Mug","price":4,"quantity":10}"#)?;
    assert_eq!(p.description, None);
    assert_eq!(p.price, 4.0);
    Ok(())
}

#[test]
fn integral_float_quantity_deserializes() -> Result<()> {
    let p: Product = serde_json::from_str(r#"{"id":"a","name":"Mug","price":4,"quantity":10.0}"#)?;
    assert_eq!(p.quantity, 10);
    Ok(())
}

#[test]
fn fractional_or_negative_quantity_is_rejected() {
    for bad in ["2.5", "-1", "-1.0", "\"3\""] {
        let json = format!(r#"{{"id":"a","name":"Mug","price":4,"quantity":{bad}}}"#);
        assert!(serde_json::from_str::<Product>(&json).is_err(), "{bad} should not parse");
    }
}

#[test]
fn to_draft_prefills_form_fields() {
    let draft = widget().to_draft();
    assert_eq!(draft.name, "Widget");
    assert_eq!(draft.price, "9.99");
    assert_eq!(draft.quantity, "3");
    assert_eq!(draft.description, "");

    let mut whole = widget();
    whole.price = 4.0;
    assert_eq!(whole.to_draft().price, "4");
}

#[test]
fn to_draft_round_trips_through_validation() {
    let mut p = widget();
    p.description = Some("ceramic".into());
    let valid = p.to_draft().validate().unwrap();
    assert_eq!(valid.price, p.price);
    assert_eq!(valid.quantity, p.quantity);
    assert_eq!(valid.description, p.description);
}

#[test]
fn row_formats_price_and_placeholder_description() {
    let row = ProductRow::from(&widget());
    assert_eq!(row.price, "9.99");
    assert_eq!(row.quantity, "3");
    assert_eq!(row.description, "-");

    let mut p = widget();
    p.price = 4.0;
    p.description = Some("small".into());
    let row = ProductRow::from(&p);
    assert_eq!(row.price, "4.00");
    assert_eq!(row.description, "small");
}

#[test]
fn matching_covers_name_and_description() {
    let mut p = widget();
    p.description = Some("Ceramic".into());
    assert!(p.matches_lowercase("widg"));
    assert!(p.matches_lowercase("ceram"));
    assert!(!p.matches_lowercase("glass"));
}
