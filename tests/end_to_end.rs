use ruleform::{validate, FieldCollection, FieldRules, Form, ValidateOptions};

const OPEN: &str = r#"<ul style="text-align: start;">"#;

fn report(items: &[&str]) -> String {
    let mut s = OPEN.to_owned();
    for item in items {
        s.push_str("<li>");
        s.push_str(item);
        s.push_str("</li>");
    }
    s.push_str("</ul>");
    s
}

#[test]
fn underage_fails_greater_than() {
    let rules = FieldRules::builder()
        .field("age", "Age", "required|numeric|greater_than[17]")
        .build();
    let mut form = Form::new().text("age", "15");

    let result = rules.validate(&mut form);
    assert!(!result.is_valid());
    assert_eq!(result.report(), report(&["Age -> must be greater than 17"]));
    assert!(form.is_marked("age", "is-invalid"));
}

#[test]
fn all_valid_gives_empty_container() {
    let rules = FieldRules::builder()
        .field("age", "Age", "required|numeric|greater_than[17]")
        .field("email", "Email", "permit_empty|email")
        .build();
    let mut form = Form::new().text("age", "30").text("email", "");

    let result = rules.validate(&mut form);
    assert!(result.is_valid());
    assert_eq!(result.report(), report(&[]));
    assert!(result.entries().is_empty());
}

#[test]
fn empty_rules_are_valid() {
    let mut form = Form::new().text("a", "");
    let result = FieldRules::default().validate(&mut form);
    assert!(result.is_valid());
    assert_eq!(result.report(), report(&[]));
}

#[test]
fn missing_field_reported_without_evaluation() {
    let rules = FieldRules::builder()
        .field("ghost", "Ghost", "required|shiny")
        .build();
    let mut form = Form::new().text("real", "");

    let result = rules.validate(&mut form);
    assert!(!result.is_valid());
    assert_eq!(result.report(), report(&["ghost doesn't exist."]));
    assert!(form.marked("is-invalid").is_empty());
}

#[test]
fn every_failure_kind_in_one_run() {
    let rules = FieldRules::builder()
        .field("name", "Name", "required")
        .field("zip", "Zip", "required|length[5]")
        .field("city", "City", "required_if[country]")
        .field("color", "Color", "permit_empty|in_list[red,green,blue]")
        .field("nick", "Nick", "optional")
        .field("fax", "Fax", "permit_empty")
        .field("terms", "Terms", "required")
        .build();
    let mut form = Form::new()
        .text("name", "")
        .text("zip", "1234")
        .text("city", "")
        .text("color", "yellow")
        .text("nick", "bob")
        .checkbox("terms", true);

    let result = rules.validate(&mut form);
    assert!(!result.is_valid());
    assert_eq!(
        result.report(),
        report(&[
            "Name -> it's required.",
            "Zip -> length must be exactly 5",
            "City -> country not found.",
            "Color -> must contains red,green,blue",
            "Nick -> First param of the rule must be: required, permit_empty, required_if, required_if_not.",
            "fax doesn't exist.",
        ])
    );
    assert_eq!(form.marked("is-invalid"), vec!["color", "name", "zip"]);
}

#[test]
fn conditional_fields() {
    let rules = FieldRules::builder()
        .field("company", "Company", "permit_empty")
        .field("vat", "VAT", "required_if[company]|min_length[8]")
        .field("phone", "Phone", "required_if_not[email]|numeric")
        .build();

    let mut form = Form::new()
        .text("company", "")
        .text("vat", "")
        .text("email", "x@y.com")
        .text("phone", "");
    // not required, but the trailing predicates still see the empty value
    let result = rules.validate(&mut form);
    assert_eq!(
        result.report(),
        report(&["VAT -> min length must be 8", "Phone -> must be a number"])
    );

    form.set_text("vat", "DE12345678");
    form.set_text("phone", "5550100");
    assert!(rules.validate(&mut form).is_valid());

    form.set_text("vat", "");
    form.set_text("phone", "");

    form.set_text("company", "Acme");
    form.set_text("email", "");
    let result = rules.validate(&mut form);
    assert_eq!(
        result.report(),
        report(&["VAT -> it's required.", "Phone -> it's required."])
    );

    form.set_text("vat", "DE12");
    form.set_text("phone", "555-0100");
    let result = rules.validate(&mut form);
    assert_eq!(
        result.report(),
        report(&["VAT -> min length must be 8", "Phone -> must be a number"])
    );
}

#[test]
fn rerun_after_fix_clears_marker() {
    let rules = FieldRules::builder()
        .field("email", "Email", "required|email")
        .field("age", "Age", "required|numeric")
        .build();
    let mut form = Form::new().text("email", "nope").text("age", "x");

    let first = rules.validate(&mut form);
    assert!(!first.is_valid());
    assert_eq!(form.marked("is-invalid"), vec!["age", "email"]);

    form.set_text("email", "me@example.org");
    let second = rules.validate(&mut form);
    assert_eq!(second.report(), report(&["Age -> must be a number"]));
    assert_eq!(form.marked("is-invalid"), vec!["age"]);

    form.set_text("age", "40");
    let third = rules.validate(&mut form);
    assert!(third.is_valid());
    assert!(form.marked("is-invalid").is_empty());
}

#[test]
fn custom_marker() {
    let rules = FieldRules::builder().field("a", "A", "required").build();
    let mut form = Form::new().text("a", "");
    let options = ValidateOptions::new().with_marker("has-error");

    let result = rules.validate_with(&mut form, &options);
    assert!(!result.is_valid());
    assert!(form.is_marked("a", "has-error"));
    assert!(!form.is_marked("a", "is-invalid"));
}

#[test]
fn empty_marker_turns_marking_off() {
    let rules = FieldRules::builder().field("a", "A", "required").build();
    let mut form = Form::new().text("a", "").text("b", "");
    form.mark_invalid("b", "is-invalid");

    let result = validate(&mut form, &rules, &ValidateOptions::new().with_marker(""));
    assert!(!result.is_valid());
    assert_eq!(result.report(), report(&["A -> it's required."]));
    // nothing cleared, nothing added
    assert_eq!(form.marked("is-invalid"), vec!["b"]);
}

#[test]
fn checkbox_rules() {
    let rules = FieldRules::builder()
        .field("terms", "Terms", "required")
        .field("spam", "Newsletter", "permit_empty|unchecked")
        .field("optout", "Opt out", "required|unchecked")
        .build();
    let mut form = Form::new()
        .checkbox("terms", false)
        .checkbox("spam", true)
        .checkbox("optout", true);

    let result = rules.validate(&mut form);
    assert_eq!(
        result.report(),
        report(&[
            "Terms -> it's required.",
            "Newsletter -> must be unchecked",
            "Opt out -> must be unchecked",
        ])
    );
}

#[test]
fn entries_expose_structure() {
    let rules = FieldRules::builder()
        .field("age", "Age", "required|numeric")
        .field("gone", "Gone", "required")
        .build();
    let mut form = Form::new().text("age", "x");

    let result = rules.validate(&mut form);
    let entries = result.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].field_id(), "age");
    assert_eq!(entries[0].label(), Some("Age"));
    assert_eq!(entries[0].failure().to_string(), "must be a number");
    assert_eq!(entries[1].field_id(), "gone");
    assert_eq!(entries[1].to_string(), "gone doesn't exist.");
}
