use ruleform::{validate_json, Form, ValidateOptions};

fn main() {
    tracing_subscriber::fmt().init();

    let rules = r#"{
        "zip":   {"label": "Zip code", "rules": "required|length[5]|numeric"},
        "phone": {"label": "Phone", "rules": "required_if_not[email]|numeric"},
        "email": {"label": "Email", "rules": "permit_empty|email"},
        "dob":   {"label": "Date of birth", "rules": "required|date"}
    }"#;

    let mut form = Form::new()
        .text("zip", "9021")
        .text("phone", "")
        .text("email", "")
        .text("dob", "1990-02-30");

    let result = validate_json(&mut form, rules, &ValidateOptions::default());
    println!("{result}");
    println!("{}", result.report());

    let result = validate_json(&mut form, "[\"required\"]", &ValidateOptions::default());
    println!("{}", result.report());
}
