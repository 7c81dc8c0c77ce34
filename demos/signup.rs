use ruleform::{FieldRules, Form, ValidateOptions};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let rules = FieldRules::builder()
        .field("username", "Username", "required|min_length[3]|not_in_list[admin,root]")
        .field("email", "Email", "required|email")
        .field("age", "Age", "required|numeric|greater_than[17]")
        .field("company", "Company", "permit_empty|max_length[40]")
        .field("vat", "VAT number", "required_if[company]|length[11]")
        .field("newsletter", "Newsletter", "permit_empty|unchecked")
        .build();

    let mut form = Form::new()
        .text("username", "root")
        .text("email", "not-an-email")
        .text("age", "15")
        .text("company", "Acme")
        .text("vat", "")
        .checkbox("newsletter", true);

    let options = ValidateOptions::new().with_marker("has-error");

    let result = rules.validate_with(&mut form, &options);
    println!("{result}");
    println!("{}", result.report());
    println!("marked: {:?}", form.marked("has-error"));

    form.set_text("username", "jane");
    form.set_text("email", "jane@example.com");
    form.set_text("age", "34");
    form.set_text("vat", "DE123456789");
    form.set_checked("newsletter", false);

    let result = rules.validate_with(&mut form, &options);
    println!("{result}");
    println!("marked: {:?}", form.marked("has-error"));
}
