use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ruleform::{parse_rule, FieldRules, Form};

const RULES: &[&str] = &[
    "required|email|max_length[64]",
    "required|numeric|greater_than[17]|less_than[130]",
    "permit_empty|in_list[red,green,blue]",
    "required_if[f0]|min_length[3]|not_in_list[admin,root]",
    "required|date",
];

const VALUES: &[&str] = &["jane@example.com", "42", "", "alice", "2024-05-01"];

/// Build `n` fields cycling through a fixed mix of rules, all passing.
fn build(n: usize) -> (FieldRules, Form) {
    let mut builder = FieldRules::builder();
    let mut form = Form::new();

    for i in 0..n {
        let id = format!("f{i}");
        builder = builder.field(&id, &id, RULES[i % RULES.len()]);
        form = form.text(&id, VALUES[i % VALUES.len()]);
    }

    (builder.build(), form)
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_rule");
    for rules in RULES {
        group.bench_function(*rules, |b| b.iter(|| parse_rule(black_box(rules))));
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for &n in &[5, 20, 100] {
        let (rules, mut form) = build(n);
        group.bench_function(&format!("{n}_fields"), |b| {
            b.iter(|| rules.validate(black_box(&mut form)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_validate);
criterion_main!(benches);
