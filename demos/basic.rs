use showif::{Context, Rule, Value};

fn main() {
    // Show a follow-up question when shipping is "express" and the
    // customer picked a size, or when no color was chosen at all.
    let rule = Rule::new("1A&2B|!(3)").expect("rule should parse");
    println!("rule: {rule}");

    let ctx = Context::with_default_calculator()
        .choices(vec![
            Some(vec![Value::from("express"), Value::from("standard")]),
            Some(vec![Value::from("s"), Value::from("m"), Value::from("l")]),
            None, // free-text color field
        ])
        .values(vec![
            Value::from("express"),
            Value::from("m"),
            Value::from("teal"),
        ]);

    match rule.evaluate(&ctx) {
        Ok(show) => println!("show follow-up: {show}"),
        Err(err) => eprintln!("evaluation failed: {err}"),
    }
}
