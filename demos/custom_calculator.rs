use showif::{Context, EvalError, Rule, Value};

fn main() {
    // The built-in policy refuses to compare a number against a string
    // choice; a custom calculator decides for it.
    let numeric = |value: &Value,
                   choice: Option<&Value>,
                   _: Option<&[Value]>|
     -> Result<bool, EvalError> {
        match (value, choice) {
            (Value::Int(v), Some(Value::Str(c))) => Ok(c.parse() == Ok(*v)),
            (value, _) => Ok(!value.is_missing()),
        }
    };

    let rule = Rule::new("1B").expect("rule should parse");
    let ctx = Context::new()
        .calculator(numeric)
        .choices(vec![Some(vec![Value::from("10"), Value::from("20")])])
        .values(vec![Value::Int(20)]);

    match rule.evaluate(&ctx) {
        Ok(matched) => println!("numeric answer matches \"20\": {matched}"),
        Err(err) => eprintln!("evaluation failed: {err}"),
    }
}
