use query_bind::Bind;

#[derive(Bind, Default)]
pub struct Nothing {
    pub untouched: String,
}

fn main() {
    assert!(Nothing::fields().is_empty());
    let nothing: Nothing = query_bind::bind_query("untouched=x").unwrap();
    assert_eq!(nothing.untouched, "");
}
