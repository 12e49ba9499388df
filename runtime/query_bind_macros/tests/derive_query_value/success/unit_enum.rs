use query_bind::QueryValue;

#[derive(QueryValue, Debug, PartialEq)]
pub enum State {
    Normal,
    Locked,
    #[query(rename = "left")]
    HasLeft,
}

#[derive(QueryValue)]
pub enum Empty {}

#[derive(QueryValue, Debug, PartialEq)]
#[allow(non_camel_case_types)]
pub enum Keyword {
    r#type,
    r#match,
}

fn main() {
    assert_eq!(State::decode("normal").unwrap(), State::Normal);
    assert_eq!(State::decode("locked").unwrap(), State::Locked);
    assert_eq!(State::decode("left").unwrap(), State::HasLeft);
    assert_eq!(
        State::decode("has_left").unwrap_err().to_string(),
        "`has_left` is not a valid value. Valid options are: `normal`, `locked`, `left`"
    );
    assert!(Empty::decode("anything").is_err());
    assert_eq!(Keyword::decode("type").unwrap(), Keyword::r#type);
    assert_eq!(Keyword::decode("match").unwrap(), Keyword::r#match);
}
