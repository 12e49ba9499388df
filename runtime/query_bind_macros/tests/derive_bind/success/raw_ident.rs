use query_bind::{Bind, Field, QueryParams};

#[derive(Bind, Default)]
pub struct Kind {
    #[query("kind,any")]
    pub kind: String,
}

#[derive(Bind, Default)]
pub struct Listing {
    #[query(flatten)]
    pub r#type: Kind,
}

fn main() {
    match &Listing::fields()[0] {
        Field::Embedded { name, .. } => assert_eq!(*name, "type"),
        other => panic!("unexpected descriptor: {other:?}"),
    }

    let mut listing = Listing::default();
    let errors = query_bind::bind(&QueryParams::parse("kind=book"), &mut listing);
    assert!(errors.is_empty());
    assert_eq!(listing.r#type.kind, "book");
}
