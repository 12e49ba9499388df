mod inner {
    use query_bind::Bind;

    #[derive(Bind, Default)]
    pub(crate) struct Private {
        #[query("flag,true")]
        pub(crate) flag: bool,
    }
}

fn main() {
    let private: inner::Private = query_bind::bind_query("").unwrap();
    assert!(private.flag);
}
