use query_bind::{Bind, BindErrors, QueryParams, Sanitize};

#[derive(Bind, Default)]
pub struct Paging {
    #[query("page,1")]
    pub page: u32,
    #[query("size,20")]
    pub size: u32,
}

#[derive(Bind, Default)]
#[query(sanitize)]
pub struct Search {
    #[query(flatten)]
    pub paging: Paging,
    #[query("q")]
    pub text: String,
    #[query("ids,1,2")]
    pub ids: Vec<u64>,
    #[query("limit")]
    pub limit: Option<u8>,
    #[query("-")]
    pub skipped: i32,
    pub internal: bool,
    #[query("type")]
    pub r#type: String,
}

impl Sanitize for Search {
    fn sanitize(&mut self, errors: &mut BindErrors) {
        if self.text.is_empty() {
            errors.insert("q", "missing search text");
        }
    }
}

fn main() {
    let mut search = Search::default();
    let errors = query_bind::bind(
        &QueryParams::parse("size=5&limit=3&skipped=4&internal=true&type=a"),
        &mut search,
    );
    assert_eq!(search.paging.page, 1);
    assert_eq!(search.paging.size, 5);
    assert_eq!(search.ids, vec![1, 2]);
    assert_eq!(search.limit, Some(3));
    assert_eq!(search.skipped, 0);
    assert!(!search.internal);
    assert_eq!(search.r#type, "a");
    assert_eq!(errors.get("q"), Some("missing search text"));
    assert_eq!(errors.len(), 1);
}
