use std::borrow::Cow;
use szn_derive::szn_error;

#[szn_error]
pub enum BridgeError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, BridgeError> {
    raw.parse::<u32>().context("Parsing attribute count")
}

fn main() {
    let err = parse("x").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (Parsing attribute count)"));

    let internal: BridgeError = "latch poisoned".into();
    assert_eq!(internal.to_string(), "Internal error: latch poisoned");
}
