use amia_derive::amia_error;
use std::borrow::Cow;

#[amia_error]
pub enum FormError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Invalid form{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_step(raw: &str) -> Result<u8> {
    raw.parse::<u8>().context("Reading wizard step")
}

fn main() {
    let err = parse_step("five").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parse error (Reading wizard step): invalid digit found in string"
    );

    let invalid: Result<()> =
        Err(FormError::Invalid { message: "name missing".into(), context: None });
    let err = invalid.context("step 0").unwrap_err();
    assert_eq!(err.to_string(), "Invalid form (step 0): name missing");
}
