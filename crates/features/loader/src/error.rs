use std::borrow::Cow;
use szn_kernel::host::HostError;

#[szn_derive::szn_error]
pub enum LoaderError {
    /// The host page refused the loader script.
    #[error("Loader injection failed{}: {source}", format_context(.context))]
    Host { source: HostError, context: Option<Cow<'static, str>> },

    #[error("Internal loader error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
