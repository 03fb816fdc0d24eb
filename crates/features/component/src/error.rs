use std::borrow::Cow;
use szn_kernel::host::HostError;
use szn_loader::LoaderError;

#[szn_derive::szn_error]
pub enum ComponentError {
    #[error("Host element error{}: {source}", format_context(.context))]
    Host { source: HostError, context: Option<Cow<'static, str>> },

    #[error("Loader error{}: {source}", format_context(.context))]
    Loader { source: LoaderError, context: Option<Cow<'static, str>> },

    #[error("Internal component error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
