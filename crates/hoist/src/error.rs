//! Errors
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("no context value of type '{type_name}' is in scope"))]
    MissingContext { type_name: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
