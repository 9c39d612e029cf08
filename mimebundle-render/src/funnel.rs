//! Error funnel: failures become error bundles instead of crashes.

use mimebundle::Bundle;
use std::error::Error;

/// Convert any failure into the fixed-shape error bundle.
///
/// Total: never fails. The failure's message becomes `evalue`.
pub fn to_error_bundle<E: Error + ?Sized>(err: &E) -> Bundle {
    tracing::warn!(error = %err, "rendering failed, emitting error bundle");
    Bundle::from_error(err)
}

/// Unwrap a fallible render, substituting the error bundle on failure.
///
/// Meant for call sites of operations that may fail outward, such as
/// [`builders::file`](crate::builders::file).
pub fn or_error_bundle<E: Error>(result: Result<Bundle, E>) -> Bundle {
    result.unwrap_or_else(|err| to_error_bundle(&err))
}
