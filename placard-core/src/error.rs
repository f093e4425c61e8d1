/// Errors produced by the `placard-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The configured allow-list string yielded no usable key tokens.
    #[error("allow-list contains no usable keys")]
    EmptyAllowList,
}
