use std::path::Path;


/// Returns the form of `path` that is shown to the user in assertion failures and logs.
///
/// With the `dunce` feature enabled, Windows' UNC prefixes are stripped
/// whenever the path can be represented without them.
pub(crate) fn displayable(path: &Path) -> &Path {
    cfg_if::cfg_if! {
        if #[cfg(feature = "dunce")] {
            dunce::simplified(path)
        } else {
            path
        }
    }
}
