use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Render the roff source-include directive for `target`.
pub fn so_directive(target: &str) -> String {
    format!(".so {}\n", target)
}

/// Create a link man page at `link` that includes `target`.
///
/// The file is created if missing and truncated otherwise; prior content is
/// discarded. `target` is written verbatim, with no escaping or quoting.
pub fn create_link(target: &str, link: impl AsRef<Path>) -> Result<()> {
    let link = link.as_ref();
    tracing::debug!("Writing link page {}", link.display());

    fs::write(link, so_directive(target))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_so_directive_format() {
        assert_eq!(so_directive("foo.1"), ".so foo.1\n");
        assert_eq!(so_directive("exess.3"), ".so exess.3\n");
        assert_eq!(so_directive(""), ".so \n");
    }
}
