use std::path::Path;

/// HTML snippet displaying a saved animation in a notebook front-end.
pub fn img_tag(path: impl AsRef<Path>) -> String {
    format!(
        "<img alt=\"double pendulum animation\" src=\"{}\">",
        path.as_ref().display()
    )
}
