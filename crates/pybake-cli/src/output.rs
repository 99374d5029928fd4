//! Styled terminal output for `pybake` commands.

use std::path::Path;

use console::{style, StyledObject};

/// `<tag> <text>`, tag in bold.
fn tagged(tag: StyledObject<&str>, text: &str) {
    println!("{} {}", tag.bold(), text);
}

pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.chars().count())).dim());
}

pub fn print_success(text: &str) {
    tagged(style("[OK]").green(), text);
}

pub fn print_warning(text: &str) {
    tagged(style("[WARN]").yellow(), text);
}

pub fn print_error(text: &str) {
    tagged(style("[ERROR]").red(), text);
}

/// `[2/3] Running post-generation hooks`
pub fn print_step(step: u32, total: u32, text: &str) {
    println!("{} {}", style(format!("[{step}/{total}]")).dim(), text);
}

pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// One `label: path` line per entry, shown relative to `root` when it lies inside it.
pub fn print_paths(label: &str, root: &Path, paths: &[impl AsRef<Path>]) {
    for path in paths {
        print_key_value(label, &relative_display(root, path.as_ref()));
    }
}

fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_display() {
        let root = Path::new("/work/cusy.example");
        assert_eq!(
            relative_display(root, &root.join("docs/authors.rst")),
            "docs/authors.rst"
        );
        assert_eq!(
            relative_display(root, Path::new("/elsewhere/LICENSE")),
            "/elsewhere/LICENSE"
        );
    }
}
