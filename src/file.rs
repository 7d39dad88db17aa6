// src/file.rs

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use html_escape::encode_text;

/// One chart on an HTML page.
#[derive(Clone, Copy)]
pub struct Figure<'a> {
    pub heading: &'a str,
    pub svg: &'a str,
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn normalize_path(p: &str) -> PathBuf {
    PathBuf::from(normalize_separators(p.trim()))
}

/// Standalone dark page with the given SVG figures stacked vertically.
pub fn html_page(title: &str, figures: &[Figure]) -> String {
    let mut body = s!();
    for f in figures {
        body.push_str(&format!(
            "<section>\n<h2>{}</h2>\n{}\n</section>\n",
            encode_text(f.heading),
            f.svg
        ));
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <style>\nbody {{ background: #000; color: #fff; font-family: sans-serif; margin: 24px; }}\n\
         h2 {{ font-size: 25px; font-weight: normal; }}\nsvg {{ max-width: 100%; height: auto; }}\n</style>\n\
         </head>\n<body>\n{}</body>\n</html>\n",
        encode_text(title),
        body
    )
}

/// Write an HTML page, creating the parent directory. Returns the path written.
pub fn write_html(path: &Path, title: &str, figures: &[Figure]) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, html_page(title, figures))?;
    Ok(path.to_path_buf())
}
