use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use reelcase_catalog::MovieEntry;

use crate::SiteError;

/// Render a profile's collection as a standalone HTML page.
pub fn render_page(owner: &str, movies: &BTreeMap<String, MovieEntry>) -> String {
    let heading = format!("Movie Database of {}", owner);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("  <title>{}</title>\n", escape_html(&heading)));
    html.push_str("  <style>\n");
    html.push_str(STYLE);
    html.push_str("  </style>\n</head>\n<body>\n");
    html.push_str(&format!("  <h1>{}</h1>\n", escape_html(&heading)));
    html.push_str("  <ol class=\"movie-grid\">\n");

    for (title, entry) in movies {
        write_card(&mut html, title, entry);
    }

    html.push_str("  </ol>\n");
    html.push_str(&format!(
        "  <footer>{} movies &middot; generated {}</footer>\n",
        movies.len(),
        chrono::Local::now().format("%Y-%m-%d"),
    ));
    html.push_str("</body>\n</html>\n");
    html
}

/// Write the rendered page to `<out_dir>/<owner>.html`, creating the
/// directory as needed. Returns the path written.
pub fn write_site(
    owner: &str,
    movies: &BTreeMap<String, MovieEntry>,
    out_dir: &Path,
) -> Result<PathBuf, SiteError> {
    fs::create_dir_all(out_dir)?;

    let page = render_page(owner, movies);
    let path = out_dir.join(format!("{}.html", owner));
    let mut file = fs::File::create(&path)?;
    file.write_all(page.as_bytes())?;

    Ok(path)
}

fn write_card(html: &mut String, title: &str, entry: &MovieEntry) {
    html.push_str("    <li>\n      <div class=\"movie\">\n");
    match &entry.poster_url {
        Some(url) => {
            html.push_str(&format!(
                "        <img class=\"movie-poster\" src=\"{}\" alt=\"{} poster\">\n",
                escape_html(url),
                escape_html(title),
            ));
        }
        None => {
            html.push_str("        <div class=\"movie-poster movie-poster-missing\">no poster</div>\n");
        }
    }
    html.push_str(&format!(
        "        <div class=\"movie-title\">{}</div>\n",
        escape_html(title),
    ));
    html.push_str(&format!(
        "        <div class=\"movie-rating\">IMDb: {:.1}</div>\n",
        entry.rating,
    ));
    html.push_str(&format!(
        "        <div class=\"movie-year\">{}</div>\n",
        entry.year,
    ));
    html.push_str("      </div>\n    </li>\n");
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const STYLE: &str = "\
    body { font-family: system-ui, sans-serif; margin: 2rem; background: #14181c; color: #eee; }
    h1 { font-weight: 600; }
    .movie-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
                  gap: 1.5rem; list-style: none; padding: 0; }
    .movie { background: #1f262d; border-radius: 8px; padding: 0.75rem; }
    .movie-poster { width: 100%; aspect-ratio: 2 / 3; object-fit: cover; border-radius: 4px; }
    .movie-poster-missing { display: flex; align-items: center; justify-content: center;
                            background: #2c353d; color: #778; }
    .movie-title { font-weight: 600; margin-top: 0.5rem; }
    .movie-rating { color: #9ab; font-size: 0.9rem; }
    .movie-year { color: #778; font-size: 0.9rem; }
    footer { margin-top: 2rem; color: #778; font-size: 0.8rem; }
";
