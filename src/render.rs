// Filtering and HTML output. The page is built through a tiny builder
// that escapes every interpolated value, so game names with markup
// characters cannot break the document.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

use crate::api::Game;

pub const PAGE_TITLE: &str = "Categorized RAWG Games";
pub const THUMBNAIL_SIZE: u32 = 60;

/// Keep the games tagged with `genre`, in API order. A game appears at
/// most once even if the API repeats a tag.
pub fn filter_by_genre<'a>(games: &'a [Game], genre: &str) -> Vec<&'a Game> {
    games.iter().filter(|game| game.has_genre(genre)).collect()
}

/// Render the full HTML document for `games` under the heading `genre`.
/// The output depends only on the arguments.
pub fn render_page(genre: &str, games: &[&Game]) -> String {
    let mut page = HtmlPage::new(PAGE_TITLE, genre);
    for game in games {
        page.row(game);
    }
    page.finish()
}

/// Filter `games`, render the matches and write them to `path`, replacing
/// any previous file. Returns the match count.
pub fn write_page(path: &Path, genre: &str, games: &[Game]) -> Result<usize> {
    let matched = filter_by_genre(games, genre);
    let html = render_page(genre, &matched);
    std::fs::write(path, html)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), count = matched.len(), "wrote games page");
    Ok(matched.len())
}

/// Console line shown after the page is written.
pub fn summary(count: usize, path: &Path) -> String {
    if count == 0 {
        "Sorry, no RAWG games are currently registered in that category. Please try another."
            .to_string()
    } else {
        format!(
            "RAWG games in selected genre can be found in the file {}!",
            path.display()
        )
    }
}

struct HtmlPage {
    buf: String,
}

impl HtmlPage {
    fn new(title: &str, genre: &str) -> Self {
        let mut buf = String::new();
        buf.push_str("<!DOCTYPE html>\n<html>\n");
        let _ = writeln!(buf, "<head><title>{}</title></head>", escape(title));
        buf.push_str("<body style=\"background-color: #D3D3D3\">\n");
        let _ = writeln!(
            buf,
            "<h2>RAWG Games that Fall Under Genre: {}</h2>",
            escape(genre)
        );
        buf.push_str("<table>\n");
        HtmlPage { buf }
    }

    fn row(&mut self, game: &Game) {
        let name = escape(&game.name);
        self.buf.push_str("<tr><td>");
        if let Some(src) = &game.background_image {
            let _ = write!(
                self.buf,
                "<img src=\"{}\" alt=\"{}\" height=\"{size}\" width=\"{size}\">",
                escape(src),
                name,
                size = THUMBNAIL_SIZE
            );
        }
        let _ = writeln!(self.buf, "</td><td><h3>{}</h3></td></tr>", name);
    }

    fn finish(mut self) -> String {
        self.buf.push_str("</table>\n</body>\n</html>\n");
        self.buf
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
