use crate::engine::Recommendation;


/// Cuts `s` to `max_chars` characters, appending `...` when shortened.
/// Counts chars, not bytes, so multi-byte text is never split.
#[inline]
pub fn truncate_ellipsis(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    } else {
        s.to_string()
    }
}


/// Human-readable block for one ranked result, `rank` starting at 1.
pub fn render_recommendation(
    rank: usize,
    rec: &Recommendation,
    max_overview_chars: usize,
) -> String {
    let movie = &rec.movie;
    let mut out = format!("{}. {}", rank, movie.title);
    if let Some(year) = movie.release_year {
        out.push_str(&format!(" ({year})"));
    }
    out.push_str(&format!("\n   Similarity Score: {:.2}", rec.similarity));
    out.push_str(&format!(
        "\n   Overview: {}",
        truncate_ellipsis(&movie.overview, max_overview_chars)
    ));
    out.push_str(&format!("\n   Genres: {}", movie.genres.join(", ")));
    out
}
