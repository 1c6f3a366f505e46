// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;

    /// Slug cut to at most `max_chars`, never ending in a separator.
    fn slugify_bounded(&self, input: &str, max_chars: usize) -> String {
        let slug = self.slugify(input);
        let cut: String = slug.chars().take(max_chars).collect();
        cut.trim_end_matches('-').to_string()
    }
}
