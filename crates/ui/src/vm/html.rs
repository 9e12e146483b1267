use std::collections::HashSet;

/// Clean API-provided text for use as inner HTML.
///
/// Trivia text arrives entity-encoded (`&quot;`, `&#039;`); rendering it as
/// HTML decodes the entities, and the whitelist keeps anything else inert.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = ["b", "i", "em", "strong", "br", "sub", "sup"]
        .into_iter()
        .collect();

    ammonia::Builder::new()
        .tags(tags)
        .clean(html)
        .to_string()
}
