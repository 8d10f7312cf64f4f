use std::collections::HashMap;

/// Normalize a raw model class label to the category name used by the rest
/// of the platform. Lookup is case-insensitive; labels without a mapping
/// pass through unchanged, so new model classes keep working before a
/// mapping is added here.
pub fn normalize_category(category: &str) -> String {
    let category_map: HashMap<&str, &str> = [
        ("js", "JavaScript"),
        ("javascript", "JavaScript"),
        ("web", "Web Development"),
        ("web_dev", "Web Development"),
        ("python", "Python"),
    ]
    .iter()
    .cloned()
    .collect();

    category_map
        .get(category.to_lowercase().as_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| category.to_string())
}
