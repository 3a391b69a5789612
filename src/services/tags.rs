use once_cell::sync::Lazy;
use regex::Regex;

static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").expect("hashtag pattern is valid"));

/// Lowercases a tag and strips every `#` marker.
pub fn normalize_tag(tag: &str) -> String {
    tag.to_lowercase().replace('#', "")
}

/// Extracts hashtags (`#` followed by word characters) from a description,
/// normalized, in first-occurrence order. Duplicate tags are kept. Empty or
/// tag-less text yields an empty vec.
pub fn extract_tags(text: &str) -> Vec<String> {
    HASHTAG
        .find_iter(text)
        .map(|m| normalize_tag(m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_order() {
        let tags = extract_tags("a #picture with tags #AwEsOmE #Platzi #AVA and #100 ##yes");
        assert_eq!(tags, vec!["picture", "awesome", "platzi", "ava", "100", "yes"]);
    }

    #[test]
    fn keeps_duplicates() {
        assert_eq!(extract_tags("#dog and another #dog"), vec!["dog", "dog"]);
    }

    #[test]
    fn no_tags() {
        assert_eq!(extract_tags("A picture with no tags"), Vec::<String>::new());
        assert_eq!(extract_tags(""), Vec::<String>::new());
    }

    #[test]
    fn bare_marker_is_not_a_tag() {
        assert_eq!(extract_tags("just a # sign"), Vec::<String>::new());
    }

    #[test]
    fn normalize_strips_all_markers() {
        assert_eq!(normalize_tag("#AwEsOmE"), "awesome");
        assert_eq!(normalize_tag("##yes#"), "yes");
        assert_eq!(normalize_tag("plain"), "plain");
    }
}
