use log::debug;

/// Value of the first line in `block` that starts with `key`.
///
/// The key prefix is stripped and the remainder trimmed. Returns `None` when
/// no line matches or the value is empty.
pub fn extract_field(block: &str, key: &str) -> Option<String> {
    block
        .lines()
        .find(|line| line.starts_with(key))
        .map(|line| line[key.len()..].trim())
        .filter(|value| !value.is_empty())
        .map(|value| value.to_string())
}

/// Value of the first key in `keys` that is present
pub fn extract_first_field(block: &str, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| extract_field(block, key))
}

/// Sticky order from `sticky:`, falling back to the older `top:` key.
///
/// Zero and non-numeric values count as absent.
pub fn extract_sticky(block: &str) -> Option<i64> {
    let raw = extract_first_field(block, &["sticky:", "top:"])?;
    match unquote(&raw).parse::<i64>() {
        Ok(0) => None,
        Ok(order) => Some(order),
        Err(_) => {
            debug!("Ignoring non-numeric sticky value: {}", raw);
            None
        }
    }
}

/// Inline tag list from `tags:`, written as `[a, b]` or `a, b`
pub fn extract_tags(block: &str) -> Vec<String> {
    let Some(raw) = extract_first_field(block, &["tags:", "tag:"]) else {
        return Vec::new();
    };

    raw.trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|tag| unquote(tag.trim()).to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Strip one pair of matching YAML quotes
pub fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
