/// Raw text split into its front matter block and body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitContent {
    /// Lines strictly between the first and second `---` delimiter
    pub front_matter: String,
    /// Everything after the closing delimiter
    pub body: String,
}

/// Check whether a line is a front matter delimiter
fn is_delimiter(line: &str) -> bool {
    line.trim() == "---"
}

/// Split raw markdown into front matter and body.
///
/// Leading blank lines are ignored. Delimiters are the first two lines whose
/// trimmed content is exactly `---`; anything before the opening delimiter
/// belongs to neither part. With fewer than two delimiters the front matter
/// is empty and the whole (leading-blank-trimmed) text is the body.
pub fn split_front_matter(content: &str) -> SplitContent {
    let lines: Vec<&str> = content
        .split('\n')
        .skip_while(|line| line.trim().is_empty())
        .collect();

    let mut delimiters = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_delimiter(line))
        .map(|(idx, _)| idx);

    match (delimiters.next(), delimiters.next()) {
        (Some(open), Some(close)) => SplitContent {
            front_matter: lines[open + 1..close].join("\n"),
            body: lines[close + 1..].join("\n"),
        },
        _ => SplitContent {
            front_matter: String::new(),
            body: lines.join("\n"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_delimiters_keeps_whole_body() {
        let split = split_front_matter("\n\n# Title\n\nSome text\n");
        assert_eq!(split.front_matter, "");
        assert_eq!(split.body, "# Title\n\nSome text\n");
    }

    #[test]
    fn test_single_delimiter_is_not_front_matter() {
        let split = split_front_matter("# Title\n---\nafter rule");
        assert_eq!(split.front_matter, "");
        assert_eq!(split.body, "# Title\n---\nafter rule");
    }

    #[test]
    fn test_two_delimiters_exclude_block_from_body() {
        let text = "---\ncover: https://img/a.png\nsticky: 2\n---\n# Post\nbody";
        let split = split_front_matter(text);
        assert_eq!(split.front_matter, "cover: https://img/a.png\nsticky: 2");
        assert_eq!(split.body, "# Post\nbody");
        assert!(!split.body.contains("sticky"));
    }

    #[test]
    fn test_leading_blank_lines_and_padded_delimiters() {
        let text = "\n   \n  ---  \ntitle: x\n---\t\nbody";
        let split = split_front_matter(text);
        assert_eq!(split.front_matter, "title: x");
        assert_eq!(split.body, "body");
    }

    #[test]
    fn test_later_rules_stay_in_body() {
        let text = "---\na: 1\n---\nintro\n---\nmore";
        let split = split_front_matter(text);
        assert_eq!(split.front_matter, "a: 1");
        assert_eq!(split.body, "intro\n---\nmore");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split_front_matter(""), SplitContent::default());
    }
}
