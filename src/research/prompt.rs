//! `create_search_prompt`: the fixed research-planning prompt.

/// Build the research-planning prompt for `topic`
///
/// The template is fixed; only the topic is substituted.
pub fn create_search_prompt(topic: &str) -> String {
    format!(
        "
Research Prompt for: {topic}

1. Search Strategy:
   - Primary keywords: {topic}
   - Related terms to explore
   - Timeline considerations

2. Key Questions to Investigate:
   - What are the current developments in {topic}?
   - Who are the leading researchers?
   - What are the main challenges?
   - What are the recent breakthroughs?

3. Analysis Framework:
   - Compare different approaches
   - Identify trends and patterns
   - Note controversial areas
   - Find gaps in current research

4. Output Goals:
   - Summarize key findings
   - Identify most influential papers
   - Create research roadmap
   - Suggest future directions
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_topic() {
        let prompt = create_search_prompt("quantum error correction");

        assert!(prompt.starts_with("\nResearch Prompt for: quantum error correction\n"));
        assert!(prompt.contains("   - Primary keywords: quantum error correction\n"));
        assert!(prompt
            .contains("   - What are the current developments in quantum error correction?\n"));
        assert!(prompt.ends_with("   - Suggest future directions\n"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(create_search_prompt("rust"), create_search_prompt("rust"));
        assert_ne!(create_search_prompt("rust"), create_search_prompt("go"));
    }

    #[test]
    fn test_prompt_empty_topic() {
        let prompt = create_search_prompt("");
        assert!(prompt.starts_with("\nResearch Prompt for: \n"));
        assert_eq!(prompt.matches("1. Search Strategy:").count(), 1);
    }
}
