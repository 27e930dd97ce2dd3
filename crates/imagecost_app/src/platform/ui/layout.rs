use imagecost_core::EXAMPLE_SNIPPET;

use super::constants::*;

/// Lines printed once at startup, before the first render.
pub fn initial_lines() -> Vec<String> {
    let mut lines = vec![TITLE.to_string(), "=".repeat(TITLE.len())];
    lines.extend(HELP_LINES.iter().map(|line| line.to_string()));
    lines.push(String::new());
    lines
}

pub fn help_lines() -> Vec<String> {
    HELP_LINES.iter().map(|line| line.to_string()).collect()
}

/// What `example` prints: the Playground line users should look for.
pub fn example_lines() -> Vec<String> {
    vec![
        "Look for this information in the OpenAI Playground after generating an image:"
            .to_string(),
        format!("  {EXAMPLE_SNIPPET}"),
    ]
}
