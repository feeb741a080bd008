// Markdown sanitizer for model review responses
//
// The model is instructed to keep sections 1-3 free of code, but it
// drifts. This pass enforces the contract after the fact: fenced blocks
// before section 4 are removed wholesale, inline code spans before
// section 4 are unwrapped, and the single section-4 block passes through
// untouched.

use once_cell::sync::Lazy;
use regex::Regex;

/// One inline code span; unwrapped pair-by-pair, left to right.
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Strip formatting violations from a model review.
///
/// Single forward pass over lines with two flags: `inside_fence`
/// (toggled at every fence delimiter) and `in_section_four` (set at the
/// "### 4." heading, never reset). Total over all inputs and idempotent.
/// A fence left open before section 4 swallows the rest of the input;
/// no correction is applied.
pub fn sanitize(markdown: &str) -> String {
    let mut cleaned: Vec<String> = Vec::new();
    let mut inside_fence = false;
    let mut in_section_four = false;

    for line in markdown.split('\n') {
        let trimmed = line.trim();

        // Section 4 starts here; the transition is one-directional.
        if trimmed.starts_with("### 4.") {
            in_section_four = true;
        }

        // Fence delimiters toggle state; only section 4 may keep them.
        if trimmed.starts_with("```") {
            inside_fence = !inside_fence;
            if in_section_four {
                cleaned.push(line.to_string());
            }
            continue;
        }

        // Contents of an illegal fence are dropped with it.
        if inside_fence && !in_section_four {
            continue;
        }

        if in_section_four {
            cleaned.push(line.to_string());
        } else {
            cleaned.push(INLINE_CODE.replace_all(line, "$1").into_owned());
        }
    }

    cleaned.join("\n")
}
