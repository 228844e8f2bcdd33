// Shared prompt fragments.
// Each operation defines its own template in generation/prompts.rs.
// This file contains the pieces every template ends with.

/// Appended to every operation prompt. The upstream is already constrained to the
/// declared schema; this keeps the model from wrapping the object in prose.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with a single JSON object that matches \
    the requested schema. Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Fills `{key}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so user text that happens to contain
/// `{cv_text}` or similar is embedded verbatim. Unknown placeholders are left as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let hit = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (end, *value))
        });
        match hit {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
