//! Literal token substitution for template text.

/// Placeholder replaced with the script name of each generated file.
pub const SCRIPT_NAME_TOKEN: &str = "#SCRIPTNAME#";

/// Replace every literal occurrence of each token with its value.
///
/// Substitutions are applied to the original text in one left-to-right scan,
/// so a value that itself contains a token is never expanded again. Tokens
/// without a matching key are left as they are. When two tokens match at the
/// same position the longer one wins.
pub fn render(text: &str, substitutions: &[(&str, &str)]) -> String {
    let active: Vec<&(&str, &str)> =
        substitutions.iter().filter(|(token, _)| !token.is_empty()).collect();
    if active.is_empty() {
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        let mut best: Option<(usize, &(&str, &str))> = None;
        for &pair in &active {
            if let Some(pos) = rest.find(pair.0) {
                let better = match best {
                    None => true,
                    Some((best_pos, best_pair)) => {
                        pos < best_pos || (pos == best_pos && pair.0.len() > best_pair.0.len())
                    }
                };
                if better {
                    best = Some((pos, pair));
                }
            }
        }

        match best {
            Some((pos, (token, value))) => {
                output.push_str(&rest[..pos]);
                output.push_str(value);
                rest = &rest[pos + token.len()..];
            }
            None => {
                output.push_str(rest);
                break;
            }
        }
    }
    output
}

/// Render with the single script-name substitution used by every scaffold.
pub fn render_script(text: &str, script_name: &str) -> String {
    render(text, &[(SCRIPT_NAME_TOKEN, script_name)])
}
