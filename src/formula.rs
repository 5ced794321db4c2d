use crate::error::{Error, Result};

/// Expands a chemical-style formula into space-separated element labels.
///
/// `"H2O"` becomes `"H H O"` and `"C6H12O6"` six `C`, twelve `H` and six
/// `O`, in formula order. Each element starts with an uppercase letter;
/// digits after it repeat it.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the formula does not start with an
/// uppercase letter or contains characters other than letters and digits.
pub fn convert_formula(formula: &str) -> Result<String> {
    let mut parts: Vec<String> = Vec::new();
    for ch in formula.chars() {
        if ch.is_uppercase() {
            parts.push(ch.to_string());
        } else if let Some(last) = parts.last_mut() {
            last.push(ch);
        } else {
            return Err(Error::invalid_argument(format!(
                "formula '{formula}' must start with an uppercase element symbol"
            )));
        }
    }

    let mut labels: Vec<String> = Vec::new();
    for part in parts {
        let (symbol, count): (String, String) = part.chars().partition(|c| c.is_alphabetic());
        if count.is_empty() {
            labels.push(symbol);
            continue;
        }
        let repeat: usize = count.parse().map_err(|_| {
            Error::invalid_argument(format!("'{part}' in formula '{formula}' has an invalid count"))
        })?;
        labels.extend(std::iter::repeat_n(symbol, repeat));
    }
    Ok(labels.join(" "))
}
