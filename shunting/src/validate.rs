use crate::Error;

/// Chars an expression may be made of.
pub static ALLOWED: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    '(', ')', '.', ' ', '+', '-', '*', '/', '^'];

/// Reject input holding anything outside `ALLOWED`, naming the first run
/// of unsupported chars.
pub fn validate(expr: &str) -> Result<(), Error> {
    let unsupported = |c: char| !ALLOWED.contains(&c);
    if let Some(start) = expr.find(unsupported) {
        let run: String = expr[start..].chars().take_while(|c| unsupported(*c)).collect();
        return Err(Error::UnsupportedChars(run));
    }
    Ok(())
}
