/// Keeps only ASCII letters, digits and `@ . _ -`, in their original order.
///
/// No structural checks are made; the result may be empty or malformed.
pub fn sanitize_email(raw: &str) -> String {
    raw.chars().filter(|ch| is_email_char(*ch)).collect()
}

fn is_email_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '@' | '.' | '_' | '-')
}
