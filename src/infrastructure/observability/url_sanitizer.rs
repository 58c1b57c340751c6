use url::Url;
use url::form_urlencoded;

const MAX_VISIBLE_LENGTH: usize = 200;
const REDACTED: &str = "[REDACTED]";

const SENSITIVE_QUERY_KEYS: [&str; 8] = [
    "sig",
    "signature",
    "token",
    "key",
    "api_key",
    "code",
    "password",
    "secret",
];

/// Redacts credentials carried in the userinfo or query string (SAS
/// signatures, tokens) and truncates long URLs so they are safe to log.
pub fn sanitize_url(raw: &str) -> String {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = match Url::parse(trimmed) {
        Ok(url) => redact_url(url),
        Err(_) => redact_unparsed(trimmed),
    };

    truncate(redacted)
}

fn redact_url(mut url: Url) -> String {
    if url.password().is_some() {
        // Only fails for URLs that cannot carry credentials at all.
        let _ = url.set_password(Some(REDACTED));
    }

    if url.query().is_some() {
        let pairs = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()));
        let query = redact_pairs(pairs);
        url.set_query(Some(&query));
    }

    url.to_string()
}

/// Fallback for input `Url` rejects: keeps the text, minus any query values
/// whose decoded key is sensitive.
fn redact_unparsed(raw: &str) -> String {
    match raw.split_once('?') {
        Some((base, query)) => {
            let (query, fragment) = match query.split_once('#') {
                Some((q, f)) => (q, Some(f)),
                None => (query, None),
            };
            let pairs = form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()));
            let mut out = format!("{}?{}", base, redact_pairs(pairs));
            if let Some(f) = fragment {
                out.push('#');
                out.push_str(f);
            }
            out
        }
        None => raw.to_string(),
    }
}

fn redact_pairs(pairs: impl Iterator<Item = (String, String)>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        if is_sensitive(&key) {
            serializer.append_pair(&key, REDACTED);
        } else {
            serializer.append_pair(&key, &value);
        }
    }
    serializer.finish()
}

fn is_sensitive(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    SENSITIVE_QUERY_KEYS.contains(&key.as_str())
}

fn truncate(text: String) -> String {
    let total = text.chars().count();
    if total > MAX_VISIBLE_LENGTH {
        let visible: String = text.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", visible, total)
    } else {
        text
    }
}
