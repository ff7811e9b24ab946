//! URI template expansion for eUtils request URLs.
//!
//! The whole request surface of the API is one templated URL; every request
//! the crate sends is produced by substituting a [`RequestOptions`] value
//! into [`URI_TEMPLATE`].

use std::sync::OnceLock;

use regex::Regex;

use crate::options::RequestOptions;

/// URL shape shared by the search, fetch, and link endpoints.
///
/// `{query}` carries a pre-escaped fragment (`term=...` or `id=...`);
/// `{extra}` expands to `&<fragment>` when set and to nothing otherwise.
pub(crate) const URI_TEMPLATE: &str = "{base}/e{verb}.fcgi?db={database}&tool={tool}\
&email={email}&reldate={reldate}&retmax={retmax}&retstart={retstart}&{query}&retmode=xml{extra}";

/// Characters re-exposed after percent-encoding a substituted value.
///
/// Escaping must not destroy URL structure: base URLs, pre-joined query
/// fragments, and comma-separated id lists all pass through placeholders.
/// `%` is included so fragments that arrive already percent-escaped survive
/// a second pass unchanged.
const PASS_THROUGH: [(&str, &str); 14] = [
    ("%3D", "="),
    ("%26", "&"),
    ("%2F", "/"),
    ("%3A", ":"),
    ("%3F", "?"),
    ("%2C", ","),
    ("%2B", "+"),
    ("%23", "#"),
    ("%5B", "["),
    ("%5D", "]"),
    ("%40", "@"),
    ("%3B", ";"),
    ("%24", "$"),
    ("%25", "%"),
];

/// Expand every `{name}` placeholder in `template` from `options`.
///
/// Each placeholder is replaced by the percent-encoded string form of the
/// matching option value. A name the option set does not recognize is a
/// lookup miss, not a fault: the placeholder expands to the empty string and
/// the rest of the URL is still produced.
pub(crate) fn expand_uri(template: &str, options: &RequestOptions) -> String {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER
        .get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("Failed to compile placeholder regex"));

    re.replace_all(template, |caps: &regex::Captures<'_>| {
        match options.value_of(&caps[1]) {
            Some(value) => encode_value(&value),
            None => String::new(),
        }
    })
    .into_owned()
}

/// Percent-encode a substituted value, keeping URL structure characters.
fn encode_value(value: &str) -> String {
    let mut encoded = urlencoding::encode(value).into_owned();
    for (escape, literal) in PASS_THROUGH {
        if encoded.contains(escape) {
            encoded = encoded.replace(escape, literal);
        }
    }
    encoded
}
