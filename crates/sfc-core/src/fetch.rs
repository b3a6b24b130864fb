//! Single blocking GET of the codes page.
//!
//! Uses the curl crate (libcurl). No timeouts and no retries: a transport
//! failure or non-2xx status aborts the lookup.

use crate::error::ExtractError;
use std::collections::BTreeMap;

/// Fetches `url` with the given request headers and returns the body as text.
///
/// Follows redirects. Runs in the current thread.
pub fn fetch_page(url: &str, headers: &BTreeMap<String, String>) -> Result<String, ExtractError> {
    let transport = |source: curl::Error| ExtractError::Transport {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.get(true).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.max_redirections(10).map_err(transport)?;
    // Let libcurl handle gzip/deflate/br if the server compresses the page.
    easy.accept_encoding("").map_err(transport)?;

    let mut list = curl::easy::List::new();
    for line in header_lines(headers) {
        list.append(&line).map_err(transport)?;
    }
    if !headers.is_empty() {
        easy.http_headers(list).map_err(transport)?;
    }

    tracing::debug!("GET {} with {} header(s)", url, headers.len());
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let code = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&code) {
        return Err(ExtractError::Http {
            url: url.to_string(),
            code,
        });
    }

    let content_type = easy.content_type().map_err(transport)?.map(str::to_string);
    tracing::debug!("GET {} -> HTTP {} ({} bytes)", url, code, body.len());
    Ok(decode_body(&body, content_type.as_deref()))
}

/// Decode the body using the `charset` of `Content-Type`, defaulting to UTF-8.
///
/// An unknown charset label falls back to lossy UTF-8 with a warning.
pub(crate) fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let label = content_type.and_then(charset_param);
    let encoding = match label {
        Some(name) => match encoding_rs::Encoding::for_label(name.as_bytes()) {
            Some(enc) => enc,
            None => {
                tracing::warn!("unknown charset `{}`, decoding as UTF-8", name);
                encoding_rs::UTF_8
            }
        },
        None => encoding_rs::UTF_8,
    };
    let (text, _, malformed) = encoding.decode(body);
    if malformed {
        tracing::warn!("body is not valid {}, replaced malformed bytes", encoding.name());
    }
    text.into_owned()
}

/// Value of the `charset` parameter in a `Content-Type` header.
fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// Render headers as curl `Name: value` lines.
pub(crate) fn header_lines(headers: &BTreeMap<String, String>) -> Vec<String> {
    headers
        .iter()
        .map(|(k, v)| format!("{}: {}", k.trim(), v.trim()))
        .collect()
}
