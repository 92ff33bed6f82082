//! Status Name Resolution
//!
//! Fixed table mapping HTTP reason phrases to numeric status codes, for
//! backend handlers that report their status by name.

// == Response Status ==
/// A response status as reported by the backend handler: either a numeric
/// code or a reason-phrase name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseStatus {
    /// Numeric status code
    Code(u16),
    /// Reason-phrase name, e.g. "Not Found"
    Named(String),
}

/// Resolves the effective numeric status code.
///
/// Named statuses map through the fixed reason-phrase table; a missing or
/// unrecognized status defaults to 200.
pub fn effective_status(status: Option<&ResponseStatus>) -> u16 {
    match status {
        Some(ResponseStatus::Code(code)) => *code,
        Some(ResponseStatus::Named(name)) => code_from_name(name).unwrap_or(200),
        None => 200,
    }
}

/// Maps a reason phrase to its numeric status code.
pub fn code_from_name(name: &str) -> Option<u16> {
    let code = match name {
        "Continue" => 100,
        "Switching Protocols" => 101,
        "Processing" => 102,
        "OK" => 200,
        "Created" => 201,
        "Accepted" => 202,
        "Non-Authoritative Information" => 203,
        "No Content" => 204,
        "Reset Content" => 205,
        "Partial Content" => 206,
        "Multiple Choices" => 300,
        "Moved Permanently" => 301,
        "Found" => 302,
        "See Other" => 303,
        "Not Modified" => 304,
        "Temporary Redirect" => 307,
        "Permanent Redirect" => 308,
        "Bad Request" => 400,
        "Unauthorized" => 401,
        "Payment Required" => 402,
        "Forbidden" => 403,
        "Not Found" => 404,
        "Method Not Allowed" => 405,
        "Not Acceptable" => 406,
        "Proxy Authentication Required" => 407,
        "Request Timeout" => 408,
        "Conflict" => 409,
        "Gone" => 410,
        "Length Required" => 411,
        "Precondition Failed" => 412,
        "Payload Too Large" => 413,
        "URI Too Long" => 414,
        "Unsupported Media Type" => 415,
        "Range Not Satisfiable" => 416,
        "Expectation Failed" => 417,
        "I'm a teapot" => 418,
        "Unprocessable Entity" => 422,
        "Too Early" => 425,
        "Upgrade Required" => 426,
        "Precondition Required" => 428,
        "Too Many Requests" => 429,
        "Request Header Fields Too Large" => 431,
        "Unavailable For Legal Reasons" => 451,
        "Internal Server Error" => 500,
        "Not Implemented" => 501,
        "Bad Gateway" => 502,
        "Service Unavailable" => 503,
        "Gateway Timeout" => 504,
        "HTTP Version Not Supported" => 505,
        _ => return None,
    };
    Some(code)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_status_passes_through() {
        assert_eq!(effective_status(Some(&ResponseStatus::Code(404))), 404);
    }

    #[test]
    fn test_named_status_resolves() {
        let status = ResponseStatus::Named("Not Found".to_string());
        assert_eq!(effective_status(Some(&status)), 404);

        let status = ResponseStatus::Named("Too Many Requests".to_string());
        assert_eq!(effective_status(Some(&status)), 429);
    }

    #[test]
    fn test_missing_status_defaults_to_200() {
        assert_eq!(effective_status(None), 200);
    }

    #[test]
    fn test_unknown_name_defaults_to_200() {
        let status = ResponseStatus::Named("Quite Unusual".to_string());
        assert_eq!(effective_status(Some(&status)), 200);
    }

    #[test]
    fn test_table_spot_checks() {
        assert_eq!(code_from_name("OK"), Some(200));
        assert_eq!(code_from_name("No Content"), Some(204));
        assert_eq!(code_from_name("Internal Server Error"), Some(500));
        assert_eq!(code_from_name("ok"), None);
    }
}
