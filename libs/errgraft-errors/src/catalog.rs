//! Built-in error kind catalog

use http::StatusCode;

/// Static definition of a built-in error kind.
///
/// `name` follows the upstream constructor naming convention
/// (`NotFoundError`); `code` is the machine code written into bodies
/// (`NotFound`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDef {
    pub name: &'static str,
    pub status: u16,
    pub code: &'static str,
}

macro_rules! builtin_kinds {
    ($($konst:ident => ($name:literal, $status:literal, $code:literal)),* $(,)?) => {
        $(
            pub const $konst: KindDef = KindDef {
                name: $name,
                status: $status,
                code: $code,
            };
        )*

        /// Every built-in kind, ordered by status code.
        pub const ALL: &[&KindDef] = &[$(&$konst),*];
    };
}

builtin_kinds! {
    BAD_REQUEST => ("BadRequestError", 400, "BadRequest"),
    UNAUTHORIZED => ("UnauthorizedError", 401, "Unauthorized"),
    PAYMENT_REQUIRED => ("PaymentRequiredError", 402, "PaymentRequired"),
    FORBIDDEN => ("ForbiddenError", 403, "Forbidden"),
    NOT_FOUND => ("NotFoundError", 404, "NotFound"),
    METHOD_NOT_ALLOWED => ("MethodNotAllowedError", 405, "MethodNotAllowed"),
    NOT_ACCEPTABLE => ("NotAcceptableError", 406, "NotAcceptable"),
    PROXY_AUTHENTICATION_REQUIRED =>
        ("ProxyAuthenticationRequiredError", 407, "ProxyAuthenticationRequired"),
    REQUEST_TIMEOUT => ("RequestTimeoutError", 408, "RequestTimeout"),
    CONFLICT => ("ConflictError", 409, "Conflict"),
    GONE => ("GoneError", 410, "Gone"),
    LENGTH_REQUIRED => ("LengthRequiredError", 411, "LengthRequired"),
    PRECONDITION_FAILED => ("PreconditionFailedError", 412, "PreconditionFailed"),
    PAYLOAD_TOO_LARGE => ("PayloadTooLargeError", 413, "PayloadTooLarge"),
    URI_TOO_LONG => ("UriTooLongError", 414, "UriTooLong"),
    UNSUPPORTED_MEDIA_TYPE => ("UnsupportedMediaTypeError", 415, "UnsupportedMediaType"),
    RANGE_NOT_SATISFIABLE => ("RangeNotSatisfiableError", 416, "RangeNotSatisfiable"),
    EXPECTATION_FAILED => ("ExpectationFailedError", 417, "ExpectationFailed"),
    IM_A_TEAPOT => ("ImATeapotError", 418, "ImATeapot"),
    MISDIRECTED_REQUEST => ("MisdirectedRequestError", 421, "MisdirectedRequest"),
    UNPROCESSABLE_ENTITY => ("UnprocessableEntityError", 422, "UnprocessableEntity"),
    LOCKED => ("LockedError", 423, "Locked"),
    FAILED_DEPENDENCY => ("FailedDependencyError", 424, "FailedDependency"),
    TOO_EARLY => ("TooEarlyError", 425, "TooEarly"),
    UPGRADE_REQUIRED => ("UpgradeRequiredError", 426, "UpgradeRequired"),
    PRECONDITION_REQUIRED => ("PreconditionRequiredError", 428, "PreconditionRequired"),
    TOO_MANY_REQUESTS => ("TooManyRequestsError", 429, "TooManyRequests"),
    REQUEST_HEADER_FIELDS_TOO_LARGE =>
        ("RequestHeaderFieldsTooLargeError", 431, "RequestHeaderFieldsTooLarge"),
    UNAVAILABLE_FOR_LEGAL_REASONS =>
        ("UnavailableForLegalReasonsError", 451, "UnavailableForLegalReasons"),
    INTERNAL_SERVER => ("InternalServerError", 500, "InternalServer"),
    NOT_IMPLEMENTED => ("NotImplementedError", 501, "NotImplemented"),
    BAD_GATEWAY => ("BadGatewayError", 502, "BadGateway"),
    SERVICE_UNAVAILABLE => ("ServiceUnavailableError", 503, "ServiceUnavailable"),
    GATEWAY_TIMEOUT => ("GatewayTimeoutError", 504, "GatewayTimeout"),
    HTTP_VERSION_NOT_SUPPORTED =>
        ("HttpVersionNotSupportedError", 505, "HttpVersionNotSupported"),
    VARIANT_ALSO_NEGOTIATES => ("VariantAlsoNegotiatesError", 506, "VariantAlsoNegotiates"),
    INSUFFICIENT_STORAGE => ("InsufficientStorageError", 507, "InsufficientStorage"),
    LOOP_DETECTED => ("LoopDetectedError", 508, "LoopDetected"),
    BANDWIDTH_LIMIT_EXCEEDED => ("BandwidthLimitExceededError", 509, "BandwidthLimitExceeded"),
    NOT_EXTENDED => ("NotExtendedError", 510, "NotExtended"),
    NETWORK_AUTHENTICATION_REQUIRED =>
        ("NetworkAuthenticationRequiredError", 511, "NetworkAuthenticationRequired"),
}

/// Looks up the built-in kind for an HTTP status code.
#[must_use]
pub fn for_status(status: u16) -> Option<&'static KindDef> {
    ALL.iter().find(|def| def.status == status).copied()
}

/// Name/code pair for a status with no catalog entry, derived from the
/// canonical reason phrase with non-alphanumerics dropped.
#[must_use]
pub fn synthesize(status: StatusCode) -> (String, String) {
    match status.canonical_reason() {
        Some(reason) => {
            let compact: String = reason.chars().filter(char::is_ascii_alphanumeric).collect();
            (format!("{compact}Error"), compact)
        }
        None => {
            let status = status.as_u16();
            (format!("Http{status}Error"), format!("Http{status}"))
        }
    }
}

/// Machine code derived from a kind name: the trailing `Error` suffix is
/// dropped when present.
#[must_use]
pub fn derive_code(name: &str) -> &str {
    match name.strip_suffix("Error") {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => name,
    }
}
