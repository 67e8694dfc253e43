//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type with C-compatible representations:
//! `*mut c_char` instead of `String`, pointer + length instead of `Vec`, and
//! enums with explicit discriminants. Conversion functions live here to keep
//! `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use countries_core::{Country, CountryError, ErrorKind, HttpMethod, HttpRequest};

/// Opaque handle to a `CountryClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiCountriesClient {
    pub(crate) inner: countries_core::CountryClient,
}

/// Copy `s` into a heap C string. Interior NULs are dropped rather than
/// failing the whole conversion.
pub(crate) fn to_c_string(s: impl Into<String>) -> *mut c_char {
    let s: String = s.into();
    let cleaned = if s.contains('\0') { s.replace('\0', "") } else { s };
    CString::new(cleaned).unwrap_or_default().into_raw()
}

/// Free a string produced by `to_c_string`. Null is ignored.
pub(crate) fn free_c_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `countries_build_list_request`. The C caller executes it and
/// passes the response back through `countries_parse_list_response`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: HttpRequest) -> *mut Self {
        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Box<[FfiHeader]> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: to_c_string(k),
                    value: to_c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            url: to_c_string(req.url),
            headers,
            headers_len,
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller builds this after executing the request and passes a pointer
/// to `countries_parse_list_response`. The FFI layer reads but never frees
/// these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiCountryResult`. The first seven map 1:1 onto
/// `CountryError` kinds.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    InvalidUrl = 1,
    NoData = 2,
    Decoding = 3,
    Server = 4,
    Network = 5,
    Unknown = 6,
    Panic = 7,
    NullArg = 8,
}

impl From<ErrorKind> for FfiErrorCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidUrl => FfiErrorCode::InvalidUrl,
            ErrorKind::NoData => FfiErrorCode::NoData,
            ErrorKind::Decoding => FfiErrorCode::Decoding,
            ErrorKind::Server => FfiErrorCode::Server,
            ErrorKind::Network => FfiErrorCode::Network,
            ErrorKind::Unknown => FfiErrorCode::Unknown,
        }
    }
}

/// A single country exposed to C. `formatted_population` is ready for display.
#[repr(C)]
pub struct FfiCountry {
    pub id: *mut c_char,
    pub name: *mut c_char,
    pub flag_url: *mut c_char,
    pub capital: *mut c_char,
    pub continent: *mut c_char,
    pub population: u64,
    pub formatted_population: *mut c_char,
}

impl FfiCountry {
    fn from_core(country: Country) -> Self {
        let formatted_population = to_c_string(country.formatted_population());
        FfiCountry {
            id: to_c_string(country.id.to_string()),
            name: to_c_string(country.name),
            flag_url: to_c_string(country.flag_url),
            capital: to_c_string(country.capital),
            continent: to_c_string(country.continent),
            population: country.population,
            formatted_population,
        }
    }

    /// Free the C-string fields (but not the struct itself).
    pub(crate) fn free_fields(&self) {
        free_c_string(self.id);
        free_c_string(self.name);
        free_c_string(self.flag_url);
        free_c_string(self.capital);
        free_c_string(self.continent);
        free_c_string(self.formatted_population);
    }
}

/// A list of countries exposed to C. `items` is null when `len` is 0.
#[repr(C)]
pub struct FfiCountryList {
    pub items: *mut FfiCountry,
    pub len: u32,
}

impl FfiCountryList {
    fn empty() -> Self {
        FfiCountryList {
            items: std::ptr::null_mut(),
            len: 0,
        }
    }
}

/// Result envelope for `countries_parse_list_response`.
///
/// On success `error_code` is `Ok`, both message pointers are null, and
/// `countries` holds the list sorted by name.
/// On failure `error_code` names the kind, `error_message` is the
/// user-facing description, `recovery_suggestion` may be null, `http_status`
/// is set for `Server`, and `countries` is empty.
#[repr(C)]
pub struct FfiCountryResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub recovery_suggestion: *mut c_char,
    pub http_status: u16,
    pub countries: FfiCountryList,
}

impl FfiCountryResult {
    pub(crate) fn ok_countries(countries: Vec<Country>) -> *mut Self {
        let len = countries.len() as u32;
        let items = if countries.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_countries: Box<[FfiCountry]> =
                countries.into_iter().map(FfiCountry::from_core).collect();
            Box::into_raw(ffi_countries) as *mut FfiCountry
        };

        Box::into_raw(Box::new(FfiCountryResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            recovery_suggestion: std::ptr::null_mut(),
            http_status: 0,
            countries: FfiCountryList { items, len },
        }))
    }

    pub(crate) fn from_error(err: CountryError) -> *mut Self {
        let recovery_suggestion = match err.recovery_suggestion() {
            Some(s) => to_c_string(s),
            None => std::ptr::null_mut(),
        };
        Box::into_raw(Box::new(FfiCountryResult {
            error_code: err.kind().into(),
            error_message: to_c_string(err.to_string()),
            recovery_suggestion,
            http_status: err.status().unwrap_or(0),
            countries: FfiCountryList::empty(),
        }))
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::bare(FfiErrorCode::NullArg, format!("null argument: {name}"))
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::bare(FfiErrorCode::Panic, msg.to_string())
    }

    fn bare(error_code: FfiErrorCode, msg: String) -> *mut Self {
        Box::into_raw(Box::new(FfiCountryResult {
            error_code,
            error_message: to_c_string(msg),
            recovery_suggestion: std::ptr::null_mut(),
            http_status: 0,
            countries: FfiCountryList::empty(),
        }))
    }
}
