//! C-ABI wrapper around `countries-core`.
//!
//! # Overview
//! Lets a native host (the mobile rendering layer) drive the countries list
//! without linking Rust's async runtime: it asks for the request, performs
//! the GET itself, and hands the response back to get mapped countries,
//! sorted by name, or a classified error with user-facing text.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - `FfiCountryResult` carries both outcomes: an error code plus message and
//!   recovery suggestion, or an inline country list.
//! - The C caller owns all returned pointers and must call the matching
//!   `countries_free_*` function to release them.

pub mod types;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::catch_unwind;

use countries_core::{sorted_by_name, CountryClient, HttpResponse};

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a client bound to `base_url` (e.g. `https://restcountries.com/v3.1`).
///
/// Returns null if `base_url` is null or not UTF-8.
/// The caller must free the returned pointer with `countries_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn countries_client_new(base_url: *const c_char) -> *mut FfiCountriesClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let Ok(url) = unsafe { CStr::from_ptr(base_url) }.to_str() else {
            return std::ptr::null_mut();
        };
        Box::into_raw(Box::new(FfiCountriesClient {
            inner: CountryClient::new(url),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Create a client bound to the public REST Countries API.
#[unsafe(no_mangle)]
pub extern "C" fn countries_client_new_default() -> *mut FfiCountriesClient {
    catch_unwind(|| {
        Box::into_raw(Box::new(FfiCountriesClient {
            inner: CountryClient::default(),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn countries_client_free(client: *mut FfiCountriesClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Request / response
// ---------------------------------------------------------------------------

/// Build the GET request for the full country list.
///
/// Returns null if `client` is null or its base URL does not form a valid
/// URL. When `error_out` is non-null, a failure also stores an
/// `FfiCountryResult` there (`NullArg` or `InvalidUrl`, with message and
/// recovery suggestion) for the caller to free with `countries_free_result`;
/// on success `*error_out` is set to null.
/// The caller must free the returned request with `countries_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn countries_build_list_request(
    client: *const FfiCountriesClient,
    error_out: *mut *mut FfiCountryResult,
) -> *mut FfiHttpRequest {
    let (request, error) = catch_unwind(|| {
        if client.is_null() {
            return (std::ptr::null_mut(), FfiCountryResult::null_arg("client"));
        }
        let client = unsafe { &*client };
        match client.inner.build_list_countries() {
            Ok(req) => (FfiHttpRequest::from_core(req), std::ptr::null_mut()),
            Err(e) => (std::ptr::null_mut(), FfiCountryResult::from_error(e)),
        }
    })
    .unwrap_or_else(|_| {
        (
            std::ptr::null_mut(),
            FfiCountryResult::panic("panic in countries_build_list_request"),
        )
    });

    if error_out.is_null() {
        countries_free_result(error);
    } else {
        unsafe { *error_out = error };
    }
    request
}

/// Interpret the response to `countries_build_list_request`.
///
/// On success the countries are mapped and sorted by name. A null body is
/// treated as empty, which yields `Decoding` for a 2xx status.
/// The caller must free the result with `countries_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn countries_parse_list_response(
    client: *const FfiCountriesClient,
    response: *const FfiHttpResponse,
) -> *mut FfiCountryResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiCountryResult::null_arg("client");
        }
        if response.is_null() {
            return FfiCountryResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.inner.parse_list_countries(ffi_response_to_core(resp)) {
            Ok(countries) => FfiCountryResult::ok_countries(sorted_by_name(countries)),
            Err(e) => FfiCountryResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiCountryResult::panic("panic in countries_parse_list_response"))
}

fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }.to_string_lossy().into_owned()
    };
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body,
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free a request returned by `countries_build_list_request`. Safe with null.
#[unsafe(no_mangle)]
pub extern "C" fn countries_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.url);
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    req.headers,
                    req.headers_len as usize,
                ))
            };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    });
}

/// Free a result returned by `countries_parse_list_response`. Safe with null.
#[unsafe(no_mangle)]
pub extern "C" fn countries_free_result(result: *mut FfiCountryResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        free_c_string(result.recovery_suggestion);
        let list = &result.countries;
        if !list.items.is_null() && list.len > 0 {
            let items = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(list.items, list.len as usize))
            };
            for item in items.iter() {
                item.free_fields();
            }
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn countries_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| free_c_string(s));
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
