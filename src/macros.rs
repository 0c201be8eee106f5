use paste::paste;

/// `$name!()` -> empty response, `$name!(body)` -> response with body.
macro_rules! build_resp {
    ($name:ident, $path:ident) => {
        paste! {
            #[macro_export]
            macro_rules! [<$name _macro>] {
                () => {
                    actix_web::HttpResponse::$path().finish()
                };
                ($message:expr) => {
                    actix_web::HttpResponse::$path().body($message)
                };
            }
            #[allow(unused_imports)]
            pub use [<$name _macro>] as $name;
        }
    };
}

build_resp!(resp_404_NotFound, NotFound);

/// Unwraps `Ok`, otherwise returns the `Err` value from the enclosing function.
#[macro_export]
macro_rules! yeet_error_macro {
    ($result:expr) => {
        match $result {
            Ok(data) => data,
            Err(e) => return e,
        }
    };
}
#[allow(unused_imports)]
pub use yeet_error_macro as yeet_error;
