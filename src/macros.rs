macro_rules! fail {
    ($err:expr) => (
        return Err(From::from($err))
    );
    ($fmt:expr, $($arg:tt)*) => (
        return Err(From::from(format!($fmt, $($arg)*)))
    );
}

/// Returns early with a library error for the given netCDF status code.
macro_rules! nc_fail {
    ($code:expr) => {
        return Err($crate::error::Error::from_code($code))
    };
}

/// Panics if `$expr` is not an Err(err) with err.to_string() matching regexp `$err`.
#[cfg(test)]
macro_rules! assert_err_re {
    ($expr:expr, $err:expr) => {
        match $expr {
            Ok(_) => {
                panic!("assertion failed: not an error in `{}`", stringify!($expr));
            }
            Err(ref value) => {
                use regex::Regex;
                let re = Regex::new($err).unwrap();
                let desc = value.to_string();
                if !re.is_match(desc.as_ref()) {
                    panic!(
                        "assertion failed: error message \"{}\" doesn't match \"{}\" in `{}`",
                        desc,
                        re,
                        stringify!($expr)
                    );
                }
            }
        }
    };
}

/// Panics if `$expr` is not a library error carrying status `$code`.
#[cfg(test)]
macro_rules! assert_nc_err {
    ($expr:expr, $code:expr) => {
        match $expr {
            Ok(_) => {
                panic!("assertion failed: not an error in `{}`", stringify!($expr));
            }
            Err(ref err) => {
                assert_eq!(err.code(), Some($code), "unexpected error `{}`", err);
            }
        }
    };
}

/// Run a safe expression in a closure synchronized by a global reentrant mutex.
macro_rules! nclock_s {
    ($expr:expr) => {{
        $crate::sync::sync(|| $expr)
    }};
}

/// Run an unsafe expression in a closure synchronized by a global reentrant mutex.
macro_rules! nclock {
    ($expr:expr) => {
        nclock_s!(unsafe { $expr })
    };
}

/// Run a status-returning call under the lock and convert a non-zero status into an error.
macro_rules! nccall_s {
    ($expr:expr) => {{
        nclock_s!($crate::error::nccheck($expr))
    }};
}

macro_rules! nccall {
    ($expr:expr) => {
        nccall_s!(unsafe { $expr })
    };
}

macro_rules! nctry_s {
    ($expr:expr) => {
        match nccall_s!($expr) {
            Ok(value) => value,
            Err(err) => return Err(From::from(err)),
        }
    };
}

macro_rules! nctry {
    ($expr:expr) => {
        nctry_s!(unsafe { $expr })
    };
}
