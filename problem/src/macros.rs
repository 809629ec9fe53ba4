/// Build an `Err` holding a defect.
///
/// ```ignore
/// return defect!(DbError::Timeout);
/// ```
#[macro_export]
macro_rules! defect {
    ($error:expr) => {
        ::std::result::Result::Err($crate::Problem::defect($error))
    };
}

/// Build an `Err` holding a failure.
#[macro_export]
macro_rules! failure {
    ($error:expr) => {
        ::std::result::Result::Err($crate::Problem::failure($error))
    };
}

/// Return early with a defect.
///
/// ```ignore
/// let Some(row) = rows.first() else {
///     bail_defect!(DbError::EmptyResult);
/// };
/// ```
#[macro_export]
macro_rules! bail_defect {
    ($error:expr) => {
        return $crate::defect!($error)
    };
}

/// Return early with a failure.
#[macro_export]
macro_rules! bail_failure {
    ($error:expr) => {
        return $crate::failure!($error)
    };
}

/// Return early with a failure unless the condition holds.
///
/// ```ignore
/// ensure_failure!(email.contains('@'), SignupError::InvalidEmail);
/// ```
#[macro_export]
macro_rules! ensure_failure {
    ($cond:expr, $error:expr) => {
        if !$cond {
            $crate::bail_failure!($error);
        }
    };
}
