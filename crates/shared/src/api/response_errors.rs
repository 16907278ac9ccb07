use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::{Nothing, ServerError};

macro_rules! response_error {
    ($name:ident {
        $(
            #[code($variant_code:expr)]
            #[message($message:literal)]
            $variant:ident
            $({ $($var_struct_body_tt:tt)* })?
        ,)*
    }) => {

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
        pub enum $name {
            $(
                #[error($message)]
                $variant $({
                    $($var_struct_body_tt)*
                })?,
            )*
        }

        impl From<$name> for ServerError<$name> {
            fn from(inner: $name) -> Self {
                let code = match &inner {
                    $( $name::$variant { .. } => $variant_code, )*
                };
                Self::Inner { code, inner }
            }
        }
    };
}

response_error!(UserLookupError {
    #[code(StatusCode::BAD_REQUEST)]
    #[message("User not found")]
    UserNotFound,
});

// Aliases used to allow future expansion of the errors without having to go
// back and update all routes that use them
pub type ListUsersError = Nothing;
pub type CreateUserError = Nothing;
pub type CreateExerciseError = UserLookupError;
pub type FetchLogError = UserLookupError;
