//! Macros for code generation of closed vocabularies.
//!
//! Several record fields may only carry one of a fixed set of tokens. The
//! [`closed_vocabulary!`](crate::closed_vocabulary) macro generates the enum
//! together with both directions of the token mapping, so a new variant is
//! declared exactly once and every `match` over it is checked for exhaustiveness.

/// Macro to generate a closed-set enum with token mapping in both directions.
///
/// Generates:
/// - the enum itself (`Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
///   `PartialOrd`, `Ord`, `Serialize`, `Deserialize`)
/// - `ALL`: every variant, in declaration order
/// - `from_token()`: exact, case-sensitive match; anything else is
///   [`TranscodeError::UnrecognizedEnumValue`](crate::TranscodeError::UnrecognizedEnumValue)
/// - `as_token()`: the canonical token for a variant
/// - a `Display` impl that renders `as_token()`
///
/// # Example
///
/// ```ignore
/// closed_vocabulary! {
///     /// Urgency of an upload
///     pub enum Urgency: "Urgency" {
///         /// low
///         Low => "low",
///         /// high
///         High => "high",
///     }
/// }
/// ```
#[macro_export]
macro_rules! closed_vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $field:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Map a token to its variant.
            ///
            /// # Errors
            ///
            /// Returns an error if the token is not one of the recognized tokens.
            pub fn from_token(token: &str) -> $crate::error::Result<Self> {
                match token {
                    $($token => Ok($name::$variant),)+
                    other => Err($crate::error::TranscodeError::UnrecognizedEnumValue {
                        field: $field,
                        token: other.to_string(),
                    }),
                }
            }

            /// The canonical token for this variant.
            #[must_use]
            pub const fn as_token(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_token())
            }
        }
    };
}
