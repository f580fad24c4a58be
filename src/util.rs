// MIT/Apache2 License

/// Declare a fieldless enum whose variants map to the string keys understood by the drawing context and the
/// chart configuration. Generates `ALL`, `as_str`, `Display` and `FromStr`.
macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($what:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $key:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// The string key of this variant.
            #[inline]
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::Error;

            fn from_str(s: &str) -> crate::error::Result<$name> {
                match s {
                    $($key => Ok($name::$variant),)*
                    _ => Err(crate::error::ErrorKind::UnknownKey($what, s.to_string()).into()),
                }
            }
        }
    };
}
